use serde::Serialize;

use crate::domain::course::{Course, CourseKind};
use crate::dto::{CategoryOption, Pager, TabLink};
use crate::pagination::Paginated;
use crate::view_state::ViewState;

/// Course with the values the card derives from it.
#[derive(Debug, Serialize)]
pub struct CourseCard {
    pub course: Course,
    pub discount_rate: u32,
    pub subject_label: Option<&'static str>,
    pub in_cart: bool,
    /// Link that adds the course to the cart or takes it out.
    pub cart_href: String,
}

impl From<Course> for CourseCard {
    fn from(course: Course) -> Self {
        Self {
            discount_rate: course.discount_rate(),
            subject_label: course.subject.map(|subject| subject.label()),
            in_cart: false,
            cart_href: String::new(),
            course,
        }
    }
}

/// Row of the cart panel.
#[derive(Debug, Serialize)]
pub struct CartLine {
    pub id: String,
    pub title: String,
    pub price: u32,
    pub remove_href: String,
}

/// Data required to render the registration catalog.
#[derive(Debug, Serialize)]
pub struct CoursesPageData {
    pub state: ViewState<CourseKind>,
    pub kind: CourseKind,
    pub tabs: Vec<TabLink>,
    /// Empty for tabs without a subject filter.
    pub subjects: Vec<CategoryOption>,
    pub courses: Paginated<CourseCard>,
    pub pager: Pager,
    pub cart: Vec<CartLine>,
    pub cart_count: usize,
    /// Sum of sale prices in the cart, KRW.
    pub cart_total: u64,
}

//! Services backing the course registration catalog.

use crate::domain::course::{Course, CourseKind, Subject};
use crate::dto::courses::{CartLine, CourseCard, CoursesPageData};
use crate::dto::{CategoryOption, Pager, TabLink};
use crate::filter::ALL_CATEGORIES;
use crate::repository::CourseReader;
use crate::services::{ServiceResult, paginate_view};
use crate::view_state::{Selection, ViewAction, ViewState};

pub const COURSES_PATH: &str = "/courses";
pub const COURSES_ITEMS_PER_PAGE: usize = 10;

/// Loads one page of the course catalog for the requested tab.
///
/// The subject filter only narrows single courses; packages ignore it. Cart
/// ids that match no course are dropped.
pub fn load_courses_page<R>(
    repo: &R,
    query: ViewState<CourseKind>,
    items_per_page: usize,
) -> ServiceResult<CoursesPageData>
where
    R: CourseReader + ?Sized,
{
    let mut state = query.normalized(Some(CourseKind::default()));
    let kind = state.tab.unwrap_or_default();
    if !kind.has_subjects() {
        state.category = ALL_CATEGORIES.to_string();
    }

    let courses = repo.list_courses().map_err(|err| {
        log::error!("Failed to list courses: {err}");
        err
    })?;

    let in_cart: Vec<Course> = state
        .cart
        .iter()
        .filter_map(|id| courses.iter().find(|course| course.id.as_str() == id))
        .cloned()
        .collect();
    state.cart = Selection::new(in_cart.iter().map(|course| course.id.as_str()));

    let criteria = state.criteria();
    let (state, page_state, courses) = paginate_view(courses, state, &criteria, items_per_page)?;

    let tabs = CourseKind::ALL
        .into_iter()
        .map(|tab| TabLink {
            value: tab.as_str(),
            label: tab.label(),
            href: state.apply(ViewAction::SetTab(tab)).href(COURSES_PATH),
            active: tab == kind,
        })
        .collect();

    let subjects = if kind.has_subjects() {
        std::iter::once((ALL_CATEGORIES, "전체"))
            .chain(
                Subject::ALL
                    .into_iter()
                    .map(|subject| (subject.as_str(), subject.label())),
            )
            .map(|(value, label)| CategoryOption {
                value: value.to_string(),
                label: label.to_string(),
                href: state
                    .apply(ViewAction::SetCategory(value.to_string()))
                    .href(COURSES_PATH),
                selected: state.category == value,
            })
            .collect()
    } else {
        Vec::new()
    };

    let cart: Vec<CartLine> = in_cart
        .into_iter()
        .map(|course| CartLine {
            remove_href: state
                .apply(ViewAction::ToggleCart(course.id.to_string()))
                .href(COURSES_PATH),
            id: course.id.to_string(),
            title: course.title,
            price: course.price,
        })
        .collect();
    let cart_total = cart.iter().map(|line| u64::from(line.price)).sum();

    let courses = courses.map(|course| {
        let in_cart = state.cart.contains(course.id.as_str());
        let cart_href = state
            .apply(ViewAction::ToggleCart(course.id.to_string()))
            .href(COURSES_PATH);
        CourseCard {
            in_cart,
            cart_href,
            ..CourseCard::from(course)
        }
    });

    let pager = Pager::new(&state, &page_state, COURSES_PATH);

    Ok(CoursesPageData {
        cart_count: cart.len(),
        cart,
        cart_total,
        state,
        kind,
        tabs,
        subjects,
        courses,
        pager,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryRepository;

    fn repo() -> InMemoryRepository {
        InMemoryRepository::seeded().unwrap()
    }

    fn ids(data: &CoursesPageData) -> Vec<String> {
        data.courses
            .items
            .iter()
            .map(|card| card.course.id.to_string())
            .collect()
    }

    #[test]
    fn defaults_to_packages() {
        let data =
            load_courses_page(&repo(), ViewState::default(), COURSES_ITEMS_PER_PAGE).unwrap();

        assert_eq!(data.kind, CourseKind::Package);
        assert_eq!(ids(&data), vec!["p1", "p2"]);
        assert!(data.subjects.is_empty());
    }

    #[test]
    fn package_tab_ignores_subject() {
        let query = ViewState {
            category: "civil".into(),
            ..ViewState::new(CourseKind::Package)
        };

        let data = load_courses_page(&repo(), query, COURSES_ITEMS_PER_PAGE).unwrap();

        assert_eq!(ids(&data), vec!["p1", "p2"]);
        assert_eq!(data.state.category, ALL_CATEGORIES);
    }

    #[test]
    fn single_tab_filters_by_subject() {
        let query = ViewState {
            category: "civil".into(),
            ..ViewState::new(CourseKind::Single)
        };

        let data = load_courses_page(&repo(), query, COURSES_ITEMS_PER_PAGE).unwrap();

        assert_eq!(ids(&data), vec!["s2"]);
        assert_eq!(data.courses.items[0].subject_label, Some("민법"));
        assert_eq!(data.subjects.len(), 6);
    }

    #[test]
    fn switching_tab_link_drops_subject() {
        let query = ViewState {
            category: "tax".into(),
            ..ViewState::new(CourseKind::Single)
        };

        let data = load_courses_page(&repo(), query, COURSES_ITEMS_PER_PAGE).unwrap();

        let package = data
            .tabs
            .iter()
            .find(|tab| tab.value == "package")
            .unwrap();
        assert_eq!(package.href, "/courses?tab=package&page=1");
    }

    #[test]
    fn cards_carry_discount() {
        let data =
            load_courses_page(&repo(), ViewState::new(CourseKind::Single), 2).unwrap();

        assert_eq!(data.courses.items[0].discount_rate, 67);
        assert_eq!(data.courses.total_pages, 3);
    }

    fn with_cart(kind: CourseKind, ids: &[&str]) -> ViewState<CourseKind> {
        ViewState {
            cart: Selection::new(ids.iter().copied()),
            ..ViewState::new(kind)
        }
    }

    #[test]
    fn cart_link_adds_then_removes_course() {
        let data =
            load_courses_page(&repo(), ViewState::new(CourseKind::Single), COURSES_ITEMS_PER_PAGE)
                .unwrap();
        let card = &data.courses.items[0];
        assert!(!card.in_cart);
        assert_eq!(data.cart_count, 0);

        let query = card.cart_href.trim_start_matches("/courses?");
        let added: ViewState<CourseKind> = serde_html_form::from_str(query).unwrap();
        let data = load_courses_page(&repo(), added, COURSES_ITEMS_PER_PAGE).unwrap();
        let card = &data.courses.items[0];
        assert!(card.in_cart);
        assert_eq!(data.cart_count, 1);
        assert_eq!(data.cart[0].id, card.course.id.to_string());

        let query = card.cart_href.trim_start_matches("/courses?");
        let removed: ViewState<CourseKind> = serde_html_form::from_str(query).unwrap();
        let data = load_courses_page(&repo(), removed, COURSES_ITEMS_PER_PAGE).unwrap();
        assert!(!data.courses.items[0].in_cart);
        assert_eq!(data.cart_count, 0);
    }

    #[test]
    fn cart_spans_tabs_and_sums_prices() {
        let data = load_courses_page(
            &repo(),
            with_cart(CourseKind::Package, &["s1", "p1"]),
            COURSES_ITEMS_PER_PAGE,
        )
        .unwrap();

        let ids: Vec<&str> = data.cart.iter().map(|line| line.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "p1"]);
        assert_eq!(
            data.cart_total,
            data.cart.iter().map(|line| u64::from(line.price)).sum::<u64>()
        );
        let single = data.tabs.iter().find(|tab| tab.value == "single").unwrap();
        assert!(single.href.contains("cart=s1%2Cp1"));
    }

    #[test]
    fn unknown_cart_ids_are_dropped() {
        let data = load_courses_page(
            &repo(),
            with_cart(CourseKind::Single, &["nope", "s2"]),
            COURSES_ITEMS_PER_PAGE,
        )
        .unwrap();

        assert_eq!(data.cart_count, 1);
        assert_eq!(data.state.cart.iter().collect::<Vec<_>>(), vec!["s2"]);
    }
}

//! Page arithmetic shared by the board, course catalog and comment lists.
//!
//! Everything here is a pure function of `(total_items, items_per_page,
//! current_page)`. An out-of-range page is never an error: it simply yields an
//! empty slice, and callers that care clamp through
//! [`crate::view_state::ViewState::clamp`].

use std::ops::Range;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Largest total page count rendered without ellipsis.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Text emitted in place of skipped page numbers.
pub const ELLIPSIS: &str = "...";

/// Errors raised by the pagination engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    /// A caller contract was violated, e.g. zero items per page.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type PaginationResult<T> = Result<T, PaginationError>;

/// One cell of the compact page selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageLabel {
    Page(usize),
    Ellipsis,
}

impl PageLabel {
    /// Page number carried by the label, `None` for an ellipsis.
    pub const fn page(self) -> Option<usize> {
        match self {
            PageLabel::Page(page) => Some(page),
            PageLabel::Ellipsis => None,
        }
    }
}

impl Serialize for PageLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageLabel::Page(page) => serializer.serialize_u64(*page as u64),
            PageLabel::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

/// Returns `max(1, ceil(total_items / items_per_page))`.
pub fn total_pages(total_items: usize, items_per_page: usize) -> PaginationResult<usize> {
    if items_per_page == 0 {
        return Err(PaginationError::InvalidArgument(
            "items per page must be greater than zero",
        ));
    }
    Ok(total_items.div_ceil(items_per_page).max(1))
}

/// Builds the page selector labels.
///
/// At most five numeric cells are shown besides the anchored first and last
/// page:
///
/// * up to 5 pages: every page;
/// * current page within the first three: `1 2 3 4 ... N`;
/// * current page within the last three: `1 ... N-3 N-2 N-1 N`;
/// * otherwise: `1 ... c-1 c c+1 ... N`.
pub fn page_labels(current_page: usize, total_pages: usize) -> Vec<PageLabel> {
    use PageLabel::{Ellipsis, Page};

    let total_pages = total_pages.max(1);

    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(Page).collect();
    }

    if current_page <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total_pages)]
    } else if current_page >= total_pages - 2 {
        vec![
            Page(1),
            Ellipsis,
            Page(total_pages - 3),
            Page(total_pages - 2),
            Page(total_pages - 1),
            Page(total_pages),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current_page - 1),
            Page(current_page),
            Page(current_page + 1),
            Ellipsis,
            Page(total_pages),
        ]
    }
}

/// Buttons surrounding the numeric page cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    First,
    Prev,
    Next,
    Last,
}

impl NavAction {
    pub const ALL: [NavAction; 4] = [
        NavAction::First,
        NavAction::Prev,
        NavAction::Next,
        NavAction::Last,
    ];

    /// Page the action leads to.
    pub fn target(self, current_page: usize, total_pages: usize) -> usize {
        let total_pages = total_pages.max(1);
        match self {
            NavAction::First => 1,
            NavAction::Prev => current_page.saturating_sub(1).max(1),
            NavAction::Next => (current_page + 1).min(total_pages),
            NavAction::Last => total_pages,
        }
    }

    /// First/prev are disabled on page 1, next/last on the final page.
    pub fn is_disabled(self, current_page: usize, total_pages: usize) -> bool {
        match self {
            NavAction::First | NavAction::Prev => current_page == 1,
            NavAction::Next | NavAction::Last => current_page == total_pages.max(1),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            NavAction::First => "first",
            NavAction::Prev => "prev",
            NavAction::Next => "next",
            NavAction::Last => "last",
        }
    }
}

/// Position of a list view: which page is shown and how big the list is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
}

impl PageState {
    /// Creates a page state, rejecting a zero page size.
    ///
    /// A zero `current_page` is read as the first page.
    pub fn new(
        current_page: usize,
        items_per_page: usize,
        total_items: usize,
    ) -> PaginationResult<Self> {
        if items_per_page == 0 {
            return Err(PaginationError::InvalidArgument(
                "items per page must be greater than zero",
            ));
        }

        Ok(Self {
            current_page: current_page.max(1),
            items_per_page,
            total_items,
        })
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page).max(1)
    }

    pub fn is_out_of_range(&self) -> bool {
        self.current_page > self.total_pages()
    }

    /// Index range of the visible window, empty past the last page.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.items_per_page)
            .min(self.total_items);
        let end = self
            .current_page
            .saturating_mul(self.items_per_page)
            .min(self.total_items);
        start..end
    }

    pub fn visible_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.visible_range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    pub fn labels(&self) -> Vec<PageLabel> {
        page_labels(self.current_page, self.total_pages())
    }

    pub fn navigate(&self, action: NavAction) -> usize {
        action.target(self.current_page, self.total_pages())
    }

    pub fn is_disabled(&self, action: NavAction) -> bool {
        action.is_disabled(self.current_page, self.total_pages())
    }
}

/// A single page of items plus everything a template needs to draw a pager.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<PageLabel>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Paginated<T> {
    /// Wraps an already sliced page.
    pub fn new(items: Vec<T>, state: PageState) -> Self {
        Self {
            items,
            pages: state.labels(),
            page: state.current_page,
            total_pages: state.total_pages(),
            total_items: state.total_items,
        }
    }

    /// Slices `items` down to the page described by `current_page`.
    pub fn paginate(
        items: Vec<T>,
        current_page: usize,
        items_per_page: usize,
    ) -> PaginationResult<Self> {
        let state = PageState::new(current_page, items_per_page, items.len())?;
        let range = state.visible_range();
        let page_items = items
            .into_iter()
            .skip(range.start)
            .take(range.len())
            .collect();

        Ok(Self::new(page_items, state))
    }

    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            pages: self.pages,
            page: self.page,
            total_pages: self.total_pages,
            total_items: self.total_items,
        }
    }
}

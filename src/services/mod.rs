pub mod api;
pub mod community;
pub mod courses;
pub mod errors;
pub mod event;

pub use errors::{ServiceError, ServiceResult};

use crate::filter::{FilterCriteria, Filterable, filter_items};
use crate::pagination::{self, PageState, Paginated};
use crate::view_state::ViewState;

/// Filters `items`, clamps the requested page and slices the result.
///
/// Returns the clamped state alongside the page so links rendered from it
/// never point past the last page.
pub(crate) fn paginate_view<T, K>(
    items: Vec<T>,
    state: ViewState<K>,
    criteria: &FilterCriteria<K>,
    items_per_page: usize,
) -> ServiceResult<(ViewState<K>, PageState, Paginated<T>)>
where
    T: Filterable<Kind = K>,
    K: Clone + PartialEq,
{
    let filtered = filter_items(items, criteria);
    let total_pages = pagination::total_pages(filtered.len(), items_per_page)?;

    let requested = state.page;
    let state = state.clamp(total_pages);
    if state.page != requested {
        log::debug!("Requested page {requested} clamped to {}", state.page);
    }

    let page_state = PageState::new(state.page, items_per_page, filtered.len())?;
    let paginated = Paginated::paginate(filtered, state.page, items_per_page)?;

    Ok((state, page_state, paginated))
}

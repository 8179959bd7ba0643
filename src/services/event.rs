//! Services backing the event page and its pledge comments.

use crate::domain::comment::NewEventComment;
use crate::dto::Pager;
use crate::dto::event::EventPageData;
use crate::filter::ALL_CATEGORIES;
use crate::forms::event::CommentForm;
use crate::repository::EventCommentReader;
use crate::services::{ServiceResult, paginate_view};
use crate::view_state::ViewState;

pub const EVENT_PATH: &str = "/event";
pub const COMMENTS_ITEMS_PER_PAGE: usize = 5;

/// Loads one page of event comments.
///
/// Comments have no category, so a category in the query is ignored.
pub fn load_event_page<R>(
    repo: &R,
    query: ViewState<()>,
    items_per_page: usize,
) -> ServiceResult<EventPageData>
where
    R: EventCommentReader + ?Sized,
{
    let mut state = query.normalized(None);
    state.category = ALL_CATEGORIES.to_string();

    let comments = repo.list_event_comments().map_err(|err| {
        log::error!("Failed to list event comments: {err}");
        err
    })?;

    let criteria = state.criteria();
    let (state, page_state, comments) =
        paginate_view(comments, state, &criteria, items_per_page)?;

    Ok(EventPageData {
        pager: Pager::new(&state, &page_state, EVENT_PATH),
        comments,
    })
}

/// Validates a pledge. The demo keeps nothing; callers send the user back to
/// the first page of comments.
pub fn submit_comment(form: CommentForm) -> ServiceResult<NewEventComment> {
    let comment = NewEventComment::try_from(form).map_err(|err| {
        log::warn!("Rejected event comment: {err}");
        err
    })?;

    log::info!(
        "Accepted event comment ({} chars)",
        comment.content.chars().count()
    );

    Ok(comment)
}

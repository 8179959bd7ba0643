use crate::domain::post::BoardType;
use crate::dto::api::PostsResponse;
use crate::repository::PostReader;
use crate::services::{ServiceResult, paginate_view};
use crate::view_state::ViewState;

/// Returns the filtered page of posts requested through the JSON API.
pub fn list_posts<R>(
    repo: &R,
    query: ViewState<BoardType>,
    items_per_page: usize,
) -> ServiceResult<PostsResponse>
where
    R: PostReader + ?Sized,
{
    let state = query.normalized(Some(BoardType::default()));
    let posts = repo.list_posts()?;

    let criteria = state.criteria();
    let (_, _, page) = paginate_view(posts, state, &criteria, items_per_page)?;

    Ok(PostsResponse {
        total: page.total_items,
        total_pages: page.total_pages,
        page: page.page,
        pages: page.pages,
        posts: page.items,
    })
}

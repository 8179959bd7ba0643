//! Services backing the community board pages.

use crate::domain::post::{BOARD_CATEGORIES, BoardType, Post};
use crate::domain::types::PostId;
use crate::dto::community::{BoardPageData, PostDetailData};
use crate::dto::{CategoryOption, Pager, TabLink};
use crate::repository::PostReader;
use crate::services::{ServiceError, ServiceResult, paginate_view};
use crate::view_state::{ViewAction, ViewState};

pub const BOARD_PATH: &str = "/community";
pub const BOARD_ITEMS_PER_PAGE: usize = 4;
/// Number of photo reviews in the "best" gallery.
pub const GALLERY_SIZE: usize = 3;

/// Most viewed review posts that carry photos.
pub fn best_photo_reviews(posts: &[Post], limit: usize) -> Vec<Post> {
    let mut reviews: Vec<Post> = posts
        .iter()
        .filter(|post| post.is_photo_review())
        .cloned()
        .collect();
    reviews.sort_by(|a, b| b.views.cmp(&a.views));
    reviews.truncate(limit);
    reviews
}

/// Loads one page of the requested board.
pub fn load_board_page<R>(
    repo: &R,
    query: ViewState<BoardType>,
    items_per_page: usize,
) -> ServiceResult<BoardPageData>
where
    R: PostReader + ?Sized,
{
    let state = query.normalized(Some(BoardType::default()));
    let board = state.tab.unwrap_or_default();

    let posts = repo.list_posts().map_err(|err| {
        log::error!("Failed to list posts: {err}");
        err
    })?;

    let gallery = if board == BoardType::Review {
        best_photo_reviews(&posts, GALLERY_SIZE)
    } else {
        Vec::new()
    };

    let criteria = state.criteria();
    let (state, page_state, posts) = paginate_view(posts, state, &criteria, items_per_page)?;

    let tabs = BoardType::ALL
        .into_iter()
        .map(|tab| TabLink {
            value: tab.as_str(),
            label: tab.label(),
            href: state.apply(ViewAction::SetTab(tab)).href(BOARD_PATH),
            active: tab == board,
        })
        .collect();

    let categories = BOARD_CATEGORIES
        .into_iter()
        .map(|(value, label)| CategoryOption {
            value: value.to_string(),
            label: label.to_string(),
            href: state
                .apply(ViewAction::SetCategory(value.to_string()))
                .href(BOARD_PATH),
            selected: state.category == value,
        })
        .collect();

    let pager = Pager::new(&state, &page_state, BOARD_PATH);

    Ok(BoardPageData {
        state,
        board,
        tabs,
        categories,
        posts,
        pager,
        gallery,
    })
}

/// Loads a single post with its neighbours on the same board.
pub fn load_post_detail<R>(repo: &R, post_id: i32) -> ServiceResult<PostDetailData>
where
    R: PostReader + ?Sized,
{
    let post_id = PostId::new(post_id).map_err(|_| ServiceError::NotFound)?;

    let post = repo
        .get_post_by_id(post_id)
        .map_err(|err| {
            log::error!("Failed to get post: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    let board_posts: Vec<Post> = repo
        .list_posts()?
        .into_iter()
        .filter(|candidate| candidate.board == post.board)
        .collect();

    let position = board_posts.iter().position(|candidate| candidate.id == post.id);
    let previous = position
        .and_then(|index| index.checked_sub(1))
        .and_then(|index| board_posts.get(index))
        .cloned();
    let next = position
        .and_then(|index| board_posts.get(index + 1))
        .cloned();

    Ok(PostDetailData {
        content_html: post.sanitized_content(),
        back_href: ViewState::new(post.board).href(BOARD_PATH),
        post,
        previous,
        next,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ALL_CATEGORIES;
    use crate::repository::InMemoryRepository;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn repo() -> InMemoryRepository {
        InMemoryRepository::seeded().unwrap()
    }

    fn board(tab: BoardType) -> ViewState<BoardType> {
        ViewState::new(tab)
    }

    fn ids(data: &BoardPageData) -> Vec<i32> {
        data.posts.items.iter().map(|post| post.id.get()).collect()
    }

    #[test]
    fn defaults_to_notice_board() {
        let data = load_board_page(&repo(), ViewState::default(), BOARD_ITEMS_PER_PAGE).unwrap();

        assert_eq!(data.board, BoardType::Notice);
        assert_eq!(ids(&data), vec![1, 2, 3, 4]);
        assert!(data.gallery.is_empty());
        assert!(data.tabs[0].active);
    }

    #[test]
    fn filters_board_by_category() {
        let query = ViewState {
            category: "민법".into(),
            ..board(BoardType::Review)
        };

        let data = load_board_page(&repo(), query, BOARD_ITEMS_PER_PAGE).unwrap();

        assert_eq!(ids(&data), vec![12]);
        assert!(
            data.categories
                .iter()
                .any(|option| option.selected && option.value == "민법")
        );
    }

    #[test]
    fn searches_title_and_content() {
        let query = ViewState {
            search: "암기장".into(),
            ..board(BoardType::Info)
        };

        let data = load_board_page(&repo(), query, BOARD_ITEMS_PER_PAGE).unwrap();

        assert_eq!(ids(&data), vec![22]);
    }

    #[test]
    fn clamps_page_after_results_shrink() {
        let query = ViewState {
            search: "공법".into(),
            page: 3,
            ..board(BoardType::Review)
        };

        let data = load_board_page(&repo(), query, 1).unwrap();

        assert_eq!(data.state.page, 1);
        assert_eq!(ids(&data), vec![13]);
    }

    #[test]
    fn paginates_board() {
        let second = ViewState {
            page: 2,
            ..board(BoardType::Review)
        };

        let data = load_board_page(&repo(), second, 3).unwrap();

        assert_eq!(ids(&data), vec![14]);
        assert_eq!(data.posts.total_pages, 2);
        assert_eq!(data.posts.total_items, 4);
    }

    #[test]
    fn category_links_reset_page() {
        let query = ViewState {
            page: 2,
            ..board(BoardType::Review)
        };

        let data = load_board_page(&repo(), query, 2).unwrap();

        let civil = data
            .categories
            .iter()
            .find(|option| option.value == "민법")
            .unwrap();
        assert!(civil.href.ends_with("page=1"));
        assert!(
            data.categories
                .iter()
                .any(|option| option.selected && option.value == ALL_CATEGORIES)
        );
    }

    #[test]
    fn review_board_has_gallery_sorted_by_views() {
        let data = load_board_page(&repo(), board(BoardType::Review), 4).unwrap();

        let gallery: Vec<i32> = data.gallery.iter().map(|post| post.id.get()).collect();
        assert_eq!(gallery, vec![11, 13]);
    }

    #[test]
    fn zero_page_size_is_an_error() {
        let result = load_board_page(&repo(), board(BoardType::Notice), 0);
        assert!(matches!(result, Err(ServiceError::Pagination(_))));
    }

    #[test]
    fn detail_has_neighbours_within_board() {
        let data = load_post_detail(&repo(), 12).unwrap();

        assert_eq!(data.previous.map(|post| post.id.get()), Some(11));
        assert_eq!(data.next.map(|post| post.id.get()), Some(13));
        assert_eq!(data.back_href, "/community?tab=review&page=1");
    }

    #[test]
    fn detail_of_first_post_has_no_previous() {
        let data = load_post_detail(&repo(), 21).unwrap();

        assert!(data.previous.is_none());
        assert_eq!(data.next.map(|post| post.id.get()), Some(22));
    }

    #[test]
    fn unknown_post_is_not_found() {
        assert!(matches!(
            load_post_detail(&repo(), 999),
            Err(ServiceError::NotFound)
        ));
        assert!(matches!(
            load_post_detail(&repo(), 0),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn repository_failure_is_propagated() {
        let mut mock = MockRepository::new();
        mock.expect_list_posts()
            .returning(|| Err(RepositoryError::Unexpected("boom".into())));

        let result = load_board_page(&mock, board(BoardType::Notice), 4);

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }
}

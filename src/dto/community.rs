use serde::Serialize;

use crate::domain::post::{BoardType, Post};
use crate::dto::{CategoryOption, Pager, TabLink};
use crate::pagination::Paginated;
use crate::view_state::ViewState;

/// Data required to render the community board list.
#[derive(Debug, Serialize)]
pub struct BoardPageData {
    /// State after clamping; echoed into the search form.
    pub state: ViewState<BoardType>,
    pub board: BoardType,
    pub tabs: Vec<TabLink>,
    pub categories: Vec<CategoryOption>,
    pub posts: Paginated<Post>,
    pub pager: Pager,
    /// Best photo reviews shown above the review list.
    pub gallery: Vec<Post>,
}

/// Data required to render a single post.
#[derive(Debug, Serialize)]
pub struct PostDetailData {
    pub post: Post,
    /// Sanitized body safe to render without escaping.
    pub content_html: String,
    /// Neighbour shown above the current post in its board.
    pub previous: Option<Post>,
    /// Neighbour shown below the current post in its board.
    pub next: Option<Post>,
    pub back_href: String,
}

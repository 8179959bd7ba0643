//! DTOs exposed by the JSON API endpoints.

use serde::Serialize;

use crate::domain::post::Post;
use crate::pagination::PageLabel;

/// Result payload returned by [`crate::services::api::list_posts`].
#[derive(Debug, Serialize)]
pub struct PostsResponse {
    /// Total number of posts matching the filter.
    pub total: usize,
    pub total_pages: usize,
    /// Page actually returned after clamping.
    pub page: usize,
    /// Page selector labels, `"..."` marking skipped pages.
    pub pages: Vec<PageLabel>,
    pub posts: Vec<Post>,
}

//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::services::community::BOARD_ITEMS_PER_PAGE;
use crate::services::courses::COURSES_ITEMS_PER_PAGE;
use crate::services::event::COMMENTS_ITEMS_PER_PAGE;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Signing key for flash message cookies; at least 64 bytes.
    pub secret: String,
    #[serde(default)]
    pub page_sizes: PageSizes,
}

#[derive(Clone, Copy, Debug, Deserialize)]
/// Number of items shown per page on each list.
pub struct PageSizes {
    #[serde(default = "default_board")]
    pub board: usize,
    #[serde(default = "default_courses")]
    pub courses: usize,
    #[serde(default = "default_comments")]
    pub comments: usize,
}

const fn default_board() -> usize {
    BOARD_ITEMS_PER_PAGE
}

const fn default_courses() -> usize {
    COURSES_ITEMS_PER_PAGE
}

const fn default_comments() -> usize {
    COMMENTS_ITEMS_PER_PAGE
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            board: BOARD_ITEMS_PER_PAGE,
            courses: COURSES_ITEMS_PER_PAGE,
            comments: COMMENTS_ITEMS_PER_PAGE,
        }
    }
}

//! Domain aggregates shown by the board, catalog and event pages.

pub mod comment;
pub mod course;
pub mod post;
pub mod types;

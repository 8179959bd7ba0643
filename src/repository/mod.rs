//! Read access to the mock collections behind the list pages.
//!
//! Readers hand out whole collections in their display order; narrowing and
//! slicing happen in [`crate::filter`] and [`crate::pagination`].

use crate::domain::comment::EventComment;
use crate::domain::course::Course;
use crate::domain::post::Post;
use crate::domain::types::PostId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod seed;

pub use memory::InMemoryRepository;

pub trait PostReader {
    fn list_posts(&self) -> RepositoryResult<Vec<Post>>;
    fn get_post_by_id(&self, id: PostId) -> RepositoryResult<Option<Post>>;
}

pub trait CourseReader {
    fn list_courses(&self) -> RepositoryResult<Vec<Course>>;
}

pub trait EventCommentReader {
    fn list_event_comments(&self) -> RepositoryResult<Vec<EventComment>>;
}

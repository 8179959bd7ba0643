//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::comment::EventComment;
use crate::domain::course::Course;
use crate::domain::post::Post;
use crate::domain::types::PostId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CourseReader, EventCommentReader, PostReader};

mock! {
    pub Repository {}

    impl PostReader for Repository {
        fn list_posts(&self) -> RepositoryResult<Vec<Post>>;
        fn get_post_by_id(&self, id: PostId) -> RepositoryResult<Option<Post>>;
    }

    impl CourseReader for Repository {
        fn list_courses(&self) -> RepositoryResult<Vec<Course>>;
    }

    impl EventCommentReader for Repository {
        fn list_event_comments(&self) -> RepositoryResult<Vec<EventComment>>;
    }
}

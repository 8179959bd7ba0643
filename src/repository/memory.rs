use std::sync::Arc;

use crate::domain::comment::EventComment;
use crate::domain::course::Course;
use crate::domain::post::Post;
use crate::domain::types::PostId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CourseReader, EventCommentReader, PostReader, seed};

/// Immutable collections shared by every request handler.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    posts: Arc<Vec<Post>>,
    courses: Arc<Vec<Course>>,
    comments: Arc<Vec<EventComment>>,
}

impl InMemoryRepository {
    pub fn new(posts: Vec<Post>, courses: Vec<Course>, comments: Vec<EventComment>) -> Self {
        Self {
            posts: Arc::new(posts),
            courses: Arc::new(courses),
            comments: Arc::new(comments),
        }
    }

    /// Repository loaded with the bundled demo data.
    pub fn seeded() -> RepositoryResult<Self> {
        Ok(Self::new(
            seed::community_posts()?,
            seed::courses()?,
            seed::event_comments(seed::EVENT_COMMENT_COUNT)?,
        ))
    }
}

impl PostReader for InMemoryRepository {
    fn list_posts(&self) -> RepositoryResult<Vec<Post>> {
        Ok(self.posts.as_ref().clone())
    }

    fn get_post_by_id(&self, id: PostId) -> RepositoryResult<Option<Post>> {
        Ok(self.posts.iter().find(|post| post.id == id).cloned())
    }
}

impl CourseReader for InMemoryRepository {
    fn list_courses(&self) -> RepositoryResult<Vec<Course>> {
        Ok(self.courses.as_ref().clone())
    }
}

impl EventCommentReader for InMemoryRepository {
    fn list_event_comments(&self) -> RepositoryResult<Vec<EventComment>> {
        Ok(self.comments.as_ref().clone())
    }
}

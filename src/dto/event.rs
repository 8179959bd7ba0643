use serde::Serialize;

use crate::domain::comment::EventComment;
use crate::dto::Pager;
use crate::pagination::Paginated;

/// Data required to render the event page comment list.
#[derive(Debug, Serialize)]
pub struct EventPageData {
    pub comments: Paginated<EventComment>,
    pub pager: Pager,
}

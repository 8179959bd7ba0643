use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CommentId, dotted_date};
use crate::filter::Filterable;

/// "Pass pledge" left under the event page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EventComment {
    pub id: CommentId,
    /// Masked user handle, e.g. `eduw***42`.
    pub user: String,
    pub content: String,
    #[serde(with = "dotted_date")]
    pub date: NaiveDate,
}

/// Comment submitted through the event form, not yet stored anywhere.
#[derive(Clone, Debug, PartialEq)]
pub struct NewEventComment {
    pub content: String,
}

impl NewEventComment {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into().trim().to_string(),
        }
    }
}

impl Filterable for EventComment {
    type Kind = ();

    fn kind(&self) {}

    fn category(&self) -> Option<&str> {
        None
    }

    fn searchable_text(&self) -> Vec<&str> {
        vec![self.content.as_str()]
    }
}

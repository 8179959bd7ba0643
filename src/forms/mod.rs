//! Form definitions backing the page routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod event;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("comment cannot be empty")]
    EmptyComment,
}

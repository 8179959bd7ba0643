use serde::Deserialize;
use validator::Validate;

use crate::domain::comment::NewEventComment;
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// Form data for leaving a pledge under the event.
pub struct CommentForm {
    /// Pledge text as typed by the user.
    #[serde(default)]
    #[validate(length(max = 300))]
    pub content: String,
}

impl TryFrom<CommentForm> for NewEventComment {
    type Error = FormError;

    fn try_from(form: CommentForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let comment = NewEventComment::new(form.content);
        if comment.content.is_empty() {
            return Err(FormError::EmptyComment);
        }
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_comment_is_rejected() {
        let form = CommentForm {
            content: "   \n ".to_string(),
        };
        assert!(matches!(
            NewEventComment::try_from(form),
            Err(FormError::EmptyComment)
        ));
    }

    #[test]
    fn overlong_comment_is_rejected() {
        let form = CommentForm {
            content: "합".repeat(301),
        };
        assert!(matches!(
            NewEventComment::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn comment_is_trimmed() {
        let form = CommentForm {
            content: "  올해는 합격!  ".to_string(),
        };
        assert_eq!(
            NewEventComment::try_from(form).unwrap().content,
            "올해는 합격!"
        );
    }
}

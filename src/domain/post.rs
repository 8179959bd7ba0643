use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{PostId, TypeConstraintError, dotted_date};
use crate::filter::Filterable;

/// Community board a post belongs to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BoardType {
    #[default]
    Notice,
    Review,
    Info,
}

impl BoardType {
    pub const ALL: [BoardType; 3] = [BoardType::Notice, BoardType::Review, BoardType::Info];

    pub const fn as_str(self) -> &'static str {
        match self {
            BoardType::Notice => "notice",
            BoardType::Review => "review",
            BoardType::Info => "info",
        }
    }

    /// Tab caption shown above the list.
    pub const fn label(self) -> &'static str {
        match self {
            BoardType::Notice => "공지사항",
            BoardType::Review => "수강후기",
            BoardType::Info => "수험정보",
        }
    }
}

impl Display for BoardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BoardType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "notice" => Ok(BoardType::Notice),
            "review" => Ok(BoardType::Review),
            "info" => Ok(BoardType::Info),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown board type `{other}`"
            ))),
        }
    }
}

/// Subject filter values offered on every board with their captions.
pub const BOARD_CATEGORIES: [(&str, &str); 5] = [
    ("all", "전체 과목"),
    ("민법", "민법"),
    ("학개론", "부동산학개론"),
    ("공법", "부동산공법"),
    ("공시법", "공시법"),
];

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub board: BoardType,
    /// Subject used by the category filter, e.g. `민법`.
    pub subject: Option<String>,
    pub title: String,
    /// Body; notices may carry HTML markup.
    pub content: String,
    pub author: String,
    #[serde(with = "dotted_date")]
    pub date: NaiveDate,
    pub views: u32,
    /// Pinned notice.
    pub is_important: bool,
    /// Star rating of a review (1..=5).
    pub rating: Option<u8>,
    pub has_photo: bool,
    /// Review written by a certified passer.
    pub is_passer: bool,
    pub images: Vec<String>,
    /// Countdown label of an exam info post, e.g. `D-265`.
    pub d_day: Option<String>,
    pub has_attachment: bool,
}

impl Post {
    /// Creates a plain post; optional attributes start empty.
    pub fn new(
        id: PostId,
        board: BoardType,
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        date: NaiveDate,
        views: u32,
    ) -> Self {
        Self {
            id,
            board,
            subject: None,
            title: title.into(),
            content: content.into(),
            author: author.into(),
            date,
            views,
            is_important: false,
            rating: None,
            has_photo: false,
            is_passer: false,
            images: Vec::new(),
            d_day: None,
            has_attachment: false,
        }
    }

    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    #[must_use]
    pub fn important(mut self) -> Self {
        self.is_important = true;
        self
    }

    #[must_use]
    pub fn rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating.clamp(1, 5));
        self
    }

    #[must_use]
    pub fn passer(mut self) -> Self {
        self.is_passer = true;
        self
    }

    #[must_use]
    pub fn photos<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self.has_photo = !self.images.is_empty();
        self
    }

    #[must_use]
    pub fn d_day(mut self, d_day: impl Into<String>) -> Self {
        self.d_day = Some(d_day.into());
        self
    }

    #[must_use]
    pub fn attachment(mut self) -> Self {
        self.has_attachment = true;
        self
    }

    /// Whether the post can appear in the photo review gallery.
    pub fn is_photo_review(&self) -> bool {
        self.board == BoardType::Review && self.has_photo && !self.images.is_empty()
    }

    /// Body with markup reduced to a safe whitelist.
    pub fn sanitized_content(&self) -> String {
        ammonia::clean(&self.content)
    }
}

impl Filterable for Post {
    type Kind = BoardType;

    fn kind(&self) -> BoardType {
        self.board
    }

    fn category(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    fn searchable_text(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.content.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post::new(
            PostId::new(1).unwrap(),
            BoardType::Review,
            "합격 수기",
            "<p>공부법</p><script>alert(1)</script>",
            "박*수",
            NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
            5420,
        )
    }

    #[test]
    fn board_type_round_trips_through_str() {
        for board in BoardType::ALL {
            assert_eq!(board.as_str().parse::<BoardType>(), Ok(board));
        }
        assert!("qna".parse::<BoardType>().is_err());
    }

    #[test]
    fn photos_flag_follows_images() {
        let with_photo = post().photos(["https://example.com/a.png"]);
        assert!(with_photo.has_photo);
        assert!(with_photo.is_photo_review());

        let without = post().photos(Vec::<String>::new());
        assert!(!without.has_photo);
        assert!(!without.is_photo_review());
    }

    #[test]
    fn rating_is_clamped() {
        assert_eq!(post().rating(9).rating, Some(5));
        assert_eq!(post().rating(0).rating, Some(1));
    }

    #[test]
    fn sanitized_content_strips_scripts() {
        let cleaned = post().sanitized_content();
        assert!(cleaned.contains("<p>공부법</p>"));
        assert!(!cleaned.contains("script"));
    }

    #[test]
    fn filterable_fields() {
        let post = post().subject("민법");
        assert_eq!(post.kind(), BoardType::Review);
        assert_eq!(post.category(), Some("민법"));
        assert_eq!(post.searchable_text(), vec!["합격 수기", post.content.as_str()]);
    }
}

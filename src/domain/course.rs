use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::{CourseId, TypeConstraintError};
use crate::filter::Filterable;

/// Catalog tab a course is sold under.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CourseKind {
    #[default]
    Package,
    Single,
}

impl CourseKind {
    pub const ALL: [CourseKind; 2] = [CourseKind::Package, CourseKind::Single];

    pub const fn as_str(self) -> &'static str {
        match self {
            CourseKind::Package => "package",
            CourseKind::Single => "single",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CourseKind::Package => "패키지 강좌",
            CourseKind::Single => "단과 강좌",
        }
    }

    /// Only single courses can be narrowed by subject.
    pub const fn has_subjects(self) -> bool {
        matches!(self, CourseKind::Single)
    }
}

impl Display for CourseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CourseKind {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "package" => Ok(CourseKind::Package),
            "single" => Ok(CourseKind::Single),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown course kind `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Intro,
    Civil,
    Public,
    Property,
    Tax,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::Intro,
        Subject::Civil,
        Subject::Public,
        Subject::Property,
        Subject::Tax,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Subject::Intro => "intro",
            Subject::Civil => "civil",
            Subject::Public => "public",
            Subject::Property => "property",
            Subject::Tax => "tax",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Subject::Intro => "학개론",
            Subject::Civil => "민법",
            Subject::Public => "공법",
            Subject::Property => "공시법",
            Subject::Tax => "세법",
        }
    }
}

impl FromStr for Subject {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown subject `{s}`")))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: CourseId,
    pub kind: CourseKind,
    pub subject: Option<Subject>,
    pub title: String,
    pub instructor: String,
    pub thumbnail: String,
    /// List price in KRW.
    pub original_price: u32,
    /// Sale price in KRW.
    pub price: u32,
    pub tags: Vec<String>,
    pub best_seller: bool,
    pub rating: f32,
    pub review_count: u32,
    pub benefits: Vec<String>,
    pub lectures: Option<u32>,
    pub duration: Option<String>,
}

impl Course {
    /// Discount against the list price, rounded to whole percent.
    pub fn discount_rate(&self) -> u32 {
        if self.original_price == 0 || self.price >= self.original_price {
            return 0;
        }
        let saved = u64::from(self.original_price - self.price);
        ((saved * 100 + u64::from(self.original_price) / 2) / u64::from(self.original_price)) as u32
    }
}

impl Filterable for Course {
    type Kind = CourseKind;

    fn kind(&self) -> CourseKind {
        self.kind
    }

    fn category(&self) -> Option<&str> {
        self.subject.map(Subject::as_str)
    }

    fn searchable_text(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.instructor.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(original_price: u32, price: u32) -> Course {
        Course {
            id: CourseId::new("s1").unwrap(),
            kind: CourseKind::Single,
            subject: Some(Subject::Intro),
            title: "부동산학개론 기초이론".into(),
            instructor: "이영방 교수".into(),
            thumbnail: String::new(),
            original_price,
            price,
            tags: vec![],
            best_seller: true,
            rating: 5.0,
            review_count: 120,
            benefits: vec![],
            lectures: Some(24),
            duration: Some("20시간".into()),
        }
    }

    #[test]
    fn discount_rate_rounds() {
        assert_eq!(course(150_000, 50_000).discount_rate(), 67);
        assert_eq!(course(1_200_000, 890_000).discount_rate(), 26);
        assert_eq!(course(100, 100).discount_rate(), 0);
        assert_eq!(course(0, 0).discount_rate(), 0);
    }

    #[test]
    fn subject_parses_known_keys() {
        assert_eq!("tax".parse::<Subject>(), Ok(Subject::Tax));
        assert!("math".parse::<Subject>().is_err());
    }

    #[test]
    fn category_is_subject_key() {
        assert_eq!(course(1, 1).category(), Some("intro"));
        assert_eq!(course(1, 1).kind(), CourseKind::Single);
    }
}

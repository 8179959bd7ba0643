//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, non-empty
//! keys) so that once a value reaches the domain layer it can be treated as
//! trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(PostId, "Unique identifier for a community post.");
id_newtype!(CommentId, "Unique identifier for an event comment.");

/// Catalog key of a course, e.g. `p1` or `s3`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CourseId(String);

impl CourseId {
    /// Trims the key and rejects blank values.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CourseId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for CourseId {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Serde adapter rendering dates the way the board displays them (`2026.02.01`).
pub mod dotted_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y.%m.%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn id_rejects_non_positive() {
        assert_eq!(PostId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(PostId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(PostId::new(12).map(PostId::get), Ok(12));
    }

    #[test]
    fn course_id_is_trimmed() {
        assert_eq!(CourseId::new("  s1 ").unwrap().as_str(), "s1");
        assert_eq!(CourseId::new("   "), Err(TypeConstraintError::EmptyString));
    }

    #[derive(Serialize, Deserialize)]
    struct Dated {
        #[serde(with = "dotted_date")]
        date: NaiveDate,
    }

    #[test]
    fn dotted_date_format() {
        let dated = Dated {
            date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        };
        let json = serde_json::to_string(&dated).unwrap();
        assert_eq!(json, r#"{"date":"2026.02.01"}"#);

        let parsed: Dated = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.date, dated.date);
    }
}

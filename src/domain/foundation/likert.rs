//! Likert answer value object for questionnaire items (1 to 4 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A single questionnaire answer on the user-facing 1..=4 scale.
///
/// 1 = did not apply to me at all, 4 = applied very much or most of the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LikertAnswer(u8);

impl LikertAnswer {
    /// Lowest accepted answer.
    pub const MIN: u8 = 1;
    /// Highest accepted answer.
    pub const MAX: u8 = 4;

    /// Creates an answer from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::out_of_range(
                "answer",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            ))
        }
    }

    /// Parses a raw user message.
    ///
    /// Only a single digit 1-4 (surrounding whitespace ignored) is accepted;
    /// "04", "+1" or "1.0" are rejected.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self(1)),
            "2" => Some(Self(2)),
            "3" => Some(Self(3)),
            "4" => Some(Self(4)),
            _ => None,
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for LikertAnswer {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_u8(value)
    }
}

impl From<LikertAnswer> for u8 {
    fn from(answer: LikertAnswer) -> Self {
        answer.0
    }
}

impl fmt::Display for LikertAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

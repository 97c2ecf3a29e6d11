//! Optional 1–5 discomfort ratings and the per-session log
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{LOG_TARGET_SESSION, RATING_MAX, RATING_MIN};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    #[error("rating {input:?} is not a whole number")]
    NotANumber { input: String },
    #[error("rating {value} is outside {min}..={max}", min = RATING_MIN, max = RATING_MAX)]
    OutOfRange { value: u64 },
}

/// Self-reported discomfort, always within `RATING_MIN..=RATING_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (RATING_MIN..=RATING_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange {
                value: u64::from(value),
            })
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a line typed at the rating prompt.
///
/// Surrounding whitespace is ignored. An empty line means the user skipped the
/// rating and yields `Ok(None)`. Otherwise the input must consist of ASCII
/// digits only, so signs and decimals are rejected while leading zeros are not.
///
/// # Errors
///
/// Returns `RatingError` for non-numeric or out-of-range input.
pub fn parse_rating_input(input: &str) -> Result<Option<Rating>, RatingError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RatingError::NotANumber {
            input: trimmed.to_string(),
        });
    }
    // Digit-only strings only fail to parse on overflow, which is out of range anyway.
    let value: u64 = trimmed
        .parse()
        .map_err(|_| RatingError::OutOfRange { value: u64::MAX })?;
    let narrow = u8::try_from(value).map_err(|_| RatingError::OutOfRange { value })?;
    Rating::try_from(narrow).map(Some)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscomfortEntry {
    pub scenario_name: String,
    pub rating: Rating,
}

/// Ratings in the order they were given.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiscomfortLog {
    entries: Vec<DiscomfortEntry>,
}

impl DiscomfortLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, scenario_name: impl Into<String>, rating: Rating) {
        let scenario_name = scenario_name.into();
        log::debug!(
            target: LOG_TARGET_SESSION,
            "discomfort {rating}/{RATING_MAX} for {scenario_name}"
        );
        self.entries.push(DiscomfortEntry {
            scenario_name,
            rating,
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[DiscomfortEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest-rated entry; ties go to the one recorded first.
    #[must_use]
    pub fn most_uncomfortable(&self) -> Option<&DiscomfortEntry> {
        self.entries.iter().fold(None, |best, entry| match best {
            Some(current) if current.rating >= entry.rating => Some(current),
            _ => Some(entry),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(value: u8) -> Rating {
        Rating::try_from(value).unwrap()
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert_eq!(parse_rating_input("1").unwrap(), Some(rating(1)));
        assert_eq!(parse_rating_input("5").unwrap(), Some(rating(5)));
        assert!(matches!(
            parse_rating_input("0"),
            Err(RatingError::OutOfRange { value: 0 })
        ));
        assert!(matches!(
            parse_rating_input("6"),
            Err(RatingError::OutOfRange { value: 6 })
        ));
    }

    #[test]
    fn empty_input_skips() {
        assert_eq!(parse_rating_input("").unwrap(), None);
        assert_eq!(parse_rating_input("   ").unwrap(), None);
    }

    #[test]
    fn rejects_non_digit_input() {
        for input in ["abc", "+3", "-1", "3.0", "4 5"] {
            assert!(
                matches!(parse_rating_input(input), Err(RatingError::NotANumber { .. })),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn tolerates_leading_zeros_and_huge_values() {
        assert_eq!(parse_rating_input("05").unwrap(), Some(rating(5)));
        assert!(parse_rating_input("99999999999999999999999").is_err());
        assert!(parse_rating_input("300").is_err());
    }

    #[test]
    fn most_uncomfortable_prefers_first_maximum() {
        let mut log = DiscomfortLog::new();
        log.record("A", rating(3));
        log.record("B", rating(5));
        log.record("C", rating(5));
        log.record("D", rating(1));
        let worst = log.most_uncomfortable().unwrap();
        assert_eq!(worst.scenario_name, "B");
        assert_eq!(worst.rating.value(), 5);
    }

    #[test]
    fn empty_log_has_no_maximum() {
        assert!(DiscomfortLog::new().most_uncomfortable().is_none());
    }

    #[test]
    fn rating_deserialization_enforces_range() {
        assert!(serde_json::from_str::<Rating>("4").is_ok());
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }
}

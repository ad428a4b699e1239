//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date pattern birthdays are parsed and rendered with.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A type-safe wrapper for contact birthdays.
///
/// Birthdays are parsed from `YYYY-MM-DD` strings at construction time
/// and stored as calendar dates, so out-of-range months and days are
/// rejected along with malformed input.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("1990-05-20").unwrap();
/// assert_eq!(birthday.to_string(), "1990-05-20");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a new Birthday from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` wrapping the parse error
    /// text if the input is malformed or names an impossible date.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let date = NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(|e| {
            ValidationError::InvalidBirthday {
                input: raw,
                reason: e.to_string(),
            }
        })?;
        Ok(Self(date))
    }

    /// Replace the stored date, re-validating first.
    ///
    /// On failure the current value is left unchanged.
    pub fn set(&mut self, raw: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::new(raw)?;
        Ok(())
    }

    /// Get the birthday as a calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The next occurrence of this birthday's month/day on or after `today`.
    ///
    /// Uses this year's occurrence unless it is already past, in which case
    /// next year's is used. A February 29 birthday clamps to February 28 in
    /// years without a leap day.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let candidate = self.occurrence_in(today.year());
        if candidate < today {
            self.occurrence_in(today.year() + 1)
        } else {
            candidate
        }
    }

    /// This birthday's month/day placed in `year`, clamping Feb 29 to Feb 28.
    fn occurrence_in(&self, year: i32) -> NaiveDate {
        match NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()) {
            Some(date) => date,
            // Only reachable for Feb 29 in a non-leap year.
            None => NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 exists in every year"),
        }
    }
}

// Serde support - serialize as a YYYY-MM-DD string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

//! Record model representing one contact entry in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{RecordError, RecordResult, ValidationResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact entry: a name, an optional birthday, and an ordered list of
/// phone numbers.
///
/// Phones keep insertion order and duplicates are permitted. All field
/// values go through their domain validators, so a `Record` can never hold
/// a malformed name, phone, or birthday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    birthday: Option<Birthday>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a new record with the given contact name and no phones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name fails validation.
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            name: ContactName::new(name)?,
            birthday: None,
            phones: Vec::new(),
        })
    }

    /// Create a new record with a name and a `YYYY-MM-DD` birthday string.
    pub fn with_birthday(
        name: impl Into<String>,
        birthday: impl Into<String>,
    ) -> ValidationResult<Self> {
        Ok(Self {
            name: ContactName::new(name)?,
            birthday: Some(Birthday::new(birthday)?),
            phones: Vec::new(),
        })
    }

    /// Get the contact name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Get the birthday, if one is set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Get the phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Set or replace the birthday from a `YYYY-MM-DD` string.
    ///
    /// On validation failure any existing birthday is left unchanged.
    pub fn set_birthday(&mut self, raw: impl Into<String>) -> ValidationResult<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Remove the birthday, if one is set.
    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// Duplicates are allowed; the new number always lands at the end.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `raw` is not exactly ten
    /// decimal digits. The phone list is unchanged on failure.
    pub fn add_phone(&mut self, raw: impl Into<String>) -> ValidationResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone entry equal to `raw`.
    ///
    /// Returns how many entries were removed; 0 when nothing matched.
    pub fn remove_phone(&mut self, raw: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != raw);
        before - self.phones.len()
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated before the search, so an invalid replacement
    /// fails with a validation error even when `old` is also absent.
    ///
    /// # Errors
    ///
    /// - `RecordError::Validation` if `new` fails the phone format check
    /// - `RecordError::PhoneNotFound` if no phone equals `old`
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> RecordResult<()> {
        let replacement = PhoneNumber::new(new)?;

        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = replacement;
                Ok(())
            }
            None => Err(RecordError::PhoneNotFound(old.to_string())),
        }
    }

    /// Find the first phone equal to `raw`, or `None`.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Days until the next occurrence of the birthday, counted from today.
    ///
    /// Returns `None` if no birthday is set. Zero when today is the
    /// birthday itself.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_on(Local::now().date_naive())
    }

    /// Days until the next birthday occurrence, counted from `today`.
    ///
    /// Non-negative by construction; see [`Birthday::next_occurrence`] for
    /// the leap-day policy.
    pub fn days_to_birthday_on(&self, today: NaiveDate) -> Option<i64> {
        self.birthday
            .map(|b| (b.next_occurrence(today) - today).num_days())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_record_new() {
        let record = Record::new("John Doe").unwrap();
        assert_eq!(record.name().as_str(), "John Doe");
        assert!(record.birthday().is_none());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_record_rejects_bad_name() {
        assert!(Record::new("John2").is_err());
    }

    #[test]
    fn test_record_with_birthday() {
        let record = Record::with_birthday("John Doe", "1990-05-20").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "1990-05-20");

        assert!(Record::with_birthday("John Doe", "1990/05/20").is_err());
    }

    #[test]
    fn test_add_and_find_phone() {
        let mut record = Record::new("John Doe").unwrap();
        record.add_phone("1234567890").unwrap();

        let found = record.find_phone("1234567890").unwrap();
        assert_eq!(found.as_str(), "1234567890");
        assert!(record.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_add_phone_propagates_validation() {
        let mut record = Record::new("John Doe").unwrap();
        assert!(record.add_phone("555-1234").is_err());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut record = Record::new("John Doe").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_remove_phone_removes_all_matching() {
        let mut record = Record::new("John Doe").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        record.add_phone("1234567890").unwrap();

        assert_eq!(record.remove_phone("1234567890"), 2);
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "0987654321");

        // No-op when nothing matches.
        assert_eq!(record.remove_phone("1234567890"), 0);
    }

    #[test]
    fn test_edit_phone_replaces_first_match() {
        let mut record = Record::new("John Doe").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("1111111111").unwrap();

        record.edit_phone("1234567890", "0987654321").unwrap();
        assert!(record.find_phone("1234567890").is_none());
        assert_eq!(record.phones()[0].as_str(), "0987654321");
        assert_eq!(record.phones()[1].as_str(), "1111111111");
    }

    #[test]
    fn test_edit_phone_not_found() {
        let mut record = Record::new("John Doe").unwrap();
        record.add_phone("1234567890").unwrap();

        let err = record.edit_phone("0000000000", "0987654321").unwrap_err();
        assert_eq!(err, RecordError::PhoneNotFound("0000000000".to_string()));
    }

    #[test]
    fn test_edit_phone_validates_before_search() {
        let mut record = Record::new("John Doe").unwrap();

        // Neither "old" nor a valid "new": validation wins.
        let err = record.edit_phone("0000000000", "bad").unwrap_err();
        assert!(matches!(err, RecordError::Validation(_)));
    }

    #[test]
    fn test_edit_phone_round_trip_restores_state() {
        let mut record = Record::new("John Doe").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("1111111111").unwrap();
        let original = record.clone();

        record.edit_phone("1234567890", "0987654321").unwrap();
        record.edit_phone("0987654321", "1234567890").unwrap();
        assert_eq!(record, original);
    }

    #[test]
    fn test_days_to_birthday_none_without_birthday() {
        let record = Record::new("John Doe").unwrap();
        assert_eq!(record.days_to_birthday_on(date(2024, 5, 21)), None);
    }

    #[test]
    fn test_days_to_birthday_rolls_to_next_year() {
        let record = Record::with_birthday("John Doe", "1990-05-20").unwrap();
        // The day after the birthday: count to next year's occurrence.
        assert_eq!(record.days_to_birthday_on(date(2024, 5, 21)), Some(364));
    }

    #[test]
    fn test_days_to_birthday_same_day_is_zero() {
        let record = Record::with_birthday("John Doe", "1990-05-20").unwrap();
        assert_eq!(record.days_to_birthday_on(date(2024, 5, 20)), Some(0));
    }

    #[test]
    fn test_record_display() {
        let mut record = Record::new("John Doe").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John Doe, phones: 1234567890; 0987654321"
        );
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let mut record = Record::with_birthday("John Doe", "1990-05-20").unwrap();
        record.add_phone("1234567890").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_deserialization_rejects_invalid_phone() {
        let json = r#"{"name":"John Doe","phones":["123"]}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}

//! Error types for the contact book.
//!
//! This module defines record-level error types using `thiserror`.
//! Field validation errors live next to the value objects in
//! [`crate::domain::errors`] and convert into [`RecordError`] via `From`.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a record's phone list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number to replace does not exist in the record
    #[error("Phone number '{0}' not found in the record")]
    PhoneNotFound(String),
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

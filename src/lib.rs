//! Contact Book - a personal address-book data model with validated fields.
//!
//! This library provides a small, synchronous, in-process data model for
//! contact records: validated names, phone numbers, and birthdays, stored
//! in an insertion-ordered collection with paginated iteration.
//!
//! # Architecture
//!
//! - **domain**: Type-safe value objects (name, phone, birthday) validated
//!   at construction and on every assignment
//! - **models**: The `Record` aggregate (one contact entry)
//! - **book**: The `AddressBook` collection and its page iterator
//! - **error**: Record-level error types
//!
//! # Example
//!
//! ```
//! use contact_book::{AddressBook, Record};
//!
//! let mut record = Record::with_birthday("John Doe", "1990-05-20").unwrap();
//! record.add_phone("1234567890").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(record);
//!
//! let john = book.find("John Doe").unwrap();
//! assert_eq!(john.phones()[0].as_str(), "1234567890");
//! ```

// Re-export commonly used types
pub mod book;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, Pages};
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{RecordError, RecordResult, ValidationResult};
pub use models::Record;

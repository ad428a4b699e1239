//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact attributes:
//! names, phone numbers, and birthdays. These value objects provide
//! validation at construction time and on every subsequent assignment,
//! preventing invalid data from being represented in the system.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;

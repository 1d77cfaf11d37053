//! Domain value objects and types.
//!
//! This module contains the contact form field names, the per-field
//! validation failures, and the format checks for email addresses and
//! phone numbers together with value objects that apply them at
//! construction time, plus the blank and length measurements the
//! field rules share.

pub mod email;
pub mod errors;
pub mod field;
pub mod phone;
pub mod text;

pub use email::{is_valid_email, EmailAddress};
pub use errors::ValidationError;
pub use field::FieldName;
pub use phone::{is_valid_phone, PhoneNumber};
pub use text::{is_blank, text_length};

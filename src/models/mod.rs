//! Data models for the contact form.
//!
//! This module contains the record a user submits and the error record
//! that validation hands back.

pub mod contact_record;
pub mod error_record;

pub use contact_record::ContactRecord;
pub use error_record::ErrorRecord;

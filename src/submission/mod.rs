//! Submission flow around the validator.
//!
//! The form validates first and only then hands the record to a
//! [`ContactSubmitter`]. The shipped submitter simulates the network call
//! with a fixed delay.

mod form;
mod submitter;

pub use form::{ContactForm, FormStatus, SubmitOutcome};
pub use submitter::{ContactSubmitter, SimulatedSubmitter, SubmissionReceipt};

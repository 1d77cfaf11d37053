//! Contact Form Server - contact form validation with an MCP front end.
//!
//! The core is [`validation::validate`]: a pure function from a
//! [`ContactRecord`] to an [`ErrorRecord`] holding one message per invalid
//! field. The rest of the crate wraps it in a submission flow and serves both
//! over the Model Context Protocol.
//!
//! # Architecture
//!
//! - **domain**: Field names, validation errors, email and phone format checks
//! - **models**: The contact record and the error record
//! - **validation**: The per-field validation rules
//! - **submission**: Form state and the (simulated) submitter
//! - **observability**: Validation and submission metrics
//! - **server**: MCP protocol server
//! - **config** / **error**: Environment configuration and error types

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod server;
pub mod submission;
pub mod validation;

pub use config::Config;
pub use domain::{is_valid_email, is_valid_phone, FieldName, ValidationError};
pub use error::{ConfigError, SubmitError};
pub use models::{ContactRecord, ErrorRecord};
pub use observability::MetricsTracker;
pub use server::ContactFormMcpServer;
pub use submission::{ContactForm, ContactSubmitter, FormStatus, SimulatedSubmitter, SubmitOutcome};
pub use validation::validate;

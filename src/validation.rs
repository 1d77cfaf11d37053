//! Contact form validation.
//!
//! [`validate`] checks every field of a [`ContactRecord`] independently and
//! collects one [`ValidationError`] per failing field. Within a field the
//! rules run in a fixed order and the first failing rule decides the message.

use crate::domain::{is_blank, is_valid_email, is_valid_phone, text_length, ValidationError};
use crate::models::{ContactRecord, ErrorRecord};

/// Maximum length of the name field, in UTF-16 code units.
pub const MAX_NAME_CHARS: usize = 50;

/// Maximum length of the subject field, in UTF-16 code units.
pub const MAX_SUBJECT_CHARS: usize = 100;

/// Maximum length of the message field, in UTF-16 code units.
pub const MAX_MESSAGE_CHARS: usize = 1000;

/// Validate a contact record.
///
/// Never fails and has no side effects beyond a debug log line: the result
/// depends only on `record`. An empty [`ErrorRecord`] means the record may be
/// submitted.
///
/// # Example
///
/// ```
/// use contact_form_server::models::ContactRecord;
/// use contact_form_server::validation::validate;
/// use contact_form_server::domain::FieldName;
///
/// let record = ContactRecord::new("", "taro@example.com", "件名", "本文");
/// let errors = validate(&record);
/// assert_eq!(errors.get(FieldName::Name), Some("名前を入力してください"));
/// assert_eq!(errors.len(), 1);
/// ```
pub fn validate(record: &ContactRecord) -> ErrorRecord {
    let errors: ErrorRecord = [
        check_name(&record.name),
        check_email(&record.email),
        check_phone(record.phone.as_deref()),
        check_subject(&record.subject),
        check_message(&record.message),
    ]
    .into_iter()
    .flatten()
    .collect();

    tracing::debug!(
        invalid_fields = errors.len(),
        fields = ?errors.fields().collect::<Vec<_>>(),
        "Contact record validated"
    );

    errors
}

/// Required text with an upper length bound, measured in UTF-16 code units.
fn check_bounded_text(
    value: &str,
    max: usize,
    required: ValidationError,
    too_long: ValidationError,
) -> Option<ValidationError> {
    if is_blank(value) {
        return Some(required);
    }
    if text_length(value) > max {
        return Some(too_long);
    }
    None
}

fn check_name(name: &str) -> Option<ValidationError> {
    check_bounded_text(
        name,
        MAX_NAME_CHARS,
        ValidationError::NameRequired,
        ValidationError::NameTooLong,
    )
}

fn check_email(email: &str) -> Option<ValidationError> {
    if is_blank(email) {
        return Some(ValidationError::EmailRequired);
    }
    if !is_valid_email(email) {
        return Some(ValidationError::EmailInvalid);
    }
    None
}

/// Optional: absent or empty passes. Whitespace counts as provided.
fn check_phone(phone: Option<&str>) -> Option<ValidationError> {
    match phone {
        Some(phone) if !phone.is_empty() && !is_valid_phone(phone) => {
            Some(ValidationError::PhoneInvalid)
        }
        _ => None,
    }
}

fn check_subject(subject: &str) -> Option<ValidationError> {
    check_bounded_text(
        subject,
        MAX_SUBJECT_CHARS,
        ValidationError::SubjectRequired,
        ValidationError::SubjectTooLong,
    )
}

fn check_message(message: &str) -> Option<ValidationError> {
    check_bounded_text(
        message,
        MAX_MESSAGE_CHARS,
        ValidationError::MessageRequired,
        ValidationError::MessageTooLong,
    )
}

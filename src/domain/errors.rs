//! Per-field validation failures.

use super::field::FieldName;
use std::fmt;

/// Why a single contact form field was rejected.
///
/// One variant per rule of the form; each maps to one fixed, user-facing
/// message (see [`message`](Self::message)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Name is empty after trimming whitespace.
    NameRequired,

    /// Name is longer than 50 characters.
    NameTooLong,

    /// Email is empty after trimming whitespace.
    EmailRequired,

    /// Email does not look like `local-part@domain.tld`.
    EmailInvalid,

    /// Phone was provided but is not 10 to 15 digits or hyphens.
    PhoneInvalid,

    /// Subject is empty after trimming whitespace.
    SubjectRequired,

    /// Subject is longer than 100 characters.
    SubjectTooLong,

    /// Message is empty after trimming whitespace.
    MessageRequired,

    /// Message is longer than 1000 characters.
    MessageTooLong,
}

impl ValidationError {
    /// The field this error belongs to.
    pub fn field(&self) -> FieldName {
        match self {
            Self::NameRequired | Self::NameTooLong => FieldName::Name,
            Self::EmailRequired | Self::EmailInvalid => FieldName::Email,
            Self::PhoneInvalid => FieldName::Phone,
            Self::SubjectRequired | Self::SubjectTooLong => FieldName::Subject,
            Self::MessageRequired | Self::MessageTooLong => FieldName::Message,
        }
    }

    /// The message shown next to the field.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NameRequired => "名前を入力してください",
            Self::NameTooLong => "名前は50文字以内で入力してください",
            Self::EmailRequired => "メールアドレスを入力してください",
            Self::EmailInvalid => "有効なメールアドレスを入力してください",
            Self::PhoneInvalid => "有効な電話番号を入力してください",
            Self::SubjectRequired => "件名を入力してください",
            Self::SubjectTooLong => "件名は100文字以内で入力してください",
            Self::MessageRequired => "メッセージを入力してください",
            Self::MessageTooLong => "メッセージは1000文字以内で入力してください",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_messages() {
        assert_eq!(ValidationError::NameRequired.message(), "名前を入力してください");
        assert_eq!(
            ValidationError::EmailRequired.message(),
            "メールアドレスを入力してください"
        );
        assert_eq!(ValidationError::SubjectRequired.message(), "件名を入力してください");
        assert_eq!(
            ValidationError::MessageRequired.message(),
            "メッセージを入力してください"
        );
    }

    #[test]
    fn test_length_messages() {
        assert_eq!(
            ValidationError::NameTooLong.message(),
            "名前は50文字以内で入力してください"
        );
        assert_eq!(
            ValidationError::SubjectTooLong.message(),
            "件名は100文字以内で入力してください"
        );
        assert_eq!(
            ValidationError::MessageTooLong.to_string(),
            "メッセージは1000文字以内で入力してください"
        );
    }

    #[test]
    fn test_format_messages() {
        assert_eq!(
            ValidationError::EmailInvalid.message(),
            "有効なメールアドレスを入力してください"
        );
        assert_eq!(
            ValidationError::PhoneInvalid.message(),
            "有効な電話番号を入力してください"
        );
    }

    #[test]
    fn test_each_field_has_its_own_errors() {
        assert_eq!(ValidationError::NameTooLong.field(), FieldName::Name);
        assert_eq!(ValidationError::EmailInvalid.field(), FieldName::Email);
        assert_eq!(ValidationError::PhoneInvalid.field(), FieldName::Phone);
        assert_eq!(ValidationError::SubjectRequired.field(), FieldName::Subject);
        assert_eq!(ValidationError::MessageTooLong.field(), FieldName::Message);
    }
}

//! Result of validating a contact record.

use crate::domain::{FieldName, ValidationError};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Field-by-field validation failures.
///
/// A field appears only when it is invalid, and at most once. An empty
/// record means the whole contact record is valid. Entries iterate in form
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorRecord {
    errors: BTreeMap<FieldName, ValidationError>,
}

impl ErrorRecord {
    /// Create an empty error record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure under the field it belongs to.
    ///
    /// The first error recorded for a field wins.
    pub fn insert(&mut self, error: ValidationError) {
        self.errors.entry(error.field()).or_insert(error);
    }

    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message for `field`, if it failed.
    pub fn get(&self, field: FieldName) -> Option<&'static str> {
        self.errors.get(&field).map(ValidationError::message)
    }

    /// The structured error for `field`, if it failed.
    pub fn error(&self, field: FieldName) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    /// Failing fields, in form order.
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.errors.keys().copied()
    }

    /// Failing fields with their messages, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &'static str)> + '_ {
        self.errors
            .iter()
            .map(|(field, error)| (*field, error.message()))
    }
}

impl FromIterator<ValidationError> for ErrorRecord {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut record = Self::new();
        for error in iter {
            record.insert(error);
        }
        record
    }
}

// Serializes as {"field": "message", ...}
impl Serialize for ErrorRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, message) in self.iter() {
            map.serialize_entry(field.as_str(), message)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record() {
        let record = ErrorRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.len(), 0);
        assert_eq!(record.get(FieldName::Name), None);
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut record = ErrorRecord::new();
        record.insert(ValidationError::EmailRequired);
        record.insert(ValidationError::EmailInvalid);

        assert_eq!(record.len(), 1);
        assert_eq!(
            record.get(FieldName::Email),
            Some("メールアドレスを入力してください")
        );
    }

    #[test]
    fn test_fields_in_form_order() {
        let record: ErrorRecord = vec![
            ValidationError::MessageRequired,
            ValidationError::PhoneInvalid,
            ValidationError::NameRequired,
        ]
        .into_iter()
        .collect();

        let fields: Vec<_> = record.fields().collect();
        assert_eq!(
            fields,
            vec![FieldName::Name, FieldName::Phone, FieldName::Message]
        );
    }

    #[test]
    fn test_serializes_as_message_map() {
        let record: ErrorRecord = vec![ValidationError::NameRequired]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"名前を入力してください"}"#);

        let json = serde_json::to_string(&ErrorRecord::new()).unwrap();
        assert_eq!(json, "{}");
    }
}

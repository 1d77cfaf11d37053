//! Field names of the contact form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five fields of a contact form.
///
/// Variants are declared in form order, so ordered collections keyed by
/// `FieldName` list errors the way the form displays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl FieldName {
    /// Every field, in form order.
    pub const ALL: [FieldName; 5] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Subject,
        FieldName::Message,
    ];

    /// The key used for this field in records and JSON payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("Unknown contact form field: {}", s))
    }
}

//! Contact record submitted through the form.

use crate::domain::FieldName;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A candidate contact record as entered by a user.
///
/// Values are kept exactly as typed; trimming happens only inside the
/// emptiness checks of [`validate`](crate::validation::validate).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ContactRecord {
    /// Name of the person making the inquiry (required, max 50 characters)
    pub name: String,

    /// Reply-to email address (required)
    pub email: String,

    /// Phone number, digits and hyphens only (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Subject line (required, max 100 characters)
    pub subject: String,

    /// Inquiry body (required, max 1000 characters)
    pub message: String,
}

impl ContactRecord {
    /// Create a record without a phone number.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// The phone number, if one was provided.
    ///
    /// An empty string counts as not provided.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref().filter(|phone| !phone.is_empty())
    }

    /// The raw value of a field; an absent phone reads as empty.
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => self.phone.as_deref().unwrap_or(""),
            FieldName::Subject => &self.subject,
            FieldName::Message => &self.message,
        }
    }

    /// Clear every field, as after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

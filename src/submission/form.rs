//! Contact form state.
//!
//! [`ContactForm`] owns everything the form screen needs: the record being
//! edited, the last validation result, and whether a submission is pending
//! or done. State changes only through its methods, driven by the pure
//! result of [`validate`].

use super::submitter::{ContactSubmitter, SubmissionReceipt};
use crate::error::SubmitResult;
use crate::models::{ContactRecord, ErrorRecord};
use crate::validation::validate;

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    /// Fields are editable; errors, if any, are shown next to them.
    #[default]
    Editing,

    /// A validated record has been handed to the submitter.
    Submitting,

    /// The last submission succeeded; the confirmation screen is shown.
    Submitted,
}

/// What happened to a submit action.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Rejected(ErrorRecord),

    /// The record was accepted and the form was cleared.
    Accepted(SubmissionReceipt),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// A contact form bound to a submitter.
#[derive(Debug)]
pub struct ContactForm<S> {
    submitter: S,
    record: ContactRecord,
    errors: ErrorRecord,
    status: FormStatus,
}

impl<S: ContactSubmitter> ContactForm<S> {
    /// Create an empty form.
    pub fn new(submitter: S) -> Self {
        Self {
            submitter,
            record: ContactRecord::default(),
            errors: ErrorRecord::new(),
            status: FormStatus::Editing,
        }
    }

    pub fn record(&self) -> &ContactRecord {
        &self.record
    }

    /// Mutable access to the fields being edited.
    pub fn record_mut(&mut self) -> &mut ContactRecord {
        &mut self.record
    }

    /// Replace every field at once.
    pub fn set_record(&mut self, record: ContactRecord) {
        self.record = record;
    }

    /// Errors from the last submit action.
    pub fn errors(&self) -> &ErrorRecord {
        &self.errors
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.status == FormStatus::Submitted
    }

    /// Validate and, if the record is clean, submit it.
    ///
    /// Invalid records are never handed to the submitter; their errors are
    /// kept on the form and returned as [`SubmitOutcome::Rejected`]. On
    /// success the record is cleared and the form moves to
    /// [`FormStatus::Submitted`]. On failure the record is kept, the form
    /// returns to [`FormStatus::Editing`] and the error is returned; its
    /// [`user_message`](crate::error::SubmitError::user_message) is the
    /// alert to show.
    pub async fn submit(&mut self) -> SubmitResult<SubmitOutcome> {
        self.errors = ErrorRecord::new();

        let errors = validate(&self.record);
        if !errors.is_empty() {
            tracing::debug!(
                invalid_fields = errors.len(),
                "Submission blocked by validation errors"
            );
            self.errors = errors.clone();
            self.status = FormStatus::Editing;
            return Ok(SubmitOutcome::Rejected(errors));
        }

        self.status = FormStatus::Submitting;

        match self.submitter.submit(&self.record).await {
            Ok(receipt) => {
                tracing::info!(
                    submitted_at = %receipt.submitted_at,
                    "Contact record submitted"
                );
                self.record.reset();
                self.status = FormStatus::Submitted;
                Ok(SubmitOutcome::Accepted(receipt))
            }
            Err(e) => {
                tracing::error!("Failed to submit contact record: {}", e);
                self.status = FormStatus::Editing;
                Err(e)
            }
        }
    }

    /// Leave the confirmation screen and start a new inquiry.
    pub fn start_new(&mut self) {
        if self.status == FormStatus::Submitted {
            self.status = FormStatus::Editing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldName;
    use crate::submission::SimulatedSubmitter;
    use std::time::Duration;

    fn form() -> ContactForm<SimulatedSubmitter> {
        ContactForm::new(SimulatedSubmitter::new(Duration::ZERO))
    }

    #[tokio::test]
    async fn test_invalid_record_is_rejected() {
        let mut form = form();
        form.record_mut().name = "Taro".to_string();

        let outcome = form.submit().await.unwrap();
        match outcome {
            SubmitOutcome::Rejected(errors) => {
                assert!(errors.contains(FieldName::Email));
                assert!(!errors.contains(FieldName::Name));
            }
            other => panic!("Expected rejection, got: {:?}", other),
        }
        assert_eq!(form.status(), FormStatus::Editing);
        assert_eq!(form.errors().len(), 3);
        assert_eq!(form.record().name, "Taro");
    }

    #[tokio::test]
    async fn test_valid_record_is_submitted_and_cleared() {
        let mut form = form();
        form.set_record(ContactRecord::new(
            "Taro",
            "taro@example.com",
            "Hello",
            "Body",
        ));

        let outcome = form.submit().await.unwrap();
        assert!(outcome.is_accepted());
        assert!(form.is_submitted());
        assert!(form.errors().is_empty());
        assert_eq!(form.record(), &ContactRecord::default());

        form.start_new();
        assert_eq!(form.status(), FormStatus::Editing);
    }

    #[tokio::test]
    async fn test_errors_cleared_on_next_submit() {
        let mut form = form();
        form.submit().await.unwrap();
        assert!(!form.errors().is_empty());

        form.set_record(ContactRecord::new(
            "Taro",
            "taro@example.com",
            "Hello",
            "Body",
        ));
        form.submit().await.unwrap();
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_start_new_only_leaves_submitted() {
        let mut form = form();
        form.start_new();
        assert_eq!(form.status(), FormStatus::Editing);
        assert!(!form.is_submitting());
    }
}

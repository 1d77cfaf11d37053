use async_trait::async_trait;
use chrono::Utc;
use contact_form_server::error::{SubmitError, SubmitResult};
use contact_form_server::models::ContactRecord;
use contact_form_server::submission::{ContactSubmitter, SubmissionReceipt};
use std::sync::{Arc, Mutex};

/// Mock submitter that records what it was given.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockSubmitter {
    submitted: Arc<Mutex<Vec<ContactRecord>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

#[allow(dead_code)]
impl MockSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A submitter whose every call fails with `reason`.
    pub fn failing(reason: &str) -> Self {
        let mock = Self::new();
        mock.set_failure(Some(reason));
        mock
    }

    pub fn set_failure(&self, reason: Option<&str>) {
        *self.fail_with.lock().unwrap() = reason.map(str::to_string);
    }

    pub fn submitted(&self) -> Vec<ContactRecord> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.submitted.lock().unwrap().len()
    }
}

#[async_trait]
impl ContactSubmitter for MockSubmitter {
    async fn submit(&self, record: &ContactRecord) -> SubmitResult<SubmissionReceipt> {
        self.submitted.lock().unwrap().push(record.clone());

        if let Some(reason) = self.fail_with.lock().unwrap().clone() {
            return Err(SubmitError::Delivery(reason));
        }

        Ok(SubmissionReceipt {
            record: record.clone(),
            submitted_at: Utc::now(),
        })
    }
}

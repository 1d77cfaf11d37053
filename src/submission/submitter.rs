//! Delivery of validated contact records.

use crate::config::Config;
use crate::error::SubmitResult;
use crate::models::ContactRecord;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Proof that a contact record was accepted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionReceipt {
    /// The record as it was submitted
    pub record: ContactRecord,

    /// When the submitter accepted the record
    pub submitted_at: DateTime<Utc>,
}

/// Delivers a contact record somewhere.
///
/// Implementations only ever see records that already passed validation.
#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    /// Submit one record.
    async fn submit(&self, record: &ContactRecord) -> SubmitResult<SubmissionReceipt>;
}

#[async_trait]
impl<T: ContactSubmitter + ?Sized> ContactSubmitter for Arc<T> {
    async fn submit(&self, record: &ContactRecord) -> SubmitResult<SubmissionReceipt> {
        (**self).submit(record).await
    }
}

/// Stands in for a network call: logs the record, waits, then succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    /// Create a submitter that waits `delay` before accepting.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.submit_delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[async_trait]
impl ContactSubmitter for SimulatedSubmitter {
    async fn submit(&self, record: &ContactRecord) -> SubmitResult<SubmissionReceipt> {
        let payload = serde_json::to_string(record)?;
        tracing::info!(
            payload = %payload,
            delay_ms = self.delay.as_millis(),
            "Submitting contact record"
        );

        tokio::time::sleep(self.delay).await;

        Ok(SubmissionReceipt {
            record: record.clone(),
            submitted_at: Utc::now(),
        })
    }
}

//! Counters for validation and submission activity.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared metrics for the contact form server.
///
/// Cloning is cheap; clones share the same counters.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    validations_total: Arc<AtomicU64>,
    rejected_total: Arc<AtomicU64>,
    submissions_total: Arc<AtomicU64>,
    submission_errors_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            validations_total: Arc::new(AtomicU64::new(0)),
            rejected_total: Arc::new(AtomicU64::new(0)),
            submissions_total: Arc::new(AtomicU64::new(0)),
            submission_errors_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track one validation run and how many fields it rejected.
    pub fn track_validation(&self, invalid_fields: usize) {
        self.validations_total.fetch_add(1, Ordering::Relaxed);

        if invalid_fields > 0 {
            self.rejected_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::trace!(invalid_fields = invalid_fields, "Validation tracked");
    }

    /// Track a submission attempt of a valid record.
    pub fn track_submission(&self, duration_ms: u128, success: bool) {
        self.submissions_total.fetch_add(1, Ordering::Relaxed);

        if !success {
            self.submission_errors_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::debug!(
            duration_ms = duration_ms,
            success = success,
            "Submission completed"
        );
    }

    pub fn validations_total(&self) -> u64 {
        self.validations_total.load(Ordering::Relaxed)
    }

    /// Validations that produced at least one field error.
    pub fn rejected_total(&self) -> u64 {
        self.rejected_total.load(Ordering::Relaxed)
    }

    pub fn submissions_total(&self) -> u64 {
        self.submissions_total.load(Ordering::Relaxed)
    }

    pub fn submission_errors_total(&self) -> u64 {
        self.submission_errors_total.load(Ordering::Relaxed)
    }

    /// Share of validations that were rejected (0.0 to 1.0).
    pub fn rejection_rate(&self) -> f64 {
        let rejected = self.rejected_total() as f64;
        let total = self.validations_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            rejected / total
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Validations: {}\n\
             Rejected: {} ({:.2}% rejection rate)\n\
             Submissions: {}\n\
             Submission Errors: {}",
            self.validations_total(),
            self.rejected_total(),
            self.rejection_rate() * 100.0,
            self.submissions_total(),
            self.submission_errors_total(),
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Finish the timer with a specific status and return the elapsed milliseconds.
    pub fn finish_with_status(self, success: bool) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        if success {
            tracing::debug!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation succeeded"
            );
        } else {
            tracing::warn!(
                operation = %self.operation,
                duration_ms = duration_ms,
                "Operation failed"
            );
        }

        duration_ms
    }
}

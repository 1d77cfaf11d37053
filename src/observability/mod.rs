//! Observability module for monitoring and metrics.
//!
//! Counters for validation and submission activity, plus a timer that logs
//! operation durations through `tracing`.

pub mod metrics;

pub use metrics::{MetricsTracker, Timer};

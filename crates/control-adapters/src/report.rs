//! Confirmation reports returned by the adapters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome record for a confirmed control action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmReport {
    /// When the adapter started driving the control
    pub started_at: DateTime<Utc>,

    /// Wall-clock time until confirmation
    pub latency_ms: u64,
}

impl ConfirmReport {
    /// Build a report for a confirmation observed now
    pub fn confirmed(started_at: DateTime<Utc>, latency_ms: u64) -> Self {
        Self {
            started_at,
            latency_ms,
        }
    }
}

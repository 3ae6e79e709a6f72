//! Retry policy configuration

use serde::{Deserialize, Serialize};

/// Timing and attempt budget for the reliable action executor
///
/// All intervals are milliseconds. `timeout_ms` is the per-attempt
/// verification budget, not an overall deadline; worst-case latency is
/// roughly `max_attempts * (timeout_ms + action_interval_ms)`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Maximum number of action attempts (treated as at least 1)
    pub max_attempts: u32,

    /// Delay between a failed or unconfirmed attempt and the next one
    pub action_interval_ms: u64,

    /// Polling period while awaiting verification
    pub verify_interval_ms: u64,

    /// Per-attempt verification budget
    pub timeout_ms: u64,

    /// Label used in diagnostics and the exhaustion error
    pub action_name: String,
}

impl RetryPolicy {
    /// Default policy with a caller-supplied action label
    pub fn named(action_name: impl Into<String>) -> Self {
        Self {
            action_name: action_name.into(),
            ..Self::default()
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            action_interval_ms: 100,
            verify_interval_ms: 50,
            timeout_ms: 1_000,
            action_name: "action".to_string(),
        }
    }
}

//! Bounded polling helper
//!
//! A one-shot poll-until-success primitive for awaiting eventually
//! consistent external conditions (an asynchronously delivered message, a
//! row appearing in a table). Unlike the executor it never re-invokes an
//! action; it only observes.

use std::future::Future;

use tokio::time::{sleep, Duration, Instant};
use tracing::debug;

use crate::errors::PollError;

/// Fixed sub-interval between probe invocations
const PROBE_INTERVAL_MS: u64 = 100;

/// Options for [`poll_until`]
#[derive(Clone, Debug)]
pub struct PollOptions {
    /// Message raised on expiry when no probe error was observed
    pub error_message: Option<String>,

    /// Overall deadline for the poll
    pub timeout_ms: u64,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            error_message: None,
            timeout_ms: 5_000,
        }
    }
}

/// Repeatedly invoke `probe` until it yields a value or the deadline elapses
///
/// Probe errors are swallowed and remembered while the deadline has not
/// passed; on expiry the last observed error is surfaced, or the configured
/// message if every probe returned cleanly.
pub async fn poll_until<T, F, Fut>(mut probe: F, options: PollOptions) -> Result<T, PollError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<Option<T>>>,
{
    let deadline = Instant::now() + Duration::from_millis(options.timeout_ms);
    let mut last_error: Option<anyhow::Error> = None;

    loop {
        match probe().await {
            Ok(Some(value)) => return Ok(value),
            Ok(None) => {}
            Err(err) => {
                debug!("probe raised while polling: {}", err);
                last_error = Some(err);
            }
        }

        if Instant::now() >= deadline {
            break;
        }
        sleep(Duration::from_millis(PROBE_INTERVAL_MS)).await;
    }

    match last_error {
        Some(err) => Err(PollError::LastObserved(err)),
        None => Err(PollError::DeadlineExpired(
            options
                .error_message
                .unwrap_or_else(|| "condition not met before deadline".to_string()),
        )),
    }
}

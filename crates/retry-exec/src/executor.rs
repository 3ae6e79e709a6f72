//! Reliable action executor
//!
//! Performs an action, then races a verification poll loop against a
//! per-attempt timeout, retrying under the configured budgets. The action
//! and verifier are opaque closures; the executor owns only the timing.

use std::fmt::Display;
use std::future::Future;

use tokio::time::{sleep, timeout, Duration};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::ExecError;
use crate::policy::RetryPolicy;

/// Pause between a successful action and the first verification poll,
/// covering asynchronous UI propagation. Not part of the timeout budget.
const SETTLE_DELAY_MS: u64 = 50;

/// Outcome of a single attempt
enum AttemptOutcome<T, E> {
    /// Action ran and verification confirmed within the budget
    Confirmed(T),

    /// Action ran but verification never confirmed before the timeout
    Unconfirmed,

    /// The action invocation itself failed
    ActionError(E),
}

/// Executes an action and polls a verification predicate until confirmed
///
/// Holds no state across calls; each [`execute`](ReliableExecutor::execute)
/// is independent and reentrant.
pub struct ReliableExecutor {
    policy: RetryPolicy,
}

impl ReliableExecutor {
    /// Create an executor with the given policy
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    /// Access the configured policy
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Run the attempt loop
    ///
    /// The action is invoked exactly once per attempt, idempotent or not.
    /// The verifier must be a side-effect-free observation; it is polled
    /// every `verify_interval_ms` until it returns true or the per-attempt
    /// timeout elapses. An action error on the final attempt is returned
    /// to the caller with the original error value; earlier action errors
    /// are swallowed and retried.
    pub async fn execute<T, E, A, AF, V, VF>(
        &self,
        mut action: A,
        verify: V,
    ) -> Result<T, ExecError<E>>
    where
        A: FnMut() -> AF,
        AF: Future<Output = Result<T, E>>,
        V: Fn() -> VF,
        VF: Future<Output = bool>,
        E: Display,
    {
        let exec_id = Uuid::new_v4().to_string();
        let max_attempts = self.policy.max_attempts.max(1);
        let action_interval = Duration::from_millis(self.policy.action_interval_ms);

        for attempt in 1..=max_attempts {
            debug!(
                exec_id = %exec_id,
                action = %self.policy.action_name,
                attempt,
                max_attempts,
                "performing action"
            );

            match self.run_attempt(&mut action, &verify).await {
                AttemptOutcome::Confirmed(value) => {
                    info!(
                        exec_id = %exec_id,
                        action = %self.policy.action_name,
                        attempt,
                        "action confirmed"
                    );
                    return Ok(value);
                }
                AttemptOutcome::ActionError(err) if attempt == max_attempts => {
                    warn!(
                        exec_id = %exec_id,
                        action = %self.policy.action_name,
                        attempt,
                        "action failed on final attempt: {}",
                        err
                    );
                    return Err(ExecError::ActionFailed(err));
                }
                AttemptOutcome::ActionError(err) => {
                    warn!(
                        exec_id = %exec_id,
                        action = %self.policy.action_name,
                        attempt,
                        "action failed, retrying: {}",
                        err
                    );
                }
                AttemptOutcome::Unconfirmed if attempt == max_attempts => break,
                AttemptOutcome::Unconfirmed => {
                    warn!(
                        exec_id = %exec_id,
                        action = %self.policy.action_name,
                        attempt,
                        timeout_ms = self.policy.timeout_ms,
                        "verification timed out, retrying"
                    );
                }
            }

            sleep(action_interval).await;
        }

        Err(ExecError::RetryExhausted {
            action: self.policy.action_name.clone(),
            attempts: max_attempts,
        })
    }

    /// Execute one attempt: action, settle, then verification vs timeout
    async fn run_attempt<T, E, A, AF, V, VF>(
        &self,
        action: &mut A,
        verify: &V,
    ) -> AttemptOutcome<T, E>
    where
        A: FnMut() -> AF,
        AF: Future<Output = Result<T, E>>,
        V: Fn() -> VF,
        VF: Future<Output = bool>,
    {
        let value = match action().await {
            Ok(value) => value,
            // No verification for an attempt whose action failed.
            Err(err) => return AttemptOutcome::ActionError(err),
        };

        sleep(Duration::from_millis(SETTLE_DELAY_MS)).await;

        // `timeout` polls the confirmation loop before consulting its
        // deadline, so a verify success in the same tick wins the race.
        // The losing side is dropped and cannot fire later.
        let budget = Duration::from_millis(self.policy.timeout_ms);
        match timeout(budget, self.await_confirmation(verify)).await {
            Ok(()) => AttemptOutcome::Confirmed(value),
            Err(_) => AttemptOutcome::Unconfirmed,
        }
    }

    /// Poll the verifier until it returns true
    async fn await_confirmation<V, VF>(&self, verify: &V)
    where
        V: Fn() -> VF,
        VF: Future<Output = bool>,
    {
        let interval = Duration::from_millis(self.policy.verify_interval_ms);
        loop {
            if verify().await {
                return;
            }
            sleep(interval).await;
        }
    }
}

/// One-shot convenience over [`ReliableExecutor`]
pub async fn execute<T, E, A, AF, V, VF>(
    action: A,
    verify: V,
    policy: RetryPolicy,
) -> Result<T, ExecError<E>>
where
    A: FnMut() -> AF,
    AF: Future<Output = Result<T, E>>,
    V: Fn() -> VF,
    VF: Future<Output = bool>,
    E: Display,
{
    ReliableExecutor::new(policy).execute(action, verify).await
}

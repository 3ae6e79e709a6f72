//! Terminal error types for the executor and poller

use thiserror::Error;

/// Terminal outcome of a reliable execution that never confirmed
#[derive(Debug, Error)]
pub enum ExecError<E> {
    /// The action invocation itself failed on the final attempt; carries
    /// the original error value unchanged
    #[error("action failed: {0}")]
    ActionFailed(E),

    /// Verification never confirmed within the attempt budget
    #[error("'{action}' not confirmed after {attempts} attempts")]
    RetryExhausted { action: String, attempts: u32 },
}

impl<E> ExecError<E> {
    /// Recover the underlying action error, if that is what ended the run
    pub fn into_action_error(self) -> Option<E> {
        match self {
            ExecError::ActionFailed(err) => Some(err),
            ExecError::RetryExhausted { .. } => None,
        }
    }
}

/// Terminal outcome of [`poll_until`](crate::poll::poll_until) once its
/// deadline elapses
#[derive(Debug, Error)]
pub enum PollError {
    /// The last error observed while probing
    #[error("{0}")]
    LastObserved(anyhow::Error),

    /// No probe error occurred; carries the caller-supplied message
    #[error("{0}")]
    DeadlineExpired(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_exhausted_display() {
        let err: ExecError<std::io::Error> = ExecError::RetryExhausted {
            action: "attach files".to_string(),
            attempts: 3,
        };

        assert_eq!(err.to_string(), "'attach files' not confirmed after 3 attempts");
    }

    #[test]
    fn test_into_action_error() {
        let inner = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err = ExecError::ActionFailed(inner);

        let recovered = err.into_action_error().unwrap();
        assert_eq!(recovered.to_string(), "boom");

        let exhausted: ExecError<std::io::Error> = ExecError::RetryExhausted {
            action: "action".to_string(),
            attempts: 1,
        };
        assert!(exhausted.into_action_error().is_none());
    }
}

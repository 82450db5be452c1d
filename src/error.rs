//! Error type used by the pull protocol.
//!
//! The protocol has exactly one error kind:
//!
//! - [`FetchError`] - a single failed pull attempt, raised by a
//!   [`Source`](crate::Source) and terminal for the stream that observes it.
//!
//! The subscription never interprets or retries a `FetchError`; it forwards
//! the value once via `on_error` and terminates. The type provides helper
//! methods (`as_label`, `as_message`) for logging and metrics.

use thiserror::Error;

/// Error produced by a failed sensor pull.
///
/// Carries no retry state: every pull attempt is independent, and the first
/// failure a subscription observes ends that stream permanently. Retrying is
/// a consumer-level decision (re-attach a fresh subscription).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum FetchError {
    /// A fetch attempt failed for the given subject.
    #[error("fetch failed for {subject}: {reason}")]
    Failed {
        /// The subject that was being queried.
        subject: String,
        /// Failure description supplied by the source.
        reason: String,
    },
}

impl FetchError {
    /// Builds a failure for `subject` with the given reason.
    ///
    /// # Example
    /// ```
    /// use pullstream::FetchError;
    ///
    /// let err = FetchError::failed("seoul", "sensor offline");
    /// assert_eq!(err.to_string(), "fetch failed for seoul: sensor offline");
    /// ```
    pub fn failed(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        FetchError::Failed {
            subject: subject.into(),
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use pullstream::FetchError;
    ///
    /// let err = FetchError::failed("seoul", "sensor offline");
    /// assert_eq!(err.as_label(), "fetch_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            FetchError::Failed { .. } => "fetch_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            FetchError::Failed { subject, reason } => {
                format!("subject={subject}: {reason}")
            }
        }
    }
}

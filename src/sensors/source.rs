//! # Source abstraction: the fallible producer seam.
//!
//! [`Source`] is the leaf of the protocol. Given a subject it either produces
//! one fresh [`Reading`] or fails with a [`FetchError`]. It never talks to the
//! consumer and never schedules itself: all pacing, ordering and delivery is
//! owned by the subscription that pulls from it.
//!
//! The common handle type is [`SourceRef`], an `Arc<dyn Source>` suitable for
//! sharing across attachments.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::sensors::reading::Reading;

/// Fallible generator of sensor readings.
///
/// ### Contract
/// - Every pull is independent: implementations must not retain state between
///   `fetch` calls (internal randomness is fine).
/// - No side effects beyond the returned value; the caller owns all
///   scheduling.
/// - The returned future is always polled to completion by the subscription.
///   A fetch is never interrupted mid-flight; cancelling the subscription
///   only suppresses delivery of a result that resolves afterwards.
///
/// ### Example
/// ```
/// use std::sync::Arc;
/// use async_trait::async_trait;
/// use pullstream::{FetchError, Reading, Source};
///
/// struct Fixed;
///
/// #[async_trait]
/// impl Source for Fixed {
///     async fn fetch(&self, subject: Arc<str>) -> Result<Reading, FetchError> {
///         Ok(Reading::new(subject, 7))
///     }
/// }
/// ```
#[async_trait]
pub trait Source: Send + Sync + 'static {
    /// Pulls one reading for `subject`, or fails.
    ///
    /// The subject arrives as `Arc<str>` because the subscription holds it
    /// for the lifetime of the stream and hands out a cheap clone per pull.
    async fn fetch(&self, subject: Arc<str>) -> Result<Reading, FetchError>;
}

/// Shared reference to a source (`Arc<dyn Source>`).
pub type SourceRef = Arc<dyn Source>;

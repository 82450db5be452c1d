//! # Stream consumer trait.
//!
//! Provides [`Consumer`], the extension point for receiving the signals of a
//! subscription: readings, failure, completion, and the subscription handle
//! itself.
//!
//! ## Architecture
//! ```text
//! Source ── fetch(subject) ──► emitter task ──► consumer.on_next(reading)
//!                                  │
//!                                  ├─ Err(e) ──► consumer.on_error(e), stream ends
//!                                  └─ panic in a callback → subscription cancelled
//! ```
//!
//! ## Rules
//! - `on_subscribe` is delivered exactly once, before any other signal.
//! - `on_next` is delivered at most once per unit of requested demand.
//! - At most one terminal signal (`on_error` or `on_complete`) ever arrives.
//! - After a successful `cancel()`, no further signals arrive.
//! - Signals are serialized: no two callbacks of one consumer run concurrently.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use pullstream::{Consumer, FetchError, Reading, Subscription};
//!
//! struct Printer;
//!
//! #[async_trait]
//! impl Consumer for Printer {
//!     async fn on_subscribe(&self, subscription: Subscription) {
//!         // Nothing flows until somebody asks for it.
//!         subscription.request(1);
//!     }
//!
//!     async fn on_next(&self, reading: Reading) {
//!         println!("{reading}");
//!     }
//!
//!     async fn on_error(&self, error: FetchError) {
//!         eprintln!("stream failed: {error}");
//!     }
//!
//!     async fn on_complete(&self) {}
//!
//!     fn name(&self) -> &'static str {
//!         "printer"
//!     }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::sensors::Reading;
use crate::stream::Subscription;

/// Shared reference to a consumer.
pub type ConsumerRef = Arc<dyn Consumer>;

/// Receiving side of a subscription.
///
/// A consumer never polls the source itself: it signals demand through the
/// [`Subscription`] handed to [`on_subscribe`](Self::on_subscribe), and the
/// emitter pushes at most that many readings back, one at a time.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Request demand from `on_subscribe` (or from any task holding the
///   [`Subscription`]); without demand the stream stays parked forever.
/// - Handle errors internally; do not panic. A panicking callback is caught
///   and cancels the subscription.
#[async_trait]
pub trait Consumer: Send + Sync + 'static {
    /// Receives the subscription handle, exactly once, before any reading.
    ///
    /// The handle is cheap to clone; stash a copy if later callbacks or other
    /// tasks need to request more demand or cancel.
    async fn on_subscribe(&self, subscription: Subscription);

    /// Receives one reading.
    ///
    /// Called at most once per unit of requested demand, never concurrently
    /// with any other callback of this consumer.
    async fn on_next(&self, reading: Reading);

    /// Receives the failure that terminated the stream.
    ///
    /// Terminal: no further signals arrive after this one.
    async fn on_error(&self, error: FetchError);

    /// Receives the end-of-stream marker.
    ///
    /// Terminal. The built-in emitter treats sources as unbounded and ends
    /// streams only through `on_error` or cancellation, so this fires only
    /// for consumers wired to bounded producers of their own.
    async fn on_complete(&self);

    /// Returns the consumer name used in panic reports and logs.
    ///
    /// Prefer short, descriptive names (e.g., "printer", "archiver").
    /// The default uses `type_name::<Self>()`, which can be verbose -
    /// override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

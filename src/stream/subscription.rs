//! # Subscription handle for one source-to-consumer stream.
//!
//! [`Subscription`] is a thin cloneable handle over the shared ledger of one
//! stream. Whoever holds a clone can grant demand with
//! [`request`](Subscription::request) or end the stream with
//! [`cancel`](Subscription::cancel); [`attach`](Subscription::attach) wires a
//! source to a consumer and spawns the emitter task that services the ledger.
//!
//! ## Architecture
//! ```text
//! Subscription::attach(source, "seoul", consumer)
//!      │
//!      ├─ spawns ──► emitter task ──► source.fetch() ──► consumer callbacks
//!      │                 ▲
//!      └─ returns ── Subscription
//!                        │
//!            request(n) / cancel() ── ledger update + wake ──┘
//! ```
//!
//! ## Rules
//! - **Pull only**: nothing is fetched until `request` grants credit.
//! - **Non-blocking**: `request` and `cancel` never block and never run
//!   consumer code; they update the ledger and wake the parked emitter.
//! - **One-way exits**: after a cancel or a source failure every later
//!   `request` or `cancel` is a no-op.
//! - **Handles are inert**: dropping clones does not cancel the stream. End
//!   it with `cancel` or let the source fail; an abandoned active stream
//!   parks until its runtime shuts down.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::consumers::ConsumerRef;
use crate::sensors::SourceRef;
use crate::stream::emitter::Emitter;
use crate::stream::state::{Ledger, SubscriptionState};

/// State shared between the handle clones and the emitter task.
pub(crate) struct Shared {
    /// Single synchronization point for demand and lifecycle.
    pub(crate) ledger: Mutex<Ledger>,
    /// Wakes the emitter when demand arrives or the stream is cancelled.
    pub(crate) wake: Notify,
}

impl Shared {
    pub(crate) fn new() -> Self {
        Self {
            ledger: Mutex::new(Ledger::new()),
            wake: Notify::new(),
        }
    }
}

/// Demand-side handle of a running stream.
///
/// ### Properties
/// - **Cloneable**: cheap to clone (internally holds an `Arc`-backed ledger);
///   the consumer's `on_subscribe` receives a clone of the same handle
///   [`attach`](Subscription::attach) returns.
/// - **Non-blocking**: every method is synchronous and lock-light; none of
///   them runs source or consumer code.
/// - **Race-safe**: demand accounting and lifecycle transitions happen under
///   one mutex, so concurrent `request`/`cancel` calls never double-emit or
///   resurrect an ended stream.
#[derive(Clone)]
pub struct Subscription {
    shared: Arc<Shared>,
}

impl Subscription {
    /// Wires `source` to `consumer` and starts the stream.
    ///
    /// Spawns the emitter task, which delivers `on_subscribe` with a clone of
    /// the returned handle and then parks until demand arrives.
    ///
    /// ### Notes
    /// - Must be called from within a Tokio runtime (it spawns a task).
    /// - At most one `fetch` per subscription is ever in flight; readings are
    ///   delivered one at a time, in order.
    /// - The handle is usable immediately; demand requested before
    ///   `on_subscribe` has run is simply credited up front.
    pub fn attach(source: SourceRef, subject: impl Into<Arc<str>>, consumer: ConsumerRef) -> Self {
        let shared = Arc::new(Shared::new());
        let emitter = Emitter::new(Arc::clone(&shared), source, subject.into(), consumer);
        tokio::spawn(emitter.run());
        Self { shared }
    }

    /// Builds a handle over existing shared state (for the emitter).
    pub(crate) fn from_shared(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    /// Grants the emitter credit for `amount` more readings.
    ///
    /// Demand accumulates across calls and saturates at `u64::MAX`, which
    /// the stream treats as effectively unbounded. `request(0)` is a no-op,
    /// as is any request after the stream has ended.
    pub fn request(&self, amount: u64) {
        if self.shared.ledger.lock().request(amount) {
            self.shared.wake.notify_one();
        }
    }

    /// Ends the stream from the consumer side.
    ///
    /// Outstanding demand is discarded and no further signal is delivered:
    /// a reading whose fetch completes after this call is suppressed, not
    /// delivered. Idempotent; a cancel after a source failure is a no-op.
    pub fn cancel(&self) {
        if self.shared.ledger.lock().cancel() {
            self.shared.wake.notify_one();
        }
    }

    /// Returns a snapshot of the lifecycle state.
    ///
    /// Terminal states are stable; an `Active` answer may be stale by the
    /// time the caller acts on it.
    pub fn state(&self) -> SubscriptionState {
        self.shared.ledger.lock().state()
    }

    /// Returns a snapshot of the unfilled demand.
    pub fn demand(&self) -> u64 {
        self.shared.ledger.lock().demand()
    }

    /// True while the stream can still deliver readings.
    pub fn is_active(&self) -> bool {
        self.state().is_active()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ledger = self.shared.ledger.lock();
        f.debug_struct("Subscription")
            .field("state", &ledger.state())
            .field("demand", &ledger.demand())
            .finish()
    }
}

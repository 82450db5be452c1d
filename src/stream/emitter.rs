//! # Emitter: the per-subscription worker task.
//!
//! One emitter is spawned per [`Subscription::attach`] call. It owns the
//! whole delivery side of the protocol: it draws credit from the ledger,
//! pulls readings from the source one at a time, and invokes the consumer's
//! callbacks - always from this single task, so signals are never delivered
//! concurrently.
//!
//! ## Flow
//! ```text
//!  on_subscribe(handle)
//!        │
//!        ▼
//!  ┌─► draw credit ─── none ──► park until request()/cancel(), then retry
//!  │       │ one unit
//!  │       ▼
//!  │  source.fetch(subject)
//!  │       │
//!  │       ├── Err(e) ──► terminate ──► on_error(e) ──► stop
//!  │       │              (skipped when a cancel won the race)
//!  │       │
//!  │       └── Ok(reading) ──► still active? ── no ──► stop (suppressed)
//!  │                                 │ yes
//!  │                                 ▼
//!  └────────────────────────── on_next(reading)
//! ```
//!
//! ## Rules
//! - The ledger lock is never held across a fetch or a callback.
//! - A fetch, once started, is always polled to completion; cancellation
//!   only suppresses the delivery of its result.
//! - A panic in any callback is caught, reported to stderr, and cancels the
//!   subscription; the process keeps running.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;

use crate::consumers::ConsumerRef;
use crate::sensors::SourceRef;
use crate::stream::state::Step;
use crate::stream::subscription::{Shared, Subscription};

/// Worker that services one subscription until its stream ends.
pub(crate) struct Emitter {
    shared: Arc<Shared>,
    source: SourceRef,
    subject: Arc<str>,
    consumer: ConsumerRef,
}

impl Emitter {
    pub(crate) fn new(
        shared: Arc<Shared>,
        source: SourceRef,
        subject: Arc<str>,
        consumer: ConsumerRef,
    ) -> Self {
        Self {
            shared,
            source,
            subject,
            consumer,
        }
    }

    /// Runs the emission loop to completion.
    ///
    /// Exits when the stream is cancelled, a fetch fails, or a consumer
    /// callback panics.
    pub(crate) async fn run(self) {
        let handle = Subscription::from_shared(Arc::clone(&self.shared));
        if !self.deliver(self.consumer.on_subscribe(handle)).await {
            self.shared.ledger.lock().cancel();
            return;
        }

        loop {
            let step = self.shared.ledger.lock().draw();
            match step {
                Step::Stop => break,
                Step::Park => {
                    self.shared.wake.notified().await;
                    continue;
                }
                Step::Pull => {}
            }

            match self.source.fetch(Arc::clone(&self.subject)).await {
                Ok(reading) => {
                    // The stream may have ended while the fetch was in
                    // flight; a drawn-but-undeliverable reading is dropped.
                    if !self.shared.ledger.lock().state().is_active() {
                        break;
                    }
                    if !self.deliver(self.consumer.on_next(reading)).await {
                        self.shared.ledger.lock().cancel();
                        break;
                    }
                }
                Err(error) => {
                    // Terminate first so a concurrent cancel cannot race the
                    // transition; if cancel won, the failure is suppressed.
                    if self.shared.ledger.lock().terminate() {
                        self.deliver(self.consumer.on_error(error)).await;
                    }
                    break;
                }
            }
        }
    }

    /// Invokes one consumer callback with panic isolation.
    ///
    /// Returns `false` if the callback panicked; the panic is reported to
    /// stderr with the consumer's name.
    async fn deliver<F>(&self, signal: F) -> bool
    where
        F: Future<Output = ()>,
    {
        if let Err(panic_err) = AssertUnwindSafe(signal).catch_unwind().await {
            eprintln!(
                "[pullstream] consumer '{}' panicked: {:?}",
                self.consumer.name(),
                panic_err
            );
            return false;
        }
        true
    }
}

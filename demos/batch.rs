//! # Example: batch
//!
//! Demonstrates batched demand: a custom consumer asks for three readings at
//! a time, tops the batch back up as it drains, and hangs up after nine.
//!
//! Shows how to:
//! - Implement the [`Consumer`] trait by hand.
//! - Stash the [`Subscription`] handle for later demand.
//! - Observe that a batch of n buys exactly n deliveries.
//!
//! ## Flow
//! ```text
//! Subscription::attach(FlakySensor(0.0), "seoul", BatchConsumer)
//!     ├─► on_subscribe ──► request(3)
//!     ├─► on_next ×3 ──► request(3) ──► on_next ×3 ──► request(3)
//!     ├─► nine readings seen ──► cancel()
//!     └─► main drains the readings from a channel until it closes
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example batch
//! ```

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use pullstream::{Consumer, FetchError, FlakySensor, Reading, Subscription};
use tokio::sync::mpsc;

const BATCH: u64 = 3;
const TOTAL: u32 = 9;

/// Requests three readings at a time and cancels after nine.
/// Forwards each reading to main over a channel.
struct BatchConsumer {
    tx: mpsc::UnboundedSender<Reading>,
    seen: AtomicU32,
    subscription: OnceLock<Subscription>,
}

#[async_trait]
impl Consumer for BatchConsumer {
    async fn on_subscribe(&self, subscription: Subscription) {
        subscription.request(BATCH);
        let _ = self.subscription.set(subscription);
    }

    async fn on_next(&self, reading: Reading) {
        let seen = self.seen.fetch_add(1, Ordering::SeqCst) + 1;
        let _ = self.tx.send(reading);

        if let Some(subscription) = self.subscription.get() {
            if seen >= TOTAL {
                subscription.cancel();
            } else if seen % (BATCH as u32) == 0 {
                println!("[batch] drained, requesting {BATCH} more");
                subscription.request(BATCH);
            }
        }
    }

    async fn on_error(&self, error: FetchError) {
        eprintln!("[batch] stream failed: {error}");
    }

    async fn on_complete(&self) {}

    fn name(&self) -> &'static str {
        "batch"
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    println!("batch demo\n");

    let (tx, mut rx) = mpsc::unbounded_channel();
    let consumer = Arc::new(BatchConsumer {
        tx,
        seen: AtomicU32::new(0),
        subscription: OnceLock::new(),
    });

    // Fault probability 0.0 keeps the run error-free, so the batching is
    // easy to follow.
    Subscription::attach(FlakySensor::arc(0.0), "seoul", consumer);

    // The channel closes once the consumer cancels and the emitter exits.
    while let Some(reading) = rx.recv().await {
        println!("[main] got {reading}");
    }

    println!("\nfinished");
    Ok(())
}

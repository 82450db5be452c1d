//! # Example: cancel
//!
//! Demonstrates consumer-side cancellation against a slow sensor: main hangs
//! up while a fetch is still in flight, and the reading that fetch produces
//! is suppressed instead of delivered.
//!
//! Shows how to:
//! - Build a scripted source with [`SourceFn`].
//! - Cancel a stream from outside the consumer.
//! - Observe that an in-flight fetch still completes but stays silent.
//!
//! ## Flow
//! ```text
//! Subscription::attach(slow source, "seoul", Watcher)
//!     ├─► on_subscribe ──► request(1)
//!     ├─► fetch (300ms) ──► on_next ──► request(1) ──► fetch ...
//!     ├─► main: cancel() at ~450ms, mid-second-fetch
//!     └─► second fetch completes at ~600ms ──► suppressed, emitter exits
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example cancel
//! ```

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use pullstream::{Consumer, FetchError, Reading, SourceFn, Subscription};

/// Prints every signal and keeps a steady one-at-a-time cadence.
struct Watcher {
    subscription: OnceLock<Subscription>,
}

#[async_trait]
impl Consumer for Watcher {
    async fn on_subscribe(&self, subscription: Subscription) {
        println!("[watcher] subscribed, requesting the first reading");
        let handle = subscription.clone();
        let _ = self.subscription.set(subscription);
        handle.request(1);
    }

    async fn on_next(&self, reading: Reading) {
        println!("[watcher] {reading}");
        if let Some(subscription) = self.subscription.get() {
            subscription.request(1);
        }
    }

    async fn on_error(&self, error: FetchError) {
        println!("[watcher] stream failed: {error}");
    }

    async fn on_complete(&self) {}

    fn name(&self) -> &'static str {
        "watcher"
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    println!("cancel demo\n");

    // A deliberately slow sensor: every reading takes 300ms to produce.
    let source = SourceFn::arc(|subject: Arc<str>| async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        Ok::<_, FetchError>(Reading::new(subject, 21))
    });

    let consumer = Arc::new(Watcher {
        subscription: OnceLock::new(),
    });
    let subscription = Subscription::attach(source, "seoul", consumer);

    // One reading lands at ~300ms; the second is still in flight at 450ms.
    tokio::time::sleep(Duration::from_millis(450)).await;
    println!("[main] hanging up mid-fetch");
    subscription.cancel();
    println!("[main] state now {:?}", subscription.state());

    // The in-flight reading completes around 600ms but is never delivered.
    tokio::time::sleep(Duration::from_millis(400)).await;

    println!("\nfinished");
    Ok(())
}

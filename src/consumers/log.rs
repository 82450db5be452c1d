//! # Simple logging consumer for debugging and demos.
//!
//! [`LogConsumer`] prints every signal to stdout in a human-readable format
//! and keeps a steady one-reading-at-a-time cadence: it requests one reading
//! on subscribe and one more after each delivery.
//!
//! ## Output format
//! ```text
//! [reading] subject=seoul value=42
//! [stream-error] err="fetch failed for seoul: sensor misread"
//! [complete]
//! ```
//!
//! ## Example
//! ```no_run
//! # use pullstream::{FlakySensor, LogConsumer, Subscription};
//! let subscription = Subscription::attach(FlakySensor::arc(0.1), "seoul", LogConsumer::arc());
//! // LogConsumer keeps requesting readings until the stream fails or is cancelled.
//! ```

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;

use crate::consumers::Consumer;
use crate::error::FetchError;
use crate::sensors::Reading;
use crate::stream::Subscription;

/// Simple stdout logging consumer.
///
/// Enabled via the `logging` feature. Prints human-readable signal
/// descriptions to stdout for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Consumer`] for
/// structured logging or metrics collection.
///
/// One instance serves one subscription: it stores the handle it receives in
/// [`on_subscribe`](Consumer::on_subscribe) and cancels any later attachment.
#[derive(Default)]
pub struct LogConsumer {
    subscription: OnceLock<Subscription>,
}

impl LogConsumer {
    /// Creates a consumer that is not yet attached to any subscription.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the consumer and returns it as a shared handle.
    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl Consumer for LogConsumer {
    async fn on_subscribe(&self, subscription: Subscription) {
        let handle = subscription.clone();
        if self.subscription.set(subscription).is_err() {
            eprintln!("[log] already attached; cancelling extra subscription");
            handle.cancel();
            return;
        }
        handle.request(1);
    }

    async fn on_next(&self, reading: Reading) {
        println!(
            "[reading] subject={} value={}",
            reading.subject(),
            reading.value()
        );
        if let Some(subscription) = self.subscription.get() {
            subscription.request(1);
        }
    }

    async fn on_error(&self, error: FetchError) {
        println!("[stream-error] err={:?}", error.to_string());
    }

    async fn on_complete(&self) {
        println!("[complete]");
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

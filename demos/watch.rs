//! # Example: watch
//!
//! Streams simulated temperature readings for one town to the built-in
//! [`LogConsumer`] until the sensor misreads or the watch window closes,
//! whichever comes first.
//!
//! Shows how to:
//! - Attach a [`FlakySensor`] source to a consumer.
//! - Let [`LogConsumer`] drive a steady one-reading-at-a-time cadence.
//! - End a stream from the outside with [`Subscription::cancel`].
//!
//! ## Flow
//! ```text
//! Subscription::attach(FlakySensor, "seoul", LogConsumer)
//!     ├─► on_subscribe ──► request(1)
//!     ├─► fetch ──► on_next ──► request(1) ──► fetch ──► ...
//!     ├─► (1 in 10) fetch fails ──► on_error ──► stream ends
//!     └─► or: main cancels once the watch window closes
//! ```
//!
//! ## Run
//! Requires the `logging` feature to export [`LogConsumer`].
//! ```bash
//! cargo run --example watch --features logging
//! ```

use std::time::Duration;

use pullstream::{FlakySensor, LogConsumer, Subscription};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    println!("watch demo (run with --features logging)\n");

    let subscription = Subscription::attach(FlakySensor::arc(0.1), "seoul", LogConsumer::arc());

    // Watch for up to a second; odds are the sensor misreads well before
    // that and ends the stream on its own.
    tokio::time::sleep(Duration::from_secs(1)).await;
    subscription.cancel();

    println!("\nfinished");
    Ok(())
}

//! # pullstream
//!
//! **Pullstream** is a small pull-based streaming library for Rust.
//!
//! It wires a fallible source of sensor readings to a consumer through an
//! explicit demand protocol: nothing is produced until the consumer asks,
//! readings arrive one at a time, and the first failure ends the stream.
//! The crate is designed as a building block for pipelines that need
//! backpressure without buffering.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!            Subscription::attach(source, "seoul", consumer)
//!                               │ spawns
//!                               ▼
//! ┌──────────┐  fetch(subject) ┌──────────────┐  on_subscribe / on_next /
//! │  Source  │◄────────────────│ emitter task │  on_error (serialized)
//! │          │──── Ok / Err ──►│ (one per     │─────────────────────────┐
//! └──────────┘                 │ subscription)│                         ▼
//!                              └──────┬───────┘                  ┌──────────┐
//!                                     │ draw / park              │ Consumer │
//!                                     ▼                          └────┬─────┘
//!                             ┌─────────────────┐                     │
//!                             │  shared ledger  │   request(n) /      │
//!                             │ (demand, state) │◄──── cancel() ──────┘
//!                             └─────────────────┘  (any Subscription clone)
//! ```
//!
//! ### Lifecycle
//! ```text
//! attach ──► emitter task ──► on_subscribe(handle)
//!
//! loop {
//!   ├─► draw one unit of demand
//!   │     ├─ stream ended ──► exit
//!   │     ├─ no demand    ──► park until request()/cancel(), retry
//!   │     └─ drawn        ──► continue
//!   │
//!   ├─► source.fetch(subject)        (ledger unlocked; one in flight)
//!   │     ├─ Ok(reading)
//!   │     │    ├─ ended while fetching ──► suppress reading, exit
//!   │     │    └─ on_next(reading)    ──► loop
//!   │     │
//!   │     └─ Err(e) ──► Active → Terminated ──► on_error(e) ──► exit
//!   │                   (skipped when a cancel won the race)
//!   │
//!   └─ panic in any callback ──► caught, subscription cancelled, exit
//! }
//! ```
//!
//! ## Features
//! | Area          | Description                                            | Key types / traits                        |
//! |---------------|--------------------------------------------------------|-------------------------------------------|
//! | **Sources**   | Pull-driven, fallible producers of readings.           | [`Source`], [`SourceFn`], [`FlakySensor`] |
//! | **Consumers** | Receive readings and terminal signals, serialized.     | [`Consumer`], [`ConsumerRef`]             |
//! | **Demand**    | Request-n backpressure, saturation, cancellation.      | [`Subscription`], [`SubscriptionState`]   |
//! | **Errors**    | Typed fetch failures that terminate streams.           | [`FetchError`]                            |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in `LogConsumer` _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use async_trait::async_trait;
//! use pullstream::{Consumer, FetchError, FlakySensor, Reading, Subscription};
//!
//! struct Printer;
//!
//! #[async_trait]
//! impl Consumer for Printer {
//!     async fn on_subscribe(&self, subscription: Subscription) {
//!         // Ask for a batch up front; readings still arrive one at a time.
//!         subscription.request(10);
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
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let subscription = Subscription::attach(
//!         FlakySensor::arc(0.1),
//!         "seoul",
//!         Arc::new(Printer),
//!     );
//!
//!     // Give the batch a moment to flow, then hang up.
//!     tokio::time::sleep(Duration::from_millis(50)).await;
//!     subscription.cancel();
//! }
//! ```
mod consumers;
mod error;
mod sensors;
mod stream;

// ---- Public re-exports ----

pub use consumers::{Consumer, ConsumerRef};
pub use error::FetchError;
pub use sensors::{FlakySensor, Reading, Source, SourceFn, SourceRef};
pub use stream::{Subscription, SubscriptionState};

// Optional: expose a simple built-in logging consumer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use consumers::LogConsumer;

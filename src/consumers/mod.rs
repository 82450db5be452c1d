//! # Stream consumers.
//!
//! This module provides the receiving side of a stream:
//! - [`Consumer`] - trait for handling subscription signals
//! - [`ConsumerRef`] - shared reference to a consumer (`Arc<dyn Consumer>`)
//! - [`LogConsumer`] - built-in stdout consumer (requires the `logging` feature)
//!
//! ## Signal flow
//! ```text
//! Subscription::attach ──► on_subscribe(Subscription)     exactly once, first
//!                     ┌──► on_next(Reading)               once per unit of demand
//! emitter task ───────┤
//!                     └──► on_error(FetchError)           terminal, at most one
//!                          on_complete()                  terminal, at most one
//! ```
//!
//! Callbacks of one consumer are never run concurrently: the emitter delivers
//! every signal from a single task, in order.

mod consumer;
#[cfg(feature = "logging")]
mod log;

pub use consumer::{Consumer, ConsumerRef};
#[cfg(feature = "logging")]
pub use log::LogConsumer;

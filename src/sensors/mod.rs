//! # Sensor sources and readings.
//!
//! This module provides the producing side of a stream:
//! - [`Reading`] - a single measurement (`subject` + `value`)
//! - [`Source`] - trait for pull-driven, fallible reading producers
//! - [`SourceRef`] - shared reference to a source (`Arc<dyn Source>`)
//! - [`SourceFn`] - closure-based source implementation
//! - [`FlakySensor`] - built-in random source with fault injection
//!
//! ## Pull model
//! ```text
//! Subscription emitter ── fetch(subject) ──► Source
//!                                              │
//!                                     ┌────────┴────────┐
//!                                     ▼                 ▼
//!                              Ok(Reading)        Err(FetchError)
//!                              → on_next          → on_error, stream ends
//! ```
//!
//! Sources never push: a fetch happens only when a consumer has signaled
//! demand, and at most one fetch per subscription is in flight at a time.

mod flaky;
mod reading;
mod source;
mod source_fn;

pub use flaky::FlakySensor;
pub use reading::Reading;
pub use source::{Source, SourceRef};
pub use source_fn::SourceFn;

//! # Stream engine: subscription handle, lifecycle, and emission.
//!
//! This module wires sources to consumers:
//! - [`Subscription`] - cloneable demand-side handle, created by
//!   [`Subscription::attach`]
//! - [`SubscriptionState`] - public lifecycle (`Active` / `Cancelled` /
//!   `Terminated`)
//! - an internal per-subscription emitter task that draws demand, pulls
//!   readings, and delivers every signal serially
//!
//! ## Wiring
//! ```text
//! attach(source, subject, consumer)
//!    │
//!    ├─ shared ledger: Mutex<{demand, state}> + wake: Notify
//!    │        ▲                       ▲
//!    │   request(n)/cancel()     notified() when parked
//!    │   (any handle clone)          │
//!    └─ spawns ── emitter task: draw ─► fetch ─► deliver, one at a time
//! ```

mod emitter;
mod state;
mod subscription;

pub use state::SubscriptionState;
pub use subscription::Subscription;

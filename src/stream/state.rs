//! # Subscription lifecycle and demand accounting.
//!
//! [`SubscriptionState`] is the public lifecycle of a stream; [`Ledger`] is
//! the private book the emitter and the [`Subscription`](crate::Subscription)
//! handle share. Every rule of the protocol that needs atomicity lives here,
//! behind one mutex in the subscription:
//! - demand only accumulates while the stream is `Active`,
//! - one unit of demand buys exactly one fetch,
//! - `Cancelled` and `Terminated` are one-way exits.
//!
//! ## Lifecycle
//! ```text
//! Active ──┬── cancel() ─────────► Cancelled
//!          └── source failure ───► Terminated
//! ```

/// Lifecycle state of a subscription.
///
/// Starts at `Active`; moves at most once, to `Cancelled` (consumer gave up)
/// or `Terminated` (source failed). A subscription never leaves a terminal
/// state, and no signal is delivered from one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionState {
    /// Readings flow while demand is available.
    Active,
    /// The consumer side called `cancel()`.
    Cancelled,
    /// A fetch failed; `on_error` was (or is being) delivered.
    Terminated,
}

impl SubscriptionState {
    /// True while the stream can still deliver readings.
    pub fn is_active(&self) -> bool {
        matches!(self, SubscriptionState::Active)
    }

    /// True once the stream has ended, for either reason.
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }
}

/// What the emitter should do next, decided in one atomic step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// One unit of demand was drawn; go fetch a reading.
    Pull,
    /// Active but no demand; wait for a `request()` or `cancel()`.
    Park,
    /// The stream has ended; exit the emission loop.
    Stop,
}

/// Demand and state bookkeeping for one subscription.
///
/// Not a synchronization primitive itself: the subscription wraps it in a
/// mutex, and every method here runs under that lock. The lock is never held
/// across a fetch or a consumer callback.
#[derive(Debug)]
pub(crate) struct Ledger {
    demand: u64,
    state: SubscriptionState,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self {
            demand: 0,
            state: SubscriptionState::Active,
        }
    }

    /// Adds `n` units of demand.
    ///
    /// Saturates at `u64::MAX`, which the protocol treats as effectively
    /// unbounded. Returns `true` if the request was accepted and the emitter
    /// should be woken; `n == 0` and requests against an ended stream are
    /// no-ops.
    pub(crate) fn request(&mut self, n: u64) -> bool {
        if n == 0 || !self.state.is_active() {
            return false;
        }
        self.demand = self.demand.saturating_add(n);
        true
    }

    /// Moves `Active` to `Cancelled` and discards outstanding demand.
    ///
    /// Returns `true` only on the transition; repeated cancels and cancels
    /// after a failure are no-ops.
    pub(crate) fn cancel(&mut self) -> bool {
        if !self.state.is_active() {
            return false;
        }
        self.state = SubscriptionState::Cancelled;
        self.demand = 0;
        true
    }

    /// Moves `Active` to `Terminated` and discards outstanding demand.
    ///
    /// Returns `true` only on the transition. A `false` here means the stream
    /// ended some other way first and the failure must be suppressed.
    pub(crate) fn terminate(&mut self) -> bool {
        if !self.state.is_active() {
            return false;
        }
        self.state = SubscriptionState::Terminated;
        self.demand = 0;
        true
    }

    /// Draws one unit of demand, or reports why none can be drawn.
    pub(crate) fn draw(&mut self) -> Step {
        if !self.state.is_active() {
            return Step::Stop;
        }
        if self.demand == 0 {
            return Step::Park;
        }
        self.demand -= 1;
        Step::Pull
    }

    pub(crate) fn demand(&self) -> u64 {
        self.demand
    }

    pub(crate) fn state(&self) -> SubscriptionState {
        self.state
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accumulates_demand() {
        let mut ledger = Ledger::new();
        assert!(ledger.request(3), "first request must be accepted");
        assert!(ledger.request(2), "second request must be accepted");
        assert_eq!(ledger.demand(), 5, "demand must accumulate across requests");
    }

    #[test]
    fn test_request_zero_is_noop() {
        let mut ledger = Ledger::new();
        assert!(!ledger.request(0), "request(0) must not wake the emitter");
        assert_eq!(ledger.demand(), 0);
        assert!(ledger.state().is_active(), "request(0) must not end the stream");
    }

    #[test]
    fn test_request_saturates_instead_of_overflowing() {
        let mut ledger = Ledger::new();
        assert!(ledger.request(u64::MAX));
        assert!(ledger.request(10), "requests at the ceiling are still accepted");
        assert_eq!(ledger.demand(), u64::MAX, "demand must saturate at u64::MAX");
    }

    #[test]
    fn test_request_after_cancel_is_rejected() {
        let mut ledger = Ledger::new();
        assert!(ledger.cancel());
        assert!(!ledger.request(5), "cancelled stream must reject demand");
        assert_eq!(ledger.demand(), 0);
    }

    #[test]
    fn test_draw_consumes_one_unit_per_pull() {
        let mut ledger = Ledger::new();
        ledger.request(2);
        assert_eq!(ledger.draw(), Step::Pull);
        assert_eq!(ledger.draw(), Step::Pull);
        assert_eq!(ledger.draw(), Step::Park, "exhausted demand must park");
        assert_eq!(ledger.demand(), 0);
    }

    #[test]
    fn test_draw_stops_after_cancel() {
        let mut ledger = Ledger::new();
        ledger.request(5);
        ledger.cancel();
        assert_eq!(ledger.draw(), Step::Stop, "cancel must stop the loop even with demand");
    }

    #[test]
    fn test_cancel_discards_outstanding_demand() {
        let mut ledger = Ledger::new();
        ledger.request(7);
        assert!(ledger.cancel());
        assert_eq!(ledger.demand(), 0, "cancel must discard unfilled demand");
        assert_eq!(ledger.state(), SubscriptionState::Cancelled);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut ledger = Ledger::new();
        assert!(ledger.cancel(), "first cancel transitions");
        assert!(!ledger.cancel(), "second cancel must be a no-op");
        assert_eq!(ledger.state(), SubscriptionState::Cancelled);
    }

    #[test]
    fn test_terminate_wins_only_from_active() {
        let mut ledger = Ledger::new();
        assert!(ledger.terminate(), "active stream terminates");
        assert!(!ledger.terminate(), "repeated terminate must be a no-op");
        assert_eq!(ledger.state(), SubscriptionState::Terminated);
    }

    #[test]
    fn test_terminal_states_are_one_way() {
        let mut cancelled = Ledger::new();
        cancelled.cancel();
        assert!(!cancelled.terminate(), "cancelled stream must not terminate");
        assert_eq!(cancelled.state(), SubscriptionState::Cancelled);

        let mut terminated = Ledger::new();
        terminated.terminate();
        assert!(!terminated.cancel(), "terminated stream must not cancel");
        assert_eq!(terminated.state(), SubscriptionState::Terminated);
    }

    #[test]
    fn test_state_helpers() {
        assert!(SubscriptionState::Active.is_active());
        assert!(!SubscriptionState::Active.is_terminal());
        assert!(SubscriptionState::Cancelled.is_terminal());
        assert!(SubscriptionState::Terminated.is_terminal());
    }
}

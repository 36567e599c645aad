//! Dispatch observer trait for reporting and data collection.

use pd_core::Minute;

use crate::{Decision, RunSummary};

/// Callbacks invoked by [`Dispatcher::run`][crate::Dispatcher::run] and
/// [`Dispatcher::step`][crate::Dispatcher::step].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers see every decision, even
/// ones a bounded [`DecisionLog`][crate::DecisionLog] later drops.
///
/// # Example — failure counter
///
/// ```rust,ignore
/// struct FailureCounter(usize);
///
/// impl DispatchObserver for FailureCounter {
///     fn on_decision(&mut self, decision: &Decision) {
///         if matches!(decision, Decision::Failed { .. }) {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// Called once before the first iteration of [`run`][crate::Dispatcher::run].
    fn on_run_start(&mut self, _start: Minute) {}

    /// Called for each decision, in order, as it is made.
    fn on_decision(&mut self, _decision: &Decision) {}

    /// Called at the end of each loop iteration with the clock and the
    /// number of parcels and availability events still pending.
    fn on_iteration_end(&mut self, _now: Minute, _pending_parcels: usize, _pending_events: usize) {}

    /// Called once after the run reaches its terminal state.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}

/// Collects every decision, unbounded.
impl DispatchObserver for Vec<Decision> {
    fn on_decision(&mut self, decision: &Decision) {
        self.push(decision.clone());
    }
}

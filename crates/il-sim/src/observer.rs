//! Observer hooks for progress reporting and data collection.

use il_arbiter::{CycleReport, Interlocking};
use il_core::Cycle;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// cycle loop.
///
/// All methods default to no-ops so implementors only override what they
/// need.
pub trait SimObserver {
    /// Called before the intent phase of each cycle.
    fn on_cycle_start(&mut self, _cycle: Cycle) {}

    /// Called after the cycle's batch has been resolved and committed.
    fn on_cycle_end(&mut self, _cycle: Cycle, _report: &CycleReport) {}

    /// Called every `config.output_interval_cycles` cycles, after
    /// `on_cycle_end`, with the post-commit network.
    fn on_snapshot(&mut self, _cycle: Cycle, _interlocking: &Interlocking) {}

    /// Called once when [`Sim::run`][crate::Sim::run] finishes.
    fn on_sim_end(&mut self, _final_cycle: Cycle) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

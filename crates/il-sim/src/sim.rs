//! The `Sim` struct and its cycle loop.

use il_arbiter::{CycleReport, IntentBatch, Interlocking};
use il_core::{Cycle, CycleClock, RunConfig, Section, TrainClass, TrainId};

use crate::{CycleContext, Dispatcher, SimObserver, SimResult, TrainRngs};

/// The multi-cycle runner.
///
/// Each cycle collects one intent per active train from the dispatcher,
/// resolves the batch on the interlocking and reports to the observer.
/// Departed trains are no longer asked for intents.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<D: Dispatcher> {
    pub config: RunConfig,

    pub clock: CycleClock,

    /// The network under control.  Only mutated by `resolve_cycle` and
    /// `register_train`.
    pub interlocking: Interlocking,

    /// Per-train RNGs, separate from the interlocking for the split borrow
    /// in the intent phase.
    pub rngs: TrainRngs,

    pub dispatcher: D,
}

impl<D: Dispatcher> Sim<D> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current cycle to `config.end_cycle()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current < self.config.end_cycle() {
            self.step(observer);
        }
        observer.on_sim_end(self.clock.current);
        tracing::info!(
            cycles = self.clock.current.0,
            trains = self.interlocking.registry().len(),
            "run finished"
        );
        Ok(())
    }

    /// Run exactly `n` cycles from the current position, ignoring
    /// `end_cycle`.
    pub fn run_cycles<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer);
        }
        Ok(())
    }

    /// Add a train mid-run.  It is asked for intents from the next cycle.
    pub fn register_train(
        &mut self,
        train: TrainId,
        class: TrainClass,
        start: impl Into<Section>,
    ) -> SimResult<()> {
        self.interlocking.register_train(train, class, start)?;
        self.rngs.ensure(train);
        Ok(())
    }

    // ── Cycle processing ──────────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current;
        observer.on_cycle_start(now);

        let report = self.process_cycle(now);
        observer.on_cycle_end(now, &report);

        let interval = self.config.output_interval_cycles;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.interlocking);
        }
        self.clock.advance();
    }

    fn process_cycle(&mut self, now: Cycle) -> CycleReport {
        let batch = self.collect_intents(now);
        let report = self.interlocking.resolve_cycle(&batch);

        let s = report.summary();
        tracing::info!(
            cycle = %now,
            intents = batch.len(),
            moved = s.moved,
            blocked = s.blocked,
            collision = s.collision,
            deadlock_local = s.deadlock_local,
            "cycle resolved"
        );
        report
    }

    /// Ask the dispatcher for every train still on the network.
    ///
    /// Read-only with respect to the interlocking.  With the `parallel`
    /// feature the dispatcher calls run on Rayon's pool; collection keeps
    /// `TrainId` order so the batch is identical either way.
    fn collect_intents(&mut self, now: Cycle) -> IntentBatch {
        let net        = &self.interlocking;
        let dispatcher = &self.dispatcher;
        let ctx = CycleContext::new(now, net.topology(), net.registry(), net.occupancy());
        let entries = self.rngs.entries_mut();

        let on_network =
            |train: TrainId| ctx.position_of(train).is_some_and(|p| !p.is_departed());

        #[cfg(not(feature = "parallel"))]
        let proposals: Vec<(TrainId, Section)> = entries
            .iter_mut()
            .filter(|(train, _)| on_network(*train))
            .filter_map(|(train, rng)| dispatcher.propose(*train, &ctx, rng).map(|to| (*train, to)))
            .collect();

        #[cfg(feature = "parallel")]
        let proposals: Vec<(TrainId, Section)> = {
            use rayon::prelude::*;
            entries
                .par_iter_mut()
                .filter(|(train, _)| on_network(*train))
                .filter_map(|(train, rng)| dispatcher.propose(*train, &ctx, rng).map(|to| (*train, to)))
                .collect()
        };

        proposals.into_iter().collect()
    }
}

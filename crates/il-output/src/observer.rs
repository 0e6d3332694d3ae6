//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use il_arbiter::{CycleReport, Interlocking};
use il_core::{Cycle, Section};
use il_sim::SimObserver;

use crate::row::{OutcomeRow, PositionRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes outcomes, summaries and position snapshots
/// to any [`OutputWriter`].
///
/// `SimObserver` hooks cannot fail, so the first writer error is kept and
/// later writes are still attempted.  Check [`take_error`][Self::take_error]
/// after `sim.run()` returns.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "output write failed");
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_cycle_end(&mut self, cycle: Cycle, report: &CycleReport) {
        let rows: Vec<OutcomeRow> = report
            .iter()
            .map(|(train, outcome)| OutcomeRow { cycle: cycle.0, train_id: train.0, outcome })
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_outcomes(&rows);
            self.store_err(result);
        }

        let result = self.writer.write_summary(&SummaryRow::new(cycle.0, report.summary()));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, cycle: Cycle, net: &Interlocking) {
        let rows: Vec<PositionRow> = net
            .registry()
            .iter()
            .map(|(train, record)| PositionRow {
                cycle:    cycle.0,
                train_id: train.0,
                section:  match record.position {
                    Section::Track(id) => net
                        .topology()
                        .name_of(id)
                        .map_or_else(|| id.to_string(), str::to_owned),
                    Section::Departed => Section::Departed.to_string(),
                },
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_positions(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_cycle: Cycle) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

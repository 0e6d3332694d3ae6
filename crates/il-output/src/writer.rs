//! The `OutputWriter` trait implemented by output backends.

use crate::{OutcomeRow, OutputResult, PositionRow, SummaryRow};

/// A sink for per-cycle rows.
///
/// [`SimOutputObserver`][crate::SimOutputObserver] stores the first error it
/// sees instead of interrupting the run.
pub trait OutputWriter {
    fn write_outcomes(&mut self, rows: &[OutcomeRow]) -> OutputResult<()>;

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()>;

    /// Flush all underlying handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

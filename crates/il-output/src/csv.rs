//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `cycle_outcomes.csv`
//! - `cycle_summaries.csv`
//! - `train_positions.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutcomeRow, OutputResult, PositionRow, SummaryRow};

/// Writes cycle output to three CSV files.
pub struct CsvWriter {
    outcomes:  Writer<File>,
    summaries: Writer<File>,
    positions: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three files and write header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut outcomes = Writer::from_path(dir.join("cycle_outcomes.csv"))?;
        outcomes.write_record(["cycle", "train_id", "outcome"])?;

        let mut summaries = Writer::from_path(dir.join("cycle_summaries.csv"))?;
        summaries.write_record(["cycle", "moved", "blocked", "collision", "deadlock_local"])?;

        let mut positions = Writer::from_path(dir.join("train_positions.csv"))?;
        positions.write_record(["cycle", "train_id", "section"])?;

        Ok(Self { outcomes, summaries, positions, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_outcomes(&mut self, rows: &[OutcomeRow]) -> OutputResult<()> {
        for row in rows {
            self.outcomes.write_record(&[
                row.cycle.to_string(),
                row.train_id.to_string(),
                row.outcome.as_str().to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.cycle.to_string(),
            row.moved.to_string(),
            row.blocked.to_string(),
            row.collision.to_string(),
            row.deadlock_local.to_string(),
        ])?;
        Ok(())
    }

    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()> {
        for row in rows {
            self.positions.write_record(&[
                row.cycle.to_string(),
                row.train_id.to_string(),
                row.section.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.outcomes.flush()?;
        self.summaries.flush()?;
        self.positions.flush()?;
        Ok(())
    }
}

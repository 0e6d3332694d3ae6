//! `il-output`: per-cycle output writers for the interlock workspace.
//!
//! | File                  | Columns                                          |
//! |-----------------------|--------------------------------------------------|
//! | `cycle_outcomes.csv`  | `cycle,train_id,outcome`                         |
//! | `cycle_summaries.csv` | `cycle,moved,blocked,collision,deadlock_local`   |
//! | `train_positions.csv` | `cycle,train_id,section`                         |
//!
//! [`CsvWriter`] implements [`OutputWriter`]; [`SimOutputObserver`] drives any
//! writer from `il_sim::SimObserver` hooks.
//!
//! # Usage
//!
//! ```rust,ignore
//! use il_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { return Err(e.into()); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{OutcomeRow, PositionRow, SummaryRow};
pub use writer::OutputWriter;

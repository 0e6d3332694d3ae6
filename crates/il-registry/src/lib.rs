//! `il-registry`: who is where.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`occupancy`] | `OccupancyTable`: section → train-or-free                 |
//! | [`registry`]  | `TrainRegistry`, `TrainRecord`; train admission           |
//! | [`error`]     | `RegistryError`, `RegistryResult<T>`                      |
//!
//! # Consistency
//!
//! The two tables are kept in lock-step: a train's recorded position is the
//! section whose occupancy slot holds its id, and no slot holds more than one
//! train.  The departed marker has no slot.  Both tables are only mutated by
//! [`TrainRegistry::admit`] and by the arbiter's commit pass;
//! [`TrainRegistry::is_consistent_with`] checks the invariant.

pub mod error;
pub mod occupancy;
pub mod registry;


pub use error::{RegistryError, RegistryResult};
pub use occupancy::OccupancyTable;
pub use registry::{TrainRecord, TrainRegistry};

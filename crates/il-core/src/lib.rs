//! `il-core`: foundational types for the `interlock` workspace.
//!
//! This crate is a dependency of every other `il-*` crate.  It has no `il-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `TrainId`, `SectionId`, `PlaceId`, `TransitionId`         |
//! | [`section`] | `Section` (track or departed marker), `TrainClass`        |
//! | [`time`]    | `Cycle`, `CycleClock`, `RunConfig`                        |
//! | [`rng`]     | `TrainRng` (per-train deterministic RNG)                  |
//! | [`error`]   | `IlError`, `IlResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod rng;
pub mod section;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{IlError, IlResult};
pub use ids::{PlaceId, SectionId, TrainId, TransitionId};
pub use rng::TrainRng;
pub use section::{Section, TrainClass};
pub use time::{Cycle, CycleClock, RunConfig};

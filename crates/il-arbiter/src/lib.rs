//! `il-arbiter`: resolves one cycle of movement intents.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                  |
//! |------------------|-----------------------------------------------------------|
//! | [`intent`]       | `IntentBatch`: at most one target per train per cycle     |
//! | [`outcome`]      | `MovementOutcome`, `CycleReport`, `CycleSummary`          |
//! | [`priority`]     | `MovePattern`, `PriorityRule`, `PriorityTable`            |
//! | [`arbiter`]      | `CycleArbiter`: the read-only arbitration passes          |
//! | [`interlocking`] | `Interlocking`: owned network instance + atomic commit    |
//!
//! # Cycle pipeline
//!
//! ```text
//! IntentBatch
//!   ① validate   : drop unknown / departed / unset / non-adjacent intents
//!   ② collisions : mirror swaps A→B, B→A            ⇒ COLLISION
//!   ③ contention : >1 proposer for one target        ⇒ DEADLOCK_LOCAL / BLOCKED
//!   ④ priority   : yielding pattern vs. preempting   ⇒ BLOCKED
//!   ⑤ occupancy  : target held in pre-cycle snapshot ⇒ DEADLOCK_LOCAL
//!   ⑥ commit     : every survivor moves together     ⇒ MOVED
//! ```
//!
//! Steps ①–⑤ only read the network; ⑥ is the single write, applied while
//! `Interlocking` is exclusively borrowed.  Callers driving cycles from more
//! than one thread must serialise whole calls to
//! [`Interlocking::resolve_cycle`] (see `il_sim::SharedInterlocking`).
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash for the contention-group index.                   |

pub mod arbiter;
pub mod intent;
pub mod interlocking;
pub mod outcome;
pub mod priority;


#[cfg(test)]
mod property_tests;

pub use arbiter::{CycleArbiter, ProposedMove, Resolution};
pub use intent::IntentBatch;
pub use interlocking::Interlocking;
pub use outcome::{CycleReport, CycleSummary, MovementOutcome};
pub use priority::{MovePattern, PriorityRule, PriorityTable};

pub use il_registry::{RegistryError, RegistryResult};

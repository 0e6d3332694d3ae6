//! Plain data row types written by output backends.

use il_arbiter::{CycleSummary, MovementOutcome};

/// One train's outcome in one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeRow {
    pub cycle:    u64,
    pub train_id: u32,
    pub outcome:  MovementOutcome,
}

/// Outcome counts for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryRow {
    pub cycle:          u64,
    pub moved:          u64,
    pub blocked:        u64,
    pub collision:      u64,
    pub deadlock_local: u64,
}

impl SummaryRow {
    pub fn new(cycle: u64, s: CycleSummary) -> Self {
        Self {
            cycle,
            moved:          s.moved,
            blocked:        s.blocked,
            collision:      s.collision,
            deadlock_local: s.deadlock_local,
        }
    }
}

/// Where one train stands after a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionRow {
    pub cycle:    u64,
    pub train_id: u32,
    /// Section name from the topology, or `DEPARTED`.
    pub section:  String,
}

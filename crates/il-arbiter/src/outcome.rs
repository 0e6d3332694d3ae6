//! Per-train outcomes and the per-cycle report.

use std::collections::BTreeMap;
use std::fmt;

use il_core::TrainId;

/// How the arbiter resolved one train's valid intent.
///
/// Conflicts are ordinary operating conditions, so every variant other than
/// `Moved` is a normal result rather than an error.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum MovementOutcome {
    /// The move was committed.
    Moved,
    /// A higher-priority train took precedence.
    Blocked,
    /// Head-on swap with another train.
    Collision,
    /// Symmetric contention, or the target was held at cycle start.
    DeadlockLocal,
}

impl MovementOutcome {
    #[inline]
    pub fn is_committed(self) -> bool {
        matches!(self, MovementOutcome::Moved)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MovementOutcome::Moved         => "MOVED",
            MovementOutcome::Blocked       => "BLOCKED",
            MovementOutcome::Collision     => "COLLISION",
            MovementOutcome::DeadlockLocal => "DEADLOCK_LOCAL",
        }
    }
}

impl fmt::Display for MovementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome counts for one cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleSummary {
    pub moved:          u64,
    pub blocked:        u64,
    pub collision:      u64,
    pub deadlock_local: u64,
}

impl CycleSummary {
    pub fn total(&self) -> u64 {
        self.moved + self.blocked + self.collision + self.deadlock_local
    }
}

/// The result of one [`Interlocking::resolve_cycle`][crate::Interlocking::resolve_cycle].
///
/// Holds an entry **only** for trains whose intent passed validation.  Do
/// not assume every submitted train id appears here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleReport {
    outcomes: BTreeMap<TrainId, MovementOutcome>,
}

impl CycleReport {
    pub(crate) fn new(outcomes: BTreeMap<TrainId, MovementOutcome>) -> Self {
        Self { outcomes }
    }

    #[inline]
    pub fn get(&self, train: TrainId) -> Option<MovementOutcome> {
        self.outcomes.get(&train).copied()
    }

    pub fn contains(&self, train: TrainId) -> bool {
        self.outcomes.contains_key(&train)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Entries in ascending `TrainId` order.
    pub fn iter(&self) -> impl Iterator<Item = (TrainId, MovementOutcome)> + '_ {
        self.outcomes.iter().map(|(&t, &o)| (t, o))
    }

    pub fn summary(&self) -> CycleSummary {
        let mut s = CycleSummary::default();
        for outcome in self.outcomes.values() {
            match outcome {
                MovementOutcome::Moved         => s.moved += 1,
                MovementOutcome::Blocked       => s.blocked += 1,
                MovementOutcome::Collision     => s.collision += 1,
                MovementOutcome::DeadlockLocal => s.deadlock_local += 1,
            }
        }
        s
    }
}

//! Discrete cycle counter and run configuration.
//!
//! The interlocking advances in whole cycles.  One cycle consumes exactly one
//! intent batch; there is no sub-cycle time and no wall-clock mapping.

use std::fmt;

use crate::{IlError, IlResult};

// ── Cycle ─────────────────────────────────────────────────────────────────────

/// An absolute cycle counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cycle(pub u64);

impl Cycle {
    pub const ZERO: Cycle = Cycle(0);

    /// Return the cycle `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Cycle {
        Cycle(self.0 + n)
    }
}

impl std::ops::Add<u64> for Cycle {
    type Output = Cycle;
    #[inline]
    fn add(self, rhs: u64) -> Cycle {
        Cycle(self.0 + rhs)
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

// ── CycleClock ────────────────────────────────────────────────────────────────

/// Tracks the current cycle of a run.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleClock {
    /// The current cycle: advanced by `CycleClock::advance()` each iteration.
    pub current: Cycle,
}

impl CycleClock {
    pub fn new() -> Self {
        Self { current: Cycle::ZERO }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current = self.current + 1;
    }
}

impl fmt::Display for CycleClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current)
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration for a multi-cycle run.
///
/// Typically built by the application crate and passed to the cycle driver.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Total cycles to resolve.
    pub total_cycles: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Report a position snapshot every N cycles.  0 disables snapshots.
    pub output_interval_cycles: u64,
}

impl RunConfig {
    /// The cycle at which the run ends (exclusive upper bound).
    #[inline]
    pub fn end_cycle(&self) -> Cycle {
        Cycle(self.total_cycles)
    }

    /// Construct a clock positioned at cycle 0.
    pub fn make_clock(&self) -> CycleClock {
        CycleClock::new()
    }

    /// Reject configurations that cannot drive a run.
    pub fn validate(&self) -> IlResult<()> {
        if self.total_cycles == 0 {
            return Err(IlError::Config("total_cycles must be at least 1".into()));
        }
        if self.output_interval_cycles > self.total_cycles {
            return Err(IlError::Config(format!(
                "output_interval_cycles {} exceeds total_cycles {}",
                self.output_interval_cycles, self.total_cycles,
            )));
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            total_cycles:           100,
            seed:                   42,
            output_interval_cycles: 1,
        }
    }
}

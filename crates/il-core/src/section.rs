//! Section and train-class enums shared by every crate in the workspace.

use std::fmt;
use std::str::FromStr;

use crate::{IlError, SectionId};

// ── Section ───────────────────────────────────────────────────────────────────

/// A place a train can be: a real track section, or the virtual terminal
/// marker for trains that have left the network.
///
/// `Departed` is never occupied and never the source of a legal move.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Section {
    /// A real track section, the unit of exclusive occupancy.
    Track(SectionId),
    /// The train has departed the network.  Absorbing.
    Departed,
}

impl Section {
    #[inline]
    pub fn is_departed(self) -> bool {
        matches!(self, Section::Departed)
    }

    /// The underlying section id, or `None` for the terminal marker.
    #[inline]
    pub fn track(self) -> Option<SectionId> {
        match self {
            Section::Track(id) => Some(id),
            Section::Departed  => None,
        }
    }
}

impl From<SectionId> for Section {
    #[inline]
    fn from(id: SectionId) -> Self {
        Section::Track(id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Track(id) => write!(f, "{id}"),
            Section::Departed  => f.write_str("DEPARTED"),
        }
    }
}

// ── TrainClass ────────────────────────────────────────────────────────────────

/// The two train categories.  `Passenger` has right of way over `Freight`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrainClass {
    Passenger,
    Freight,
}

impl TrainClass {
    /// `true` for the high-priority class.
    #[inline]
    pub fn is_priority(self) -> bool {
        matches!(self, TrainClass::Passenger)
    }

    /// Lower-case label, used for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            TrainClass::Passenger => "passenger",
            TrainClass::Freight   => "freight",
        }
    }
}

impl fmt::Display for TrainClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainClass {
    type Err = IlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "passenger" | "p" => Ok(TrainClass::Passenger),
            "freight"   | "f" => Ok(TrainClass::Freight),
            other => Err(IlError::Parse(format!("unknown train class {other:?}"))),
        }
    }
}

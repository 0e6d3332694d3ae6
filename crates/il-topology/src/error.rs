//! Topology error type.

use thiserror::Error;

use il_core::SectionId;

/// Errors produced while building or loading a topology.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("section name {0:?} declared twice")]
    DuplicateSection(String),

    #[error("link references undeclared section {0}")]
    SectionNotFound(SectionId),

    #[error("section table full ({0} sections)")]
    TooManySections(usize),

    #[error("topology parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TopologyResult<T> = Result<T, TopologyError>;

use il_core::{SectionId, TrainId};
use thiserror::Error;

/// Registration and lookup failures.
///
/// Registration errors are set-up precondition violations: the caller should
/// abort rather than retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("section {section} is already occupied by {occupant}")]
    SectionBusy { section: SectionId, occupant: TrainId },

    #[error("train {0} is already registered")]
    DuplicateTrain(TrainId),

    #[error("section {0} is not part of the topology")]
    UnknownSection(SectionId),

    #[error("train {0} is not registered")]
    UnknownTrain(TrainId),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

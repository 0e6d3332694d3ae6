use il_core::{PlaceId, TransitionId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PetriError {
    #[error("transition {0} is not enabled")]
    NotEnabled(TransitionId),

    #[error("unknown transition {0}")]
    UnknownTransition(TransitionId),

    #[error("unknown place {0}")]
    UnknownPlace(PlaceId),
}

pub type PetriResult<T> = Result<T, PetriError>;

use il_core::IlError;
use il_registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] IlError),

    #[error("train registration failed: {0}")]
    Registry(#[from] RegistryError),

    #[error("interlocking lock poisoned by a panicked holder")]
    Poisoned,
}

pub type SimResult<T> = Result<T, SimError>;

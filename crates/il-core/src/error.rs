//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `IlError` where a core
//! failure can surface through them.

use thiserror::Error;

/// The top-level error type for `il-core`.
#[derive(Debug, Error)]
pub enum IlError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `il-core`.
pub type IlResult<T> = Result<T, IlError>;

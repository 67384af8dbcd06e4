//! Shared error type across weblab crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, WeblabError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum WeblabError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("telemetry unavailable: {0}")]
    Telemetry(String),
    #[error("internal: {0}")]
    Internal(String),
}

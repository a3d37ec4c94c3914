// crates/parkdb-core/src/error.rs
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ParkDbError>;

/// Errors surfaced by the loaders.
///
/// The transform pipeline itself never fails: malformed rows degrade to
/// default field values and bad numerics become `None`. Only the physical
/// layer (missing files, undecodable JSON) produces errors, and a failed
/// load means the dashboard does not initialize.
#[derive(Debug, Error)]
pub enum ParkDbError {
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[cfg(feature = "fetch")]
    #[error("download failed: {0}")]
    Fetch(String),
}

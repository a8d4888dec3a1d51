//! Store error types

use thiserror::Error;

/// Errors surfaced by storage backends.
///
/// Only operations the store does not swallow (key listing, namespace
/// purge, backend construction) return these; the load/save paths degrade
/// to defaults instead.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying storage I/O failed
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be serialized
    #[error("config serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

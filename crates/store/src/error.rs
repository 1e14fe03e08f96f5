//! Storage-layer error model.

use thiserror::Error;

use rasoi_core::DomainError;

/// Result type used across the storage layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while persisting or reading durable state. Always local to the
/// operation that raised it; previously persisted state is untouched.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A storage location or file could not be created, opened, or written.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A domain rule was violated at the storage boundary.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

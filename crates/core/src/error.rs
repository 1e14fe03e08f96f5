//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// uniqueness, capacity). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An item code is already present in the catalog.
    #[error("duplicate item code: {0}")]
    DuplicateCode(String),

    /// A requested item code was not found.
    #[error("item code not found: {0}")]
    NotFound(String),

    /// A bounded collection would exceed its fixed limit.
    #[error("{what} capacity exceeded (limit {limit})")]
    CapacityExceeded { what: &'static str, limit: usize },

    /// A persisted record could not be parsed.
    #[error("parse failed: {0}")]
    Parse(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate_code(code: impl Into<String>) -> Self {
        Self::DuplicateCode(code.into())
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound(code.into())
    }

    pub fn capacity(what: &'static str, limit: usize) -> Self {
        Self::CapacityExceeded { what, limit }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

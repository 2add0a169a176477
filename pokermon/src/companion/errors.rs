//! Companion error types.

use thiserror::Error;

/// Result type for companion operations
pub type CompanionResult<T> = Result<T, CompanionError>;

/// Companion construction and catalog errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompanionError {
    /// Name is empty or whitespace
    #[error("Companion name cannot be empty")]
    EmptyName,

    /// Health must be positive
    #[error("Companion health must be greater than zero")]
    InvalidHealth,

    /// Name already present in the catalog
    #[error("Duplicate companion: {0}")]
    Duplicate(String),
}

//! Error types for the AI module.

use thiserror::Error;

/// Result type for betting decisions
pub type DecisionResult<T> = Result<T, DecisionError>;

/// Betting decision errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecisionError {
    /// An AI bet was requested for a human-controlled player
    #[error("Cannot calculate AI bet for human player {0}")]
    HumanPlayer(String),
}

/// Result type for personality table operations
pub type PersonalityResult<T> = Result<T, PersonalityError>;

/// Personality table errors
#[derive(Debug, Error)]
pub enum PersonalityError {
    /// Preset data could not be parsed
    #[error("Invalid personality data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Preset name is empty
    #[error("Personality name cannot be empty")]
    EmptyName,

    /// Preset name already exists in the table
    #[error("Duplicate personality: {0}")]
    Duplicate(String),
}

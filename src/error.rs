//! Custom error types for the budget planner
//!
//! `PlannerError` covers failures at the edges of the application (config
//! files, action files, the terminal). `ValidationError` carries the
//! user-facing messages produced by the entry forms before anything is
//! dispatched to the store.

use thiserror::Error;

use crate::models::Category;

/// The main error type for budget planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A tagged action record that could not be decoded
    #[error("Invalid {kind} action: {reason}")]
    Action { kind: String, reason: String },

    /// A line of an action file that could not be decoded
    #[error("Action file line {line}: {source}")]
    Replay {
        line: usize,
        #[source]
        source: Box<PlannerError>,
    },

    /// Form validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl PlannerError {
    /// Create an error for an action record with a bad payload
    pub fn invalid_action(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Action {
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<ValidationError> for PlannerError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for budget planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;

/// A single field-level validation failure, displayed verbatim to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Category cannot be left empty")]
    EmptyCategory,

    #[error("Category must be one of: {}", Category::labels().join(", "))]
    UnknownCategory(String),

    #[error("Cost cannot be left empty")]
    InvalidCost,

    #[error("Cost cannot be negative")]
    NegativeCost,

    #[error("Date cannot be left empty")]
    EmptyDate,

    #[error("Date must be a valid date (YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid budget amount. Please enter a valid number.")]
    InvalidBudget,
}

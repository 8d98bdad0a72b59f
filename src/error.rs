//! Custom error types for TrainPlan
//!
//! This module provides a unified error type that can be used throughout
//! the application and is compatible with Tauri's command error handling.

use thiserror::Error;

/// Main error type for TrainPlan operations
#[derive(Error, Debug)]
pub enum TrainPlanError {
    /// Schema initialization failed at startup
    #[error("Schema error: {0}")]
    Schema(String),

    /// A write violated a foreign-key or not-null constraint
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Other database-related errors
    #[error("Database error: {0}")]
    Database(rusqlite::Error),

    /// IO-related errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The cross-process call itself failed (marshalling, response shape)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// General errors with a message
    #[error("{0}")]
    General(String),
}

impl TrainPlanError {
    /// Create a schema error
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// True when this error came from a foreign-key or not-null violation
    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }
}

/// Constraint violations get their own variant so callers can tell a bad
/// parent id apart from an unreachable store.
impl From<rusqlite::Error> for TrainPlanError {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(e, _) = &err {
            if e.code == rusqlite::ErrorCode::ConstraintViolation {
                return Self::Constraint(err.to_string());
            }
        }
        Self::Database(err)
    }
}

/// Convert TrainPlanError to String for Tauri command compatibility
impl From<TrainPlanError> for String {
    fn from(err: TrainPlanError) -> Self {
        err.to_string()
    }
}

/// Convert String errors to TrainPlanError
impl From<String> for TrainPlanError {
    fn from(s: String) -> Self {
        Self::General(s)
    }
}

/// Convert &str errors to TrainPlanError
impl From<&str> for TrainPlanError {
    fn from(s: &str) -> Self {
        Self::General(s.to_string())
    }
}

/// Result type alias using TrainPlanError
pub type Result<T> = std::result::Result<T, TrainPlanError>;

/// Serialize TrainPlanError for Tauri
impl serde::Serialize for TrainPlanError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

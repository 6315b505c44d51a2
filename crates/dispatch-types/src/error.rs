//! Error types for dispatch-board

use thiserror::Error;

/// Presence-check failures on entity creation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Trucker name must not be empty")]
    EmptyTruckerName,

    #[error("Payload description must not be empty")]
    EmptyPayloadDescription,
}

/// Mutations rejected by the current assignment state
#[derive(Debug, Error)]
pub enum ConflictError {
    #[error("Trucker {0} has an active assignment, unassign first")]
    TruckerHasActiveAssignment(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[allow(dead_code)]
    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Conflict: {0}")]
    Conflict(#[from] ConflictError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;

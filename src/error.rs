use thiserror::Error;

use crate::domain::lineup::LineupError;

/// Main error type for the backend
#[derive(Error, Debug)]
pub enum PavilionError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Database errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Batting order errors
    #[error("Batting order error: {0}")]
    Lineup(#[from] LineupError),

    // Lookup errors
    #[error("{0} not found")]
    NotFound(String),

    // Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for PavilionError
pub type Result<T> = std::result::Result<T, PavilionError>;

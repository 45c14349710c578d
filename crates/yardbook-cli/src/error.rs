//! Error types for the CLI application.

use thiserror::Error;
use yardbook_janitor::JanitorError;
use yardbook_lifecycle::LifecycleError;
use yardbook_range::RangeError;
use yardbook_store::StoreError;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Club, shot-type, profile or settings rule violated
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError<StoreError>),

    /// Range session error
    #[error(transparent)]
    Range(#[from] RangeError<StoreError>),

    /// Maintenance error
    #[error(transparent)]
    Janitor(#[from] JanitorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Referenced club, shot type or session does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

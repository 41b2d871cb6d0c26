//! Error types for dispatch-checker

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Fleet file errors
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("Failed to read fleet file: {0}")]
    Read(String),

    #[error("Failed to parse fleet file: {0}")]
    Parse(String),

    #[error("Duplicate {section} id: {id}")]
    DuplicateId { section: &'static str, id: String },

    #[error("Unknown {kind}: {id}")]
    UnknownEntity { kind: &'static str, id: String },
}

/// Rejected calculator input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("profit_margin must be at least 1.0 so revenue covers cost (got {value})")]
    MarginBelowCost { value: f64 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fleet error: {0}")]
    Fleet(#[from] FleetError),

    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

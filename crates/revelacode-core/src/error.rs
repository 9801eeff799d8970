//! Error types for RevelaCode.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Caller input is malformed or a required field is missing.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// The remote scripture source failed or returned nothing usable.
    #[error("External verse fetch failed: {0}")]
    ExternalFetch(String),

    /// A stored entity cannot be resolved as configured.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, Error>;

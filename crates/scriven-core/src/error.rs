//! Error types for Scriven

use thiserror::Error;

/// Main error type for Scriven
#[derive(Error, Debug)]
pub enum ScrivenError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ScrivenError>;

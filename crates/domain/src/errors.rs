//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for boardwatch
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum BoardwatchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Invalid bucket: {0}")]
    InvalidBucket(String),

    #[error("Date parse failure: {0}")]
    DateParse(String),

    #[error("Send failure: {0}")]
    Send(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for boardwatch operations
pub type Result<T> = std::result::Result<T, BoardwatchError>;

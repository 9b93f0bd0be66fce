//! Error types for the clubhub ecosystem.

use thiserror::Error;

/// Errors that can occur in clubhub operations.
#[derive(Error, Debug)]
pub enum HubError {
    /// Non-2xx response from the hub backend, with status code and body text.
    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Member not found: {0}")]
    MemberNotFound(String),

    #[error("Answer '{0}' requires a clock time")]
    MissingTime(String),

    #[error("Unknown answer type: {0}")]
    UnknownAnswer(String),

    #[error("Unknown member status: {0}")]
    UnknownStatus(String),

    #[error("Unknown event tag: {0}")]
    UnknownTag(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for clubhub operations.
pub type HubResult<T> = Result<T, HubError>;

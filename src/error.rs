//! Error types for Graph access.

use thiserror::Error;

/// Errors raised while acquiring tokens or calling Microsoft Graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Token acquisition failed or returned no usable token.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Graph answered with a non-success status.
    #[error("Graph request failed: {status} - {body}")]
    ApiRequest { status: u16, body: String },

    /// A required environment variable is unset or empty.
    #[error("missing configuration: {0} is not set")]
    MissingConfig(String),

    /// Caller-supplied arguments were rejected before any request was made.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration file could not be read or parsed.
    #[error("config file error: {0}")]
    ConfigFile(String),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to parse response: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// HTTP status carried by an `ApiRequest` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiRequest { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;

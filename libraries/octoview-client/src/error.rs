//! Error types for the GitHub client.

use thiserror::Error;

/// Errors that can occur when fetching a profile from GitHub.
///
/// Each variant corresponds to one validation step of the fetch pipeline;
/// `Transport` covers failures below the HTTP layer (connect, DNS, TLS).
#[derive(Error, Debug)]
pub enum ClientError {
    /// Endpoint string failed to parse as an absolute URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Server answered with a status other than 200
    #[error("Invalid response (status {status})")]
    InvalidResponse { status: u16 },

    /// Body retrieved but JSON decode or shape validation failed
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Transport-level failure before a response was received
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type for GitHub client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

//! Types for GitHub REST API requests and responses.

use serde::{Deserialize, Serialize};

/// Default base URL of the GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Configuration for connecting to the GitHub API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "https://api.github.com")
    pub api_url: String,
}

impl ClientConfig {
    /// Create a new client config with the given base URL.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// A user profile as returned by the `/users/{login}` endpoint.
///
/// All three fields are required: a body missing any of them fails decode.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    pub login: String,
    pub avatar_url: String,
    pub bio: String,
}

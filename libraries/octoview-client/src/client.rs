//! Main GitHub API client.

use crate::error::{ClientError, Result};
use crate::types::ClientConfig;
use crate::users::UsersClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

/// Client for the GitHub REST API.
///
/// The client validates and normalizes the configured base URL up front and
/// owns the underlying HTTP transport. Resource access goes through borrowed
/// sub-clients.
///
/// # Example
///
/// ```ignore
/// use octoview_client::{ClientConfig, GitHubClient};
///
/// let client = GitHubClient::new(ClientConfig::default())?;
/// let profile = client.users().get_profile("octocat").await?;
/// println!("@{}: {}", profile.login, profile.bio);
/// ```
#[derive(Debug)]
pub struct GitHubClient {
    http: Client,
    api_url: String,
}

impl GitHubClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Validate URL
        if config.api_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let api_url = config.api_url.trim_end_matches('/').to_string();
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        // GitHub rejects requests without a User-Agent; the Accept header
        // selects the stable REST media type.
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        // No request timeout here: the fetch contract defers to the
        // transport's default.
        let http = Client::builder()
            .default_headers(headers)
            .user_agent(format!("Octoview/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Transport)?;

        Ok(Self { http, api_url })
    }

    /// Get the configured API base URL.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Get a users client for profile operations.
    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(&self.http, &self.api_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(GitHubClient::new(ClientConfig::new("https://api.github.com")).is_ok());
        assert!(GitHubClient::new(ClientConfig::new("http://localhost:8080")).is_ok());

        // Invalid URLs
        assert!(GitHubClient::new(ClientConfig::new("")).is_err());
        assert!(GitHubClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(GitHubClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client =
            GitHubClient::new(ClientConfig::new("https://api.github.com/")).expect("valid url");

        // URL should have trailing slash removed
        assert_eq!(client.api_url(), "https://api.github.com");
    }
}

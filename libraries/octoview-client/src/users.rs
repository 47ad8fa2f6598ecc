//! User profile operations for the GitHub API.

use crate::error::{ClientError, Result};
use crate::types::Profile;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

/// Users client for the GitHub API.
pub struct UsersClient<'a> {
    http: &'a Client,
    api_url: &'a str,
}

impl<'a> UsersClient<'a> {
    pub(crate) fn new(http: &'a Client, api_url: &'a str) -> Self {
        Self { http, api_url }
    }

    /// Fetch the profile of a single user.
    ///
    /// Issues exactly one GET request per call; repeated calls are
    /// independent. Only status 200 is accepted, and the body is not
    /// inspected on a rejected status.
    pub async fn get_profile(&self, login: &str) -> Result<Profile> {
        let endpoint = format!("{}/users/{}", self.api_url, login);

        // The endpoint must parse as an absolute URL before any I/O happens.
        let url = Url::parse(&endpoint)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", endpoint, e)))?;

        debug!(url = %url, login = %login, "Fetching profile");

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::InvalidResponse {
                status: status.as_u16(),
            });
        }

        let profile: Profile = response.json().await.map_err(|e| {
            ClientError::InvalidData(format!("Failed to parse profile response: {}", e))
        })?;

        debug!(login = %profile.login, "Fetched profile");

        Ok(profile)
    }
}

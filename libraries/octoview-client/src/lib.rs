//! Octoview GitHub Client
//!
//! HTTP client library for fetching user profiles from the GitHub REST API.
//!
//! # Features
//!
//! - **Profile fetch**: one GET per call against `/users/{login}`
//! - **Classified failures**: invalid URL, non-200 response, undecodable body
//! - **Configurable base URL**: point the client at any compatible server
//!
//! # Example
//!
//! ```ignore
//! use octoview_client::{ClientConfig, GitHubClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GitHubClient::new(ClientConfig::default())?;
//!
//!     let profile = client.users().get_profile("octocat").await?;
//!     println!("@{}", profile.login);
//!     println!("{}", profile.bio);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;
mod users;

// Re-export main types
pub use client::GitHubClient;
pub use error::{ClientError, Result};
pub use types::{ClientConfig, Profile, DEFAULT_API_URL};
pub use users::UsersClient;

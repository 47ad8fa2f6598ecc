/// Viewer configuration
use crate::error::{Result, ViewerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ViewerConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_api_url")]
    pub url: String,
}

impl ViewerConfig {
    /// Load configuration from file and environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("config.toml"));
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables (prefixed with OCTOVIEW_)
        settings = settings.add_source(
            config::Environment::with_prefix("OCTOVIEW")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ViewerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ViewerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.url.is_empty() {
            return Err(ViewerError::Config(
                "API URL is required (set OCTOVIEW_API_URL)".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        url: default_api_url(),
    }
}

fn default_api_url() -> String {
    octoview_client::DEFAULT_API_URL.to_string()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_github() {
        let config = ViewerConfig::default();
        assert_eq!(config.api.url, "https://api.github.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_api_url_rejected() {
        let config = ViewerConfig {
            api: ApiSettings { url: String::new() },
        };

        let result = config.validate();
        assert!(result.is_err());
        match result.unwrap_err() {
            ViewerError::Config(msg) => assert!(msg.contains("OCTOVIEW_API_URL")),
            e => panic!("Expected Config error, got: {:?}", e),
        }
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = ViewerConfig::load(Some(Path::new("/nonexistent/config.toml"))).unwrap();
        assert_eq!(config.api.url, "https://api.github.com");
    }
}

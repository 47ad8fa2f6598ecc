/// Viewer error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ViewerError>;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("Configuration error: {0}")]
    Config(String),
}

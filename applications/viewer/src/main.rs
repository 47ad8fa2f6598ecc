/// Octoview - terminal GitHub profile viewer
use clap::Parser;
use octoview_client::{ClientConfig, ClientError, GitHubClient};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod render;

use config::ViewerConfig;

/// The profile shown at startup. The target user is fixed.
const PROFILE_LOGIN: &str = "octocat";

#[derive(Parser)]
#[command(name = "octoview")]
#[command(about = "Terminal viewer for a GitHub user profile", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "octoview=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = ViewerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Octoview");
    tracing::info!("API: {}", config.api.url);

    let client = GitHubClient::new(ClientConfig::new(config.api.url.clone()))?;

    // One fetch at startup; on failure the placeholder card stays visible
    // and the error is only logged.
    match client.users().get_profile(PROFILE_LOGIN).await {
        Ok(profile) => {
            println!("{}", render::profile_card(&profile));
        }
        Err(e) => {
            match &e {
                ClientError::InvalidUrl(_) => tracing::error!("invalid URL"),
                ClientError::InvalidResponse { status } => {
                    tracing::error!(status = %status, "invalid response");
                }
                ClientError::InvalidData(detail) => {
                    tracing::error!(detail = %detail, "invalid data");
                }
                ClientError::Transport(_) => tracing::error!(error = %e, "unexpected error"),
            }
            println!("{}", render::placeholder_card());
        }
    }

    Ok(())
}

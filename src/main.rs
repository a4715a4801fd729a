use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vizzy_chat::config::Config;
use vizzy_chat::state::AppState;
use vizzy_chat::web;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vizzy_chat=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 Starting Vizzy Chat API");

    // Load configuration
    let config = Config::from_env()?;

    // Create application state
    let state = AppState::new(config);

    // Start web server
    web::start_server(state).await?;

    Ok(())
}

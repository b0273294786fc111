//! persona-chat server: serves the expert persona form.
//!
//! Usage:
//!   persona-chat [--host 127.0.0.1] [--port 8501] [--base-url URL] [--env-file PATH]

use anyhow::Context;
use clap::Parser;
use persona_chat::config::Config;
use persona_chat::credential::{load_dotenv, ChainedCredentialSource, CredentialSource};
use persona_chat::web::{self, AppState};
use persona_chat::CompletionClientBuilder;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    load_dotenv(config.env_file.as_deref()).context("failed to load .env")?;

    let client = CompletionClientBuilder::new()
        .base_url(&config.base_url)
        .build()
        .context("invalid completion client configuration")?;
    info!(
        model = client.model(),
        temperature = client.temperature(),
        base_url = %client.base_url(),
        "completion client ready"
    );

    let credentials = Arc::new(ChainedCredentialSource::default());
    if credentials.load().is_none() {
        warn!("OPENAI_API_KEY not found; submissions will show a configuration error until it is set");
    }

    let state = AppState::new(Arc::new(client), credentials);
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    info!("listening on http://{}", listener.local_addr()?);

    web::serve(listener, state).await?;
    Ok(())
}

//! Chat2Vis AI service - answers questions with an explanation and an animated scene.
//!
//! Configuration is read from the environment (see `chat2vis_ai::config`).
//! Log level follows `RUST_LOG`, default `info`.

use std::sync::Arc;

use anyhow::{Context, Result};
use chat2vis_ai::config::ServiceConfig;
use chat2vis_ai::{server, AnswerGenerator};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("chat2vis-ai v{} starting", env!("CARGO_PKG_VERSION"));

    let config = ServiceConfig::from_env().context("loading configuration")?;
    info!(model = %config.model, guide = %config.guide_path.display(), "configuration loaded");

    let generator =
        Arc::new(AnswerGenerator::from_config(&config).context("initialising answer generator")?);

    server::serve(config.bind_addr, generator)
        .await
        .context("HTTP server failed")?;
    Ok(())
}

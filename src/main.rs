//! Dois de Muitos Preview Server
//!
//! Run with: cargo run --bin dois-de-muitos
//!
//! Serves the rendered page, the JSON documents and health probes from the
//! configured data directory (or remote base URL).
//!
//! # Configuration
//!
//! Read from `~/.config/dois-de-muitos/config.toml` or `./dois-de-muitos.toml`,
//! then overridden by environment variables:
//! - `DDM_DATA_DIR`: Directory with the JSON documents (default: ./public)
//! - `DDM_DATA_URL`: Fetch the documents from this base URL instead
//! - `DDM_LOAD_POLICY`: all_or_nothing (default) or per_resource
//! - `DDM_HOST` / `DDM_PORT`: Bind address (default: 127.0.0.1:8080)
//! - `DDM_LOG_LEVEL` / `DDM_LOG_FORMAT`: Logging (default: info, pretty)
//! - `RUST_LOG`: Overrides the log level

use dois_de_muitos::api::{serve, AppState};
use dois_de_muitos::loader::ResourceSource;
use dois_de_muitos::{logging, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, origin) = Config::load_default();
    logging::init(&config.logging)?;
    origin.log();

    tracing::info!("Starting Dois de Muitos preview v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config)?;
    tracing::info!("Data source: {}", state.loader.source().describe());
    tracing::info!("Load policy: {:?}", state.loader.policy());

    let report = state.load().await;
    if report.is_complete() {
        tracing::info!("All documents load");
    } else {
        tracing::warn!(
            failed = report.failures.len(),
            "Some documents fail to load; the page will render without them"
        );
    }

    serve(state).await?;

    Ok(())
}

//! Application State
//!
//! Shared state accessible by all preview handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::{Config, ConfigError, DataSource};
use crate::loader::{DataLoader, LoadReport};
use crate::state::SiteState;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Full configuration the server was started with
    pub config: Arc<Config>,
    /// Loader over the configured data source
    pub loader: Arc<DataLoader<DataSource>>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Build state from configuration, selecting the data source
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let source = config.data.source()?;
        let loader = DataLoader::new(source, config.data.policy);

        Ok(Self {
            config: Arc::new(config),
            loader: Arc::new(loader),
            start_time: Instant::now(),
        })
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Load the documents afresh, so edits show on the next request
    pub async fn load(&self) -> LoadReport {
        self.loader.load().await
    }

    /// Load and settle into a completed page state
    pub async fn site_state(&self) -> SiteState {
        let mut state = SiteState::new();
        self.loader.load_into(&mut state).await;
        state
    }
}

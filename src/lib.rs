pub mod api;
pub mod bookings;
pub mod config;
pub mod error;
pub mod scraper;

use std::sync::Arc;
use config::Config;
use reqwest::Client;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Pooled client for outbound page fetches.
    pub client: Client,
}

impl AppState {
    pub fn new(config: Config) -> error::Result<Self> {
        let client = scraper::build_client(&config)?;
        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }
}

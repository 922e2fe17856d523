//! Shared application state.

use std::sync::Arc;

use protogen_core::{ClientConfig, KikiskothekScraper, ProtogenClient};

use crate::config::ProxyConfig;

/// Immutable state built once at startup and cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ProxyConfig>,
    pub client: ProtogenClient,
    pub scraper: KikiskothekScraper,
}

impl AppState {
    /// Build the upstream client and scraper for `config`.
    ///
    /// # Errors
    /// Returns an error if the upstream base URL is invalid or the HTTP
    /// client cannot be created.
    pub fn new(config: ProxyConfig) -> protogen_core::Result<Self> {
        let client = ProtogenClient::with_config(ClientConfig {
            base_url: config.upstream_base_url.clone(),
        })?;
        let scraper = KikiskothekScraper::with_client(client.clone());

        Ok(Self {
            config: Arc::new(config),
            client,
            scraper,
        })
    }
}

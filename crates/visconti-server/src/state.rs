//! Shared handler state

use visconti_core::{ClientConfig, Config};

/// State available to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    /// Host configuration
    pub config: Config,
    /// Document served as `/config.json`
    pub client_config: ClientConfig,
}

impl AppState {
    /// Derive handler state from the host configuration
    pub fn new(config: Config) -> Self {
        let client_config = config.client_config();
        Self {
            config,
            client_config,
        }
    }
}

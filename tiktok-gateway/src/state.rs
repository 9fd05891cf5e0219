//! Application state management

use std::sync::Arc;

use crate::client::ScraperClient;
use crate::config::Config;

/// Application state shared across handlers
///
/// Built once at startup and cloned into every request; both fields are
/// reference counted, so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    client: Arc<dyn ScraperClient>,
}

impl AppState {
    /// Create application state from a loaded config and a constructed client
    pub fn new(config: Config, client: Arc<dyn ScraperClient>) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the scraping client
    pub fn client(&self) -> &dyn ScraperClient {
        self.client.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeScraperClient;

    #[test]
    fn test_clones_share_client() {
        let state = AppState::new(Config::default(), Arc::new(FakeScraperClient::new()));
        let clone = state.clone();

        assert!(Arc::ptr_eq(&state.client, &clone.client));
        assert_eq!(clone.config().service.port, 8000);
    }
}

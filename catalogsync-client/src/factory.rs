//! Construction of catalog clients.

use std::sync::Arc;

use crate::client::CatalogClient;
use crate::config::ClientConfig;
use crate::error::CatalogResult;
use crate::http::HttpCatalogClient;

/// Produces a configured catalog client for one sync run.
pub trait CatalogClientFactory: Send + Sync {
    fn create(&self) -> CatalogResult<Arc<dyn CatalogClient>>;
}

/// Factory for [`HttpCatalogClient`].
#[derive(Debug, Clone)]
pub struct HttpClientFactory {
    config: ClientConfig,
}

impl HttpClientFactory {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Reads the client configuration from the environment.
    pub fn from_env() -> CatalogResult<Self> {
        Ok(Self::new(ClientConfig::from_env()?))
    }
}

impl CatalogClientFactory for HttpClientFactory {
    fn create(&self) -> CatalogResult<Arc<dyn CatalogClient>> {
        Ok(Arc::new(HttpCatalogClient::new(self.config.clone())?))
    }
}

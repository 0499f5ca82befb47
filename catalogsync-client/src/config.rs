//! Client configuration.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

pub const ENV_ENDPOINT: &str = "CATALOGSYNC_ENDPOINT";
pub const ENV_TIMEOUT_SECS: &str = "CATALOGSYNC_TIMEOUT_SECS";
pub const ENV_AUTH_TOKEN: &str = "CATALOGSYNC_AUTH_TOKEN";

/// Connection settings for [`HttpCatalogClient`](crate::HttpCatalogClient).
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the catalog service API (e.g. `https://catalog.example.com`).
    pub endpoint: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Pre-provisioned bearer token. Obtaining and refreshing it happens
    /// outside this crate.
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("catalogsync/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
            auth_token: None,
            user_agent: default_user_agent(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "[REDACTED]"))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Builds a configuration for `endpoint`, with surrounding whitespace removed.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into().trim().to_string(), ..Default::default() }
    }

    /// Reads the configuration from `CATALOGSYNC_*` environment variables.
    pub fn from_env() -> CatalogResult<Self> {
        let endpoint = env::var(ENV_ENDPOINT)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| CatalogError::Config(format!("{ENV_ENDPOINT} is not set")))?;

        let timeout_secs = match env::var(ENV_TIMEOUT_SECS) {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|_| {
                CatalogError::Config(format!(
                    "{ENV_TIMEOUT_SECS} must be a whole number of seconds, got {raw:?}"
                ))
            })?,
            Err(_) => default_timeout_secs(),
        };

        let auth_token = env::var(ENV_AUTH_TOKEN).ok().filter(|v| !v.is_empty());

        let config = Self { endpoint, timeout_secs, auth_token, ..Default::default() };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the endpoint is an http(s) URL and the timeout is non-zero.
    ///
    /// The endpoint is used as-is to build request URLs, so surrounding
    /// whitespace is rejected rather than ignored.
    pub fn validate(&self) -> CatalogResult<()> {
        let endpoint = self.endpoint.as_str();
        if endpoint.trim().is_empty() {
            return Err(CatalogError::Config("endpoint must not be empty".to_string()));
        }
        if endpoint.trim() != endpoint {
            return Err(CatalogError::Config(format!(
                "endpoint must not have surrounding whitespace, got {endpoint:?}"
            )));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(CatalogError::Config(format!(
                "endpoint must be an http(s) URL, got {endpoint:?}"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(CatalogError::Config("timeout_secs must be greater than zero".to_string()));
        }
        Ok(())
    }
}

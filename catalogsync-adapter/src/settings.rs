//! Sync run settings: fixed catalog identifiers and adapter tuning.

use std::env;
use std::path::Path;

use catalogsync_client::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};

pub const ENV_DOMAIN_ID: &str = "CATALOGSYNC_DOMAIN_ID";
pub const ENV_PRODUCER_PROJECT_ID: &str = "CATALOGSYNC_PRODUCER_PROJECT_ID";
pub const ENV_CONSUMER_PROJECT_ID: &str = "CATALOGSYNC_CONSUMER_PROJECT_ID";
pub const ENV_SOURCE_NAME: &str = "CATALOGSYNC_SOURCE_NAME";
pub const ENV_GLOSSARY_NAME: &str = "CATALOGSYNC_GLOSSARY_NAME";
pub const ENV_PAGE_SIZE: &str = "CATALOGSYNC_PAGE_SIZE";

/// Largest page the catalog service accepts for searches.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Longest propagation wait a sync run accepts, in seconds.
pub const MAX_WAIT_SECS: u64 = 300;

/// Bounds, in seconds, of a randomized wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitWindow {
    pub min_secs: u64,
    pub max_secs: u64,
}

impl WaitWindow {
    pub const fn new(min_secs: u64, max_secs: u64) -> Self {
        Self { min_secs, max_secs }
    }

    /// A window that does not wait at all.
    pub const fn none() -> Self {
        Self::new(0, 0)
    }
}

impl Default for WaitWindow {
    fn default() -> Self {
        Self::new(2, 5)
    }
}

/// Settings for one sync run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSettings {
    pub domain_id: String,
    /// Project that owns the synced glossary and published assets.
    pub producer_project_id: String,
    /// Project that subscribes to the producer's listings.
    pub consumer_project_id: String,
    /// Display name of the catalog being mirrored.
    #[serde(default = "default_source_name")]
    pub source_name: String,
    /// Overrides the derived glossary name.
    #[serde(default)]
    pub glossary_name: Option<String>,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Pause after creating the glossary so it becomes searchable.
    #[serde(default)]
    pub propagation_wait: WaitWindow,
}

fn default_source_name() -> String {
    "Collibra".to_string()
}

fn default_page_size() -> u32 {
    MAX_PAGE_SIZE
}

impl SyncSettings {
    pub fn new(
        domain_id: impl Into<String>,
        producer_project_id: impl Into<String>,
        consumer_project_id: impl Into<String>,
    ) -> Self {
        Self {
            domain_id: domain_id.into(),
            producer_project_id: producer_project_id.into(),
            consumer_project_id: consumer_project_id.into(),
            source_name: default_source_name(),
            glossary_name: None,
            page_size: default_page_size(),
            propagation_wait: WaitWindow::default(),
        }
    }

    /// Name of the glossary that holds the synced terms.
    pub fn glossary_name(&self) -> String {
        match &self.glossary_name {
            Some(name) => name.clone(),
            None => format!("{} Synced Glossary", self.source_name),
        }
    }

    pub fn glossary_description(&self) -> String {
        format!("Glossary for terms synced from {}", self.source_name)
    }

    pub fn subscription_request_reason(&self) -> String {
        format!("Automated sync - Subscription request created from {}", self.source_name)
    }

    pub fn decision_comment(&self) -> String {
        format!("Automated sync - Subscription request approved from {}", self.source_name)
    }

    /// Reads settings from `CATALOGSYNC_*` environment variables.
    pub fn from_env() -> CatalogResult<Self> {
        let mut settings = Self::new(
            required_var(ENV_DOMAIN_ID)?,
            required_var(ENV_PRODUCER_PROJECT_ID)?,
            required_var(ENV_CONSUMER_PROJECT_ID)?,
        );

        if let Some(source) = optional_var(ENV_SOURCE_NAME) {
            settings.source_name = source;
        }
        settings.glossary_name = optional_var(ENV_GLOSSARY_NAME);
        if let Some(raw) = optional_var(ENV_PAGE_SIZE) {
            settings.page_size = raw.trim().parse().map_err(|_| {
                CatalogError::Config(format!("{ENV_PAGE_SIZE} must be a number, got {raw:?}"))
            })?;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a JSON file. Optional fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!("cannot read settings file {}: {e}", path.display()))
        })?;
        let settings: Self = serde_json::from_str(&raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        for (field, value) in [
            ("domain_id", &self.domain_id),
            ("producer_project_id", &self.producer_project_id),
            ("consumer_project_id", &self.consumer_project_id),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogError::Config(format!("{field} must not be empty")));
            }
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(CatalogError::Config(format!(
                "page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        if self.propagation_wait.max_secs > MAX_WAIT_SECS {
            return Err(CatalogError::Config(format!(
                "propagation_wait.max_secs must be at most {MAX_WAIT_SECS}, got {}",
                self.propagation_wait.max_secs
            )));
        }
        if self.propagation_wait.min_secs > self.propagation_wait.max_secs {
            return Err(CatalogError::Config(format!(
                "propagation_wait.min_secs ({}) exceeds max_secs ({})",
                self.propagation_wait.min_secs, self.propagation_wait.max_secs
            )));
        }
        Ok(())
    }
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn required_var(key: &str) -> CatalogResult<String> {
    optional_var(key).ok_or_else(|| CatalogError::Config(format!("{key} is not set")))
}

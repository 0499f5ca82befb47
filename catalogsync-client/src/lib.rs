//! Client for the managed catalog service.
//!
//! - [`CatalogClient`]: the service boundary, one async method per remote
//!   operation
//! - [`HttpCatalogClient`]: REST-JSON implementation over reqwest
//! - [`CatalogClientFactory`]: how callers obtain a configured client
//! - [`CatalogError`]: every failure a remote call can produce
//!
//! The client never retries. [`CatalogError::is_retryable`] is provided for
//! callers that want to layer their own policy on top.

mod client;
mod config;
mod error;
mod factory;
mod http;

pub use client::CatalogClient;
pub use config::{ClientConfig, ENV_AUTH_TOKEN, ENV_ENDPOINT, ENV_TIMEOUT_SECS};
pub use error::{CatalogError, CatalogResult};
pub use factory::{CatalogClientFactory, HttpClientFactory};
pub use http::HttpCatalogClient;

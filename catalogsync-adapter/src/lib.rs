//! Catalog adapter for the metadata sync pipeline.
//!
//! [`CatalogAdapter`] turns pipeline intents (find or create the synced
//! glossary, upsert terms, look up assets and listings, drive the
//! subscription workflow) into catalog service calls:
//! - Cursor pagination is flattened by [`paginate`]
//! - Term descriptions are mapped by [`DescriptionFields`]
//! - Run-wide identifiers and tuning live in [`SyncSettings`]
//! - The pause after creating a glossary goes through a [`Waiter`]
//!
//! The adapter logs through `tracing`; installing a subscriber is up to the
//! host process.

mod adapter;
mod description;
pub mod paginate;
mod settings;
mod wait;

pub use adapter::{AssetRevisionOptions, CatalogAdapter};
pub use description::{DescriptionFields, SHORT_DESCRIPTION_MAX_CHARS};
pub use settings::{
    ENV_CONSUMER_PROJECT_ID, ENV_DOMAIN_ID, ENV_GLOSSARY_NAME, ENV_PAGE_SIZE,
    ENV_PRODUCER_PROJECT_ID, ENV_SOURCE_NAME, MAX_PAGE_SIZE, MAX_WAIT_SECS, SyncSettings,
    WaitWindow,
};
pub use wait::{JitteredWaiter, Waiter, wait_until};

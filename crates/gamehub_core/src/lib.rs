//! Core domain logic for the GameHub catalog browser.
//! This crate is the single source of truth for catalog invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod storage;

pub use config::{CatalogConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::Category;
pub use model::entry::{Entry, EntryFields, EntryId, DESCRIPTION_PLACEHOLDER};
pub use repo::catalog_repo::{CatalogError, CatalogResult, CatalogStore};
pub use search::filter::{filter, CatalogQuery, CategoryFilter, EmptyState};
pub use service::entry_editor::{EditMode, EntryEditor, SubmitOutcome};
pub use service::hub_service::{GameHub, HubError};
pub use service::launch_service::{LaunchSession, ReturnNotice};
pub use service::seed_service::{
    default_entries, seed_catalog, LegacyMarker, SeedOutcome, SeedPolicy,
};
pub use storage::{KeyValueStore, MemoryKvStore, SqliteKvStore, StorageError, StorageResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

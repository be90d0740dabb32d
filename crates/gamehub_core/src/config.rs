//! Catalog configuration.
//!
//! # Responsibility
//! - Hold the storage key, seeding policy, and legacy marker pattern.
//! - Parse partial JSON documents, defaulting omitted fields.
//!
//! # Invariants
//! - `CatalogConfig::default()` reproduces the original browser behavior:
//!   key `catalog`, destructive reseed on legacy ids, pattern `^sample-`.

use crate::service::seed_service::{LegacyMarker, SeedPolicy};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_STORAGE_KEY: &str = "catalog";
pub const DEFAULT_LEGACY_ID_PATTERN: &str = "^sample-";

/// Configuration failure.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    InvalidLegacyPattern { pattern: String, message: String },
    EmptyStorageKey,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid catalog config: {err}"),
            Self::InvalidLegacyPattern { pattern, message } => {
                write!(f, "invalid legacy id pattern `{pattern}`: {message}")
            }
            Self::EmptyStorageKey => write!(f, "storage_key cannot be empty"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Runtime options for the catalog store and seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Storage key holding the JSON catalog array.
    pub storage_key: String,
    pub seed_policy: SeedPolicy,
    /// Regex matched against entry ids to detect obsolete seed data.
    pub legacy_id_pattern: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            seed_policy: SeedPolicy::default(),
            legacy_id_pattern: DEFAULT_LEGACY_ID_PATTERN.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Parses a JSON config document and validates it.
    ///
    /// # Errors
    /// - `ConfigError::Parse` for malformed JSON or unknown enum values.
    /// - Any error returned by [`CatalogConfig::validate`].
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed_policy(mut self, seed_policy: SeedPolicy) -> Self {
        self.seed_policy = seed_policy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        self.legacy_marker().map(|_| ())
    }

    /// Compiles the legacy id pattern.
    pub fn legacy_marker(&self) -> Result<LegacyMarker, ConfigError> {
        LegacyMarker::new(self.legacy_id_pattern.as_str()).map_err(|err| {
            ConfigError::InvalidLegacyPattern {
                pattern: self.legacy_id_pattern.clone(),
                message: err.to_string(),
            }
        })
    }
}

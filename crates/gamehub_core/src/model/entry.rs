//! Catalog entry model.
//!
//! # Responsibility
//! - Define the canonical record persisted under the catalog key.
//! - Separate mutable form fields from identity and creation metadata.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reassigned.
//! - `added_date` is set once at creation and never mutated by updates.

use crate::model::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Placeholder shown when an entry has no description.
pub const DESCRIPTION_PLACEHOLDER: &str = "暂无描述";

/// Stable opaque identifier of a catalog entry.
///
/// Generated entries use UUID v4 text; seeded defaults use `game-N`.
pub type EntryId = String;

/// Mutable fields of an entry, as submitted by the form layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFields {
    pub name: String,
    pub description: String,
    pub url: String,
    pub category: Category,
    pub image: String,
}

impl EntryFields {
    /// Creates a payload with empty optional fields.
    pub fn new(name: impl Into<String>, url: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            url: url.into(),
            category,
            image: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

/// One catalog item.
///
/// Field names on the wire follow the stored payload (`addedDate`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub url: String,
    pub category: Category,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    pub added_date: DateTime<Utc>,
}

impl Entry {
    /// Creates an entry with a fresh UUID and the current time.
    pub fn new(fields: EntryFields) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), fields, Utc::now())
    }

    /// Creates an entry with a caller-provided id and creation time.
    ///
    /// Used by seeding, where ids are deterministic.
    pub fn with_id(id: impl Into<EntryId>, fields: EntryFields, added_date: DateTime<Utc>) -> Self {
        let EntryFields {
            name,
            description,
            url,
            category,
            image,
        } = fields;
        Self {
            id: id.into(),
            name,
            description,
            url,
            category,
            image,
            added_date,
        }
    }

    /// Overwrites the mutable fields, leaving `id` and `added_date` intact.
    pub fn apply_fields(&mut self, fields: EntryFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.url = fields.url;
        self.category = fields.category;
        self.image = fields.image;
    }

    /// Returns a copy of the mutable fields.
    pub fn fields(&self) -> EntryFields {
        EntryFields {
            name: self.name.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
            category: self.category.clone(),
            image: self.image.clone(),
        }
    }

    /// Description for display, falling back to the placeholder.
    pub fn display_description(&self) -> &str {
        if self.description.is_empty() {
            DESCRIPTION_PLACEHOLDER
        } else {
            self.description.as_str()
        }
    }

    /// Image reference when one is set.
    pub fn image_ref(&self) -> Option<&str> {
        if self.image.is_empty() {
            None
        } else {
            Some(self.image.as_str())
        }
    }
}

/// Optional text fields accept `null` as well as a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

//! Catalog store over a key-value backend.
//!
//! # Responsibility
//! - Own the authoritative in-memory list of entries.
//! - Restore it from, and persist it to, one storage key as a JSON array.
//!
//! # Invariants
//! - Entry ids are unique within the catalog.
//! - Insertion order is preserved; reads never reorder.
//! - A mutation is applied in memory only after its full payload was
//!   written. On write failure the in-memory catalog is left unchanged.
//! - Reads fail soft: missing, unreadable, or malformed payloads load as an
//!   empty catalog.

use crate::model::entry::{Entry, EntryFields, EntryId};
use crate::storage::{KeyValueStore, StorageError};
use log::{error, info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog mutation error.
///
/// Missing ids are not errors; see [`CatalogStore::update`] and
/// [`CatalogStore::remove`].
#[derive(Debug)]
pub enum CatalogError {
    /// Writing the catalog payload failed; nothing was applied.
    Storage(StorageError),
    /// The catalog could not be encoded as JSON.
    Encode(serde_json::Error),
    /// `add` was called with an id that already exists.
    DuplicateId(EntryId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "failed to persist catalog: {err}"),
            Self::Encode(err) => write!(f, "failed to encode catalog: {err}"),
            Self::DuplicateId(id) => write!(f, "entry id already exists: {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<StorageError> for CatalogError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Ordered, persisted collection of catalog entries.
pub struct CatalogStore<S: KeyValueStore> {
    storage: S,
    key: String,
    entries: Vec<Entry>,
}

impl<S: KeyValueStore> CatalogStore<S> {
    /// Creates a store bound to `key` and loads its current contents.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let entries = read_catalog(&storage, key.as_str());
        Self {
            storage,
            key,
            entries,
        }
    }

    /// Reads the persisted catalog without touching in-memory state.
    ///
    /// Returns an empty list when nothing is stored or the payload is
    /// unreadable.
    pub fn load(&self) -> Vec<Entry> {
        read_catalog(&self.storage, self.key.as_str())
    }

    /// Replaces in-memory state with the persisted catalog.
    pub fn reload(&mut self) {
        self.entries = self.load();
    }

    /// Writes the current catalog, replacing any prior payload.
    pub fn persist(&mut self) -> CatalogResult<()> {
        let view = self.entries.iter().collect::<Vec<_>>();
        write_catalog(&mut self.storage, self.key.as_str(), &view)
    }

    /// Appends `entry` at the end and persists.
    ///
    /// # Errors
    /// - `CatalogError::DuplicateId` when the id is already present.
    /// - `CatalogError::Storage` when the write fails.
    pub fn add(&mut self, entry: Entry) -> CatalogResult<()> {
        if self.position(entry.id.as_str()).is_some() {
            return Err(CatalogError::DuplicateId(entry.id));
        }

        let view = self
            .entries
            .iter()
            .chain(std::iter::once(&entry))
            .collect::<Vec<_>>();
        write_catalog(&mut self.storage, self.key.as_str(), &view)?;

        self.entries.push(entry);
        Ok(())
    }

    /// Replaces the mutable fields of entry `id` in place and persists.
    ///
    /// Returns `Ok(false)` without writing when `id` is absent. `id` and
    /// `added_date` are never changed.
    pub fn update(&mut self, id: &str, fields: EntryFields) -> CatalogResult<bool> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };

        let mut updated = self.entries[index].clone();
        updated.apply_fields(fields);

        let view = self
            .entries
            .iter()
            .enumerate()
            .map(|(position, entry)| if position == index { &updated } else { entry })
            .collect::<Vec<_>>();
        write_catalog(&mut self.storage, self.key.as_str(), &view)?;

        self.entries[index] = updated;
        Ok(true)
    }

    /// Deletes entry `id` and persists.
    ///
    /// Returns the removed entry, or `Ok(None)` without writing when absent.
    pub fn remove(&mut self, id: &str) -> CatalogResult<Option<Entry>> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };

        let view = self
            .entries
            .iter()
            .enumerate()
            .filter(|(position, _)| *position != index)
            .map(|(_, entry)| entry)
            .collect::<Vec<_>>();
        write_catalog(&mut self.storage, self.key.as_str(), &view)?;

        Ok(Some(self.entries.remove(index)))
    }

    /// Overwrites the whole catalog and persists.
    ///
    /// Later duplicates of an id are dropped.
    pub fn replace_all(&mut self, entries: Vec<Entry>) -> CatalogResult<()> {
        let entries = dedupe_ids(entries);
        let view = entries.iter().collect::<Vec<_>>();
        write_catalog(&mut self.storage, self.key.as_str(), &view)?;

        self.entries = entries;
        Ok(())
    }

    pub fn entries(&self) -> &[Entry] {
        self.entries.as_slice()
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }
}

fn read_catalog<S: KeyValueStore>(storage: &S, key: &str) -> Vec<Entry> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("event=catalog_load module=repo status=empty key={key}");
            return Vec::new();
        }
        Err(err) => {
            warn!(
                "event=catalog_load module=repo status=error key={} error_code=storage_unavailable error={}",
                key, err
            );
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Entry>>(raw.as_str()) {
        Ok(entries) => {
            let entries = dedupe_ids(entries);
            info!(
                "event=catalog_load module=repo status=ok key={} entries={}",
                key,
                entries.len()
            );
            entries
        }
        Err(err) => {
            warn!(
                "event=catalog_load module=repo status=error key={} error_code=storage_corrupt error={}",
                key, err
            );
            Vec::new()
        }
    }
}

fn write_catalog<S: KeyValueStore>(
    storage: &mut S,
    key: &str,
    entries: &[&Entry],
) -> CatalogResult<()> {
    let payload = serde_json::to_string(entries)?;
    match storage.set(key, payload.as_str()) {
        Ok(()) => {
            info!(
                "event=catalog_persist module=repo status=ok key={} entries={}",
                key,
                entries.len()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=catalog_persist module=repo status=error key={} entries={} error_code=storage_write_failed error={}",
                key,
                entries.len(),
                err
            );
            Err(err.into())
        }
    }
}

fn dedupe_ids(entries: Vec<Entry>) -> Vec<Entry> {
    let total = entries.len();
    let mut seen = HashSet::with_capacity(total);
    let unique = entries
        .into_iter()
        .filter(|entry| seen.insert(entry.id.clone()))
        .collect::<Vec<_>>();

    if unique.len() != total {
        warn!(
            "event=catalog_dedupe module=repo status=ok dropped={}",
            total - unique.len()
        );
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::{dedupe_ids, read_catalog};
    use crate::model::category::Category;
    use crate::model::entry::{Entry, EntryFields};
    use crate::storage::{KeyValueStore, MemoryKvStore};
    use chrono::Utc;

    fn entry(id: &str, name: &str) -> Entry {
        Entry::with_id(
            id,
            EntryFields::new(name, "https://example.com/", Category::Casual),
            Utc::now(),
        )
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let entries = vec![entry("a", "first"), entry("b", "b"), entry("a", "second")];
        let unique = dedupe_ids(entries);
        assert_eq!(unique.len(), 2);
        assert_eq!(unique[0].name, "first");
        assert_eq!(unique[1].id, "b");
    }

    #[test]
    fn non_array_payload_loads_as_empty() {
        let mut storage = MemoryKvStore::new();
        storage.set("catalog", r#"{"id":"game-1"}"#).unwrap();
        assert!(read_catalog(&storage, "catalog").is_empty());
    }
}

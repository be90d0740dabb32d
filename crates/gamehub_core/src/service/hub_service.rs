//! Hub facade owned by the presentation layer.
//!
//! # Responsibility
//! - Construct the catalog store, run startup seeding, and hold the view
//!   state (category selection, search text).
//! - Route user actions (submit, delete, launch) to the owning component.
//!
//! # Invariants
//! - One `GameHub` per storage namespace; it is passed explicitly, never
//!   reached through global state.
//! - Visible entries are always a projection of the store's catalog.

use crate::config::{CatalogConfig, ConfigError};
use crate::model::entry::{Entry, EntryFields, EntryId};
use crate::repo::catalog_repo::{CatalogError, CatalogResult, CatalogStore};
use crate::search::filter::{CatalogQuery, CategoryFilter, EmptyState};
use crate::service::entry_editor::{EditMode, EntryEditor, SubmitOutcome};
use crate::service::launch_service::{LaunchSession, ReturnNotice};
use crate::service::seed_service::{seed_catalog, SeedOutcome};
use crate::storage::{KeyValueStore, StorageResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Startup failure.
#[derive(Debug)]
pub enum HubError {
    Config(ConfigError),
    /// Seeded catalog could not be persisted.
    Seed(CatalogError),
}

impl Display for HubError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Seed(err) => write!(f, "catalog seeding failed: {err}"),
        }
    }
}

impl Error for HubError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Seed(err) => Some(err),
        }
    }
}

impl From<ConfigError> for HubError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

/// Catalog browser state: store, editor, launch session, and current query.
pub struct GameHub<L: KeyValueStore, S: KeyValueStore> {
    store: CatalogStore<L>,
    editor: EntryEditor,
    launcher: LaunchSession<S>,
    query: CatalogQuery,
    seed_outcome: SeedOutcome,
}

impl<L: KeyValueStore, S: KeyValueStore> GameHub<L, S> {
    /// Loads the catalog from `local` and runs startup seeding.
    ///
    /// # Errors
    /// - `HubError::Config` when `config` does not validate.
    /// - `HubError::Seed` when seeding had to write and the write failed.
    pub fn open(local: L, session: S, config: &CatalogConfig) -> Result<Self, HubError> {
        config.validate()?;
        let marker = config.legacy_marker()?;

        let mut store = CatalogStore::open(local, config.storage_key.as_str());
        let seed_outcome =
            seed_catalog(&mut store, config.seed_policy, &marker).map_err(HubError::Seed)?;

        Ok(Self {
            store,
            editor: EntryEditor::new(),
            launcher: LaunchSession::new(session),
            query: CatalogQuery::default(),
            seed_outcome,
        })
    }

    pub fn store(&self) -> &CatalogStore<L> {
        &self.store
    }

    pub fn seed_outcome(&self) -> SeedOutcome {
        self.seed_outcome
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.query.category = category;
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
    }

    /// Entries matching the current query, in catalog order.
    pub fn visible_entries(&self) -> Vec<&Entry> {
        self.query.apply(self.store.entries()).collect()
    }

    /// Reason the current view is empty, or `None` when it has entries.
    pub fn empty_state(&self) -> Option<EmptyState> {
        let visible = self.query.apply(self.store.entries()).count();
        self.query.empty_state(visible)
    }

    pub fn edit_mode(&self) -> &EditMode {
        self.editor.mode()
    }

    pub fn begin_create(&mut self) {
        self.editor.begin_create();
    }

    /// Enters edit mode for `id` and returns its current fields for the form.
    ///
    /// Returns `None` and leaves the mode unchanged when `id` is unknown.
    pub fn begin_edit(&mut self, id: &str) -> Option<EntryFields> {
        let fields = self.store.get(id)?.fields();
        self.editor.begin_edit(id);
        Some(fields)
    }

    pub fn cancel_edit(&mut self) {
        self.editor.cancel();
    }

    pub fn submit(&mut self, fields: EntryFields) -> CatalogResult<SubmitOutcome> {
        self.editor.submit(&mut self.store, fields)
    }

    /// Removes `id`; an edit context targeting it is dropped as well.
    pub fn delete(&mut self, id: &str) -> CatalogResult<Option<Entry>> {
        let removed = self.store.remove(id)?;
        if removed.is_some() && self.editor.mode() == &EditMode::Edit(EntryId::from(id)) {
            self.editor.cancel();
        }
        Ok(removed)
    }

    /// Records launch markers for `id` and returns its url.
    ///
    /// Returns `Ok(None)` when `id` is unknown.
    pub fn launch(&mut self, id: &str, return_url: &str) -> StorageResult<Option<String>> {
        let Some(entry) = self.store.get(id) else {
            return Ok(None);
        };
        self.launcher.record_launch(entry, return_url).map(Some)
    }

    pub fn take_return_notice(&mut self, current_url: &str) -> StorageResult<Option<ReturnNotice>> {
        self.launcher.take_return_notice(current_url)
    }

    pub fn into_parts(self) -> (CatalogStore<L>, LaunchSession<S>) {
        (self.store, self.launcher)
    }
}

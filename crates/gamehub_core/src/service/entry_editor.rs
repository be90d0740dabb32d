//! Edit-or-create reconciliation for submitted entry forms.
//!
//! # Responsibility
//! - Hold the single active edit context (`Create` or `Edit(id)`).
//! - Turn a submitted payload into `CatalogStore::add` or `update`.
//!
//! # Invariants
//! - At most one edit context is active; starting another replaces it.
//! - Every `submit` ends in `EditMode::Create`, whatever the store returned.
//! - Updates never alter `id` or `added_date`.
//! - The editor trusts its input; validation belongs to the form layer.

use crate::model::entry::{Entry, EntryFields, EntryId};
use crate::repo::catalog_repo::{CatalogResult, CatalogStore};
use crate::storage::KeyValueStore;
use log::{info, warn};

/// Active edit context.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Next submit creates a new entry.
    #[default]
    Create,
    /// Next submit updates the entry with this id.
    Edit(EntryId),
}

/// Result of one submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(EntryId),
    Updated(EntryId),
    /// The edit target no longer exists; nothing was written.
    NotFound(EntryId),
}

#[derive(Debug, Clone, Default)]
pub struct EntryEditor {
    mode: EditMode,
}

impl EntryEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Edit(_))
    }

    pub fn begin_create(&mut self) {
        self.mode = EditMode::Create;
    }

    pub fn begin_edit(&mut self, id: impl Into<EntryId>) {
        self.mode = EditMode::Edit(id.into());
    }

    pub fn cancel(&mut self) {
        self.mode = EditMode::Create;
    }

    /// Applies `fields` according to the active mode, then resets to create.
    ///
    /// # Contract
    /// - `Create`: fresh UUID id, `added_date = now`, appended via `add`.
    /// - `Edit(id)`: mutable fields replaced via `update`; a missing target
    ///   yields `SubmitOutcome::NotFound`.
    ///
    /// # Errors
    /// - Propagates the store's persistence error; the mode is still reset.
    pub fn submit<S: KeyValueStore>(
        &mut self,
        store: &mut CatalogStore<S>,
        fields: EntryFields,
    ) -> CatalogResult<SubmitOutcome> {
        match std::mem::take(&mut self.mode) {
            EditMode::Create => {
                let entry = Entry::new(fields);
                let id = entry.id.clone();
                store.add(entry)?;
                info!("event=entry_submit module=service status=ok mode=create id={id}");
                Ok(SubmitOutcome::Created(id))
            }
            EditMode::Edit(id) => {
                if store.update(id.as_str(), fields)? {
                    info!("event=entry_submit module=service status=ok mode=edit id={id}");
                    Ok(SubmitOutcome::Updated(id))
                } else {
                    warn!("event=entry_submit module=service status=not_found mode=edit id={id}");
                    Ok(SubmitOutcome::NotFound(id))
                }
            }
        }
    }
}

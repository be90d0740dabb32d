//! Launch bookkeeping for leaving and returning to the hub.
//!
//! # Responsibility
//! - Record the return url and game name before navigating to a game.
//! - Consume those markers once on the next load to produce a
//!   welcome-back notice.
//!
//! # Invariants
//! - Markers are cleared only when the current url equals the recorded
//!   return url; otherwise storage is left untouched.
//! - A failed launch record leaves no marker behind.

use crate::model::entry::Entry;
use crate::storage::{KeyValueStore, StorageResult};
use log::{info, warn};

pub const RETURN_URL_KEY: &str = "gameHubReturnUrl";
pub const CURRENT_GAME_KEY: &str = "currentGame";
pub const WELCOME_BACK_MESSAGE: &str = "欢迎回到飞的VIbe游戏厅！";

/// Shown once after returning from a launched game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnNotice {
    pub game_name: String,
}

impl ReturnNotice {
    pub fn message(&self) -> &'static str {
        WELCOME_BACK_MESSAGE
    }
}

/// Session-scoped launch markers.
pub struct LaunchSession<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> LaunchSession<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Records the pre-navigation markers and returns the url to open.
    ///
    /// # Errors
    /// - Returns the storage error of the first failed write; the game
    ///   marker written before a failed return-url write is rolled back.
    pub fn record_launch(&mut self, entry: &Entry, return_url: &str) -> StorageResult<String> {
        self.storage.set(CURRENT_GAME_KEY, entry.name.as_str())?;
        if let Err(err) = self.storage.set(RETURN_URL_KEY, return_url) {
            if let Err(rollback_err) = self.storage.remove(CURRENT_GAME_KEY) {
                warn!(
                    "event=game_launch module=service status=error rollback=failed error={}",
                    rollback_err
                );
            }
            return Err(err);
        }
        info!(
            "event=game_launch module=service status=ok id={}",
            entry.id
        );
        Ok(entry.url.clone())
    }

    /// Consumes the markers when `current_url` is the recorded return url.
    pub fn take_return_notice(&mut self, current_url: &str) -> StorageResult<Option<ReturnNotice>> {
        let return_url = self.storage.get(RETURN_URL_KEY)?;
        let game_name = self.storage.get(CURRENT_GAME_KEY)?;

        let (Some(return_url), Some(game_name)) = (return_url, game_name) else {
            return Ok(None);
        };
        if return_url.is_empty() || game_name.is_empty() || return_url != current_url {
            return Ok(None);
        }

        self.storage.remove(RETURN_URL_KEY)?;
        self.storage.remove(CURRENT_GAME_KEY)?;
        info!("event=game_return module=service status=ok");
        Ok(Some(ReturnNotice { game_name }))
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

//! Startup seeding and legacy seed migration.
//!
//! # Responsibility
//! - Populate an empty catalog with the canonical default entries.
//! - Detect entries left over from the obsolete `sample-*` seed format and
//!   replace or migrate them according to [`SeedPolicy`].
//!
//! # Invariants
//! - Seeding only runs when the catalog is empty or holds a legacy id.
//! - Any change made here is persisted before `seed_catalog` returns.
//! - Canonical default ids are deterministic (`game-1`..`game-10`).

use crate::model::category::Category;
use crate::model::entry::{Entry, EntryFields};
use crate::repo::catalog_repo::{CatalogResult, CatalogStore};
use crate::storage::KeyValueStore;
use chrono::{DateTime, Utc};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

static DEFAULT_LEGACY_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(crate::config::DEFAULT_LEGACY_ID_PATTERN).expect("valid legacy regex"));

/// (id, name, description, url, category)
const DEFAULT_GAMES: [(&str, &str, &str, &str, Category); 10] = [
    (
        "game-1",
        "塔罗牌占卜",
        "神秘的塔罗牌占卜，探索你的过去、现在和未来",
        "https://zwaley.github.io/tarot/",
        Category::Casual,
    ),
    (
        "game-2",
        "俄罗斯方块",
        "经典的俄罗斯方块游戏，考验你的反应和策略",
        "https://zwaley.github.io/russia/",
        Category::Puzzle,
    ),
    (
        "game-3",
        "五子棋",
        "经典的五子棋对战游戏，挑战AI或与朋友对战",
        "https://zwaley.github.io/wuziqi/",
        Category::Strategy,
    ),
    (
        "game-4",
        "围棋",
        "古老的围棋游戏，体验千年智慧的博弈",
        "https://zwaley.github.io/weiqi/",
        Category::Strategy,
    ),
    (
        "game-5",
        "掼蛋",
        "流行的掼蛋纸牌游戏，单机版AI对战",
        "https://zwaley.github.io/guandan/",
        Category::Casual,
    ),
    (
        "game-6",
        "跑酷大冒险",
        "刺激的跑酷游戏，挑战你的反应速度",
        "https://zwaley.github.io/runcool/",
        Category::Action,
    ),
    (
        "game-7",
        "校园角色测试",
        "有趣的校园角色测试，看看你是哪种人",
        "https://zwaley.github.io/meetoo/",
        Category::Casual,
    ),
    (
        "game-8",
        "正义使者大作战",
        "维护校园正义，成为正义使者！",
        "https://zwaley.github.io/zysz/",
        Category::Action,
    ),
    (
        "game-9",
        "方丈适合度测试",
        "有趣的测试，看看你适合做方丈吗？",
        "https://zwaley.github.io/abbot-quiz/",
        Category::Casual,
    ),
    (
        "game-10",
        "星运占卜",
        "探索你的星座奥秘，了解星座运势",
        "https://zwaley.github.io/stars/",
        Category::Casual,
    ),
];

/// What to do when legacy seed ids are found in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    /// Discard the whole stored catalog, user entries included, and reseed.
    #[default]
    ReplaceOnLegacyDetected,
    /// Drop only legacy entries; keep everything else.
    MigrateOnlyLegacy,
}

/// Result of one seeding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Catalog had content and no legacy ids; nothing written.
    Kept,
    /// Catalog was empty and now holds the default set.
    SeededEmpty,
    /// Legacy ids found; all `discarded` entries replaced by the default set.
    ReplacedLegacy { discarded: usize },
    /// Legacy ids found; `dropped` legacy entries removed, others kept.
    MigratedLegacy { dropped: usize },
}

impl SeedOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kept => "kept",
            Self::SeededEmpty => "seeded_empty",
            Self::ReplacedLegacy { .. } => "replaced_legacy",
            Self::MigratedLegacy { .. } => "migrated_legacy",
        }
    }
}

/// Compiled matcher for legacy seed ids.
#[derive(Debug, Clone)]
pub struct LegacyMarker {
    pattern: Regex,
}

impl LegacyMarker {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn is_legacy(&self, id: &str) -> bool {
        self.pattern.is_match(id)
    }
}

impl Default for LegacyMarker {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_LEGACY_ID_RE.clone(),
        }
    }
}

/// Returns the canonical default entries, stamped with `seeded_at`.
pub fn default_entries(seeded_at: DateTime<Utc>) -> Vec<Entry> {
    DEFAULT_GAMES
        .iter()
        .map(|(id, name, description, url, category)| {
            Entry::with_id(
                *id,
                EntryFields::new(*name, *url, category.clone()).with_description(*description),
                seeded_at,
            )
        })
        .collect()
}

/// Runs the startup seeding decision against `store`.
///
/// # Errors
/// - Returns the store's persistence error when the seeded catalog cannot
///   be written; the store keeps its loaded contents in that case.
pub fn seed_catalog<S: KeyValueStore>(
    store: &mut CatalogStore<S>,
    policy: SeedPolicy,
    marker: &LegacyMarker,
) -> CatalogResult<SeedOutcome> {
    let now = Utc::now();

    if store.is_empty() {
        store.replace_all(default_entries(now))?;
        info!(
            "event=catalog_seed module=service status=ok outcome=seeded_empty entries={}",
            store.len()
        );
        return Ok(SeedOutcome::SeededEmpty);
    }

    let legacy = store
        .entries()
        .iter()
        .filter(|entry| marker.is_legacy(entry.id.as_str()))
        .count();
    if legacy == 0 {
        return Ok(SeedOutcome::Kept);
    }

    let outcome = match policy {
        SeedPolicy::ReplaceOnLegacyDetected => {
            let discarded = store.len();
            store.replace_all(default_entries(now))?;
            SeedOutcome::ReplacedLegacy { discarded }
        }
        SeedPolicy::MigrateOnlyLegacy => {
            let migrated = migrate_entries(store.entries(), marker, now);
            store.replace_all(migrated)?;
            SeedOutcome::MigratedLegacy { dropped: legacy }
        }
    };

    info!(
        "event=catalog_seed module=service status=ok outcome={} legacy={} entries={}",
        outcome.as_str(),
        legacy,
        store.len()
    );
    Ok(outcome)
}

/// Canonical defaults first (a surviving entry with a canonical id takes
/// that slot), then remaining non-legacy entries in their stored order.
fn migrate_entries(current: &[Entry], marker: &LegacyMarker, now: DateTime<Utc>) -> Vec<Entry> {
    let mut survivors = current
        .iter()
        .filter(|entry| !marker.is_legacy(entry.id.as_str()))
        .map(|entry| (entry.id.as_str(), entry))
        .collect::<HashMap<_, _>>();

    let mut merged = default_entries(now)
        .into_iter()
        .map(|default| match survivors.remove(default.id.as_str()) {
            Some(kept) => kept.clone(),
            None => default,
        })
        .collect::<Vec<_>>();

    merged.extend(
        current
            .iter()
            .filter(|entry| survivors.contains_key(entry.id.as_str()))
            .cloned(),
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::{default_entries, migrate_entries, LegacyMarker};
    use crate::model::category::Category;
    use crate::model::entry::{Entry, EntryFields};
    use chrono::Utc;
    use std::collections::HashSet;

    #[test]
    fn default_ids_are_unique_and_ordered() {
        let defaults = default_entries(Utc::now());
        let ids = defaults.iter().map(|entry| entry.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids.len(), 10);
        assert_eq!(ids[0], "game-1");
        assert_eq!(ids[9], "game-10");
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 10);
    }

    #[test]
    fn default_marker_matches_sample_prefix_only() {
        let marker = LegacyMarker::default();
        assert!(marker.is_legacy("sample-7"));
        assert!(!marker.is_legacy("game-7"));
        assert!(!marker.is_legacy("my-sample-7"));
    }

    #[test]
    fn migration_keeps_user_edits_of_defaults_in_canonical_slot() {
        let now = Utc::now();
        let mut edited = default_entries(now).remove(2);
        edited.name = "五子棋 (renamed)".to_string();
        let user = Entry::with_id(
            "user-1",
            EntryFields::new("mine", "https://example.com/", Category::Puzzle),
            now,
        );
        let legacy = Entry::with_id(
            "sample-1",
            EntryFields::new("old", "https://example.com/old", Category::Casual),
            now,
        );

        let merged = migrate_entries(
            &[user.clone(), legacy, edited.clone()],
            &LegacyMarker::default(),
            now,
        );

        assert_eq!(merged.len(), 11);
        assert_eq!(merged[2], edited);
        assert_eq!(merged[10], user);
        assert!(merged.iter().all(|entry| entry.id != "sample-1"));
    }
}

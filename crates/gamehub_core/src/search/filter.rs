//! Category and free-text projection over catalog entries.
//!
//! # Responsibility
//! - Filter entries by exact category tag and case-insensitive substring.
//!
//! # Invariants
//! - Output order equals catalog order.
//! - Filtering never mutates or reorders the catalog.
//! - Category and text predicates compose with logical AND.

use crate::model::category::Category;
use crate::model::entry::Entry;
use std::convert::Infallible;
use std::str::FromStr;

/// Tag that selects every category.
pub const ALL_CATEGORIES: &str = "all";

/// Category half of a catalog query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category.as_str(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        Self::Only(value)
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    /// `"all"` selects everything; any other tag is matched exactly.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == ALL_CATEGORIES {
            Ok(Self::All)
        } else {
            Ok(Self::Only(Category::from(value)))
        }
    }
}

/// Why a view came out empty, for presentation messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// No search text is active; the (category) view simply has no entries.
    NoEntries,
    /// Search text is active and nothing matched it.
    NoMatches,
}

/// Full query state: category selection plus search text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogQuery {
    pub category: CategoryFilter,
    /// Raw search text as typed; matching lower-cases it.
    pub text: String,
}

impl CatalogQuery {
    pub fn new(category: CategoryFilter, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }

    /// Applies this query to `entries`.
    pub fn apply<'a>(&'a self, entries: &'a [Entry]) -> impl Iterator<Item = &'a Entry> + Clone {
        filter(entries, &self.category, self.text.as_str())
    }

    /// Classifies an empty view; `None` when the view has entries.
    pub fn empty_state(&self, visible: usize) -> Option<EmptyState> {
        if visible > 0 {
            None
        } else if self.text.is_empty() {
            Some(EmptyState::NoEntries)
        } else {
            Some(EmptyState::NoMatches)
        }
    }
}

/// Returns entries matching `category` and `search_term`, in catalog order.
///
/// An empty `search_term` disables text filtering. Otherwise an entry
/// matches when its lower-cased name or description contains the
/// lower-cased term. The returned iterator can be cloned to restart.
pub fn filter<'a>(
    entries: &'a [Entry],
    category: &'a CategoryFilter,
    search_term: &str,
) -> impl Iterator<Item = &'a Entry> + Clone {
    let needle = search_term.to_lowercase();
    entries
        .iter()
        .filter(move |entry| category.matches(&entry.category) && matches_text(entry, &needle))
}

fn matches_text(entry: &Entry, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    entry.name.to_lowercase().contains(needle) || entry.description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::{CatalogQuery, CategoryFilter, EmptyState};
    use crate::model::category::Category;

    #[test]
    fn all_tag_parses_to_all() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "action".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Action))
        );
    }

    #[test]
    fn empty_state_depends_on_search_text() {
        let idle = CatalogQuery::default();
        assert_eq!(idle.empty_state(0), Some(EmptyState::NoEntries));
        assert_eq!(idle.empty_state(3), None);

        let searching = CatalogQuery::new(CategoryFilter::All, "xyz");
        assert_eq!(searching.empty_state(0), Some(EmptyState::NoMatches));
    }
}

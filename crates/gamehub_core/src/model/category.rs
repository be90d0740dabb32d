//! Category tags for catalog entries.
//!
//! # Responsibility
//! - Map wire tags (`puzzle`, `action`, ...) onto a typed enum.
//! - Provide display label and icon metadata for known tags.
//!
//! # Invariants
//! - `Category::from(tag).as_str() == tag` for every input string, so
//!   unknown tags survive a load/persist cycle unchanged.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const FALLBACK_ICON: &str = "fas fa-gamepad";

/// Category of one catalog entry.
///
/// Serialized as the bare tag string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Puzzle,
    Action,
    Strategy,
    Casual,
    /// Tag outside the known set, kept as-is.
    Other(String),
}

impl Category {
    /// Known categories in display order.
    pub const KNOWN: [Category; 4] = [
        Category::Puzzle,
        Category::Action,
        Category::Strategy,
        Category::Casual,
    ];

    /// Returns the wire tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Puzzle => "puzzle",
            Self::Action => "action",
            Self::Strategy => "strategy",
            Self::Casual => "casual",
            Self::Other(tag) => tag.as_str(),
        }
    }

    /// Returns the human-readable label, or the raw tag for unknown values.
    pub fn label(&self) -> &str {
        match self {
            Self::Puzzle => "益智",
            Self::Action => "动作",
            Self::Strategy => "策略",
            Self::Casual => "休闲",
            Self::Other(tag) => tag.as_str(),
        }
    }

    /// Returns the icon class used when an entry has no image.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Puzzle => "fas fa-puzzle-piece",
            Self::Action => "fas fa-fist-raised",
            Self::Strategy => "fas fa-chess",
            Self::Casual => "fas fa-smile",
            Self::Other(_) => FALLBACK_ICON,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "puzzle" => Self::Puzzle,
            "action" => Self::Action,
            "strategy" => Self::Strategy,
            "casual" => Self::Casual,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

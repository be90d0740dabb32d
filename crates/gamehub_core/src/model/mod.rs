//! Catalog domain model.
//!
//! # Responsibility
//! - Define the entry record persisted in the catalog payload.
//! - Define the category tag set and its display metadata.
//!
//! # Invariants
//! - Every entry is identified by a stable `EntryId`.
//! - Unknown category tags are preserved verbatim, never rejected.

pub mod category;
pub mod entry;

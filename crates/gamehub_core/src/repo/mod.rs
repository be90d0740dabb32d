//! Repository layer over durable key-value storage.
//!
//! # Responsibility
//! - Keep the catalog's in-memory state and its persisted payload in step.
//! - Isolate JSON encoding and storage keys from service orchestration.
//!
//! # Invariants
//! - Every successful mutation has been written before it returns.
//! - Missing ids are reported as values (`false`/`None`), not errors.

pub mod catalog_repo;

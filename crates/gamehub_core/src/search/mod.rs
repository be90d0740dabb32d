//! Catalog query entry points.
//!
//! # Responsibility
//! - Derive filtered, order-preserving views of the catalog.
//! - Keep view shaping (empty-state reason) inside core.

pub mod filter;

//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog store calls into use-case level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod entry_editor;
pub mod hub_service;
pub mod launch_service;
pub mod seed_service;

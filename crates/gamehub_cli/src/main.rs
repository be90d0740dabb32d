//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `gamehub_core` linkage against a real SQLite file.
//! - Print the startup-seeded catalog view for quick local sanity checks.
//!
//! Usage: `gamehub_cli [db_path] [category] [search]`

use gamehub_core::db::{open_db, open_db_in_memory};
use gamehub_core::{CatalogConfig, CategoryFilter, GameHub, MemoryKvStore, SqliteKvStore};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("gamehub_core ping={}", gamehub_core::ping());
    println!("gamehub_core version={}", gamehub_core::core_version());

    let mut args = std::env::args().skip(1);
    let conn = match args.next() {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    };
    let conn = match conn {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open catalog database: {err}");
            return ExitCode::FAILURE;
        }
    };

    let local = SqliteKvStore::new(&conn);
    let mut hub = match GameHub::open(local, MemoryKvStore::new(), &CatalogConfig::default()) {
        Ok(hub) => hub,
        Err(err) => {
            eprintln!("failed to open catalog: {err}");
            return ExitCode::FAILURE;
        }
    };
    println!("seed={:?} entries={}", hub.seed_outcome(), hub.store().len());

    if let Some(category) = args.next() {
        hub.set_category(category.parse::<CategoryFilter>().unwrap_or_default());
    }
    if let Some(search) = args.next() {
        hub.set_search(search);
    }

    let visible = hub.visible_entries();
    if visible.is_empty() {
        println!("empty={:?}", hub.empty_state());
    }
    for entry in visible {
        println!(
            "{}\t{}\t{}\t{}",
            entry.id,
            entry.category.label(),
            entry.name,
            entry.url
        );
    }

    ExitCode::SUCCESS
}

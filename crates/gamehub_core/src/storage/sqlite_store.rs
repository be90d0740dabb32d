//! SQLite-backed key-value store.
//!
//! # Responsibility
//! - Persist string values in `kv_entries`, partitioned by namespace.
//!
//! # Invariants
//! - Writes are single upsert statements; a reader never sees a partially
//!   written value.
//! - Namespaces never observe each other's keys.

use super::{KeyValueStore, StorageResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Namespace for long-lived catalog data.
pub const LOCAL_NAMESPACE: &str = "local";
/// Namespace for per-session markers when they must survive a restart.
pub const SESSION_NAMESPACE: &str = "session";

/// Key-value store over one namespace of an open connection.
pub struct SqliteKvStore<'conn> {
    conn: &'conn Connection,
    namespace: String,
}

impl<'conn> SqliteKvStore<'conn> {
    /// Creates a store over the `local` namespace.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_namespace(conn, LOCAL_NAMESPACE)
    }

    pub fn with_namespace(conn: &'conn Connection, namespace: impl Into<String>) -> Self {
        Self {
            conn,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_str()
    }
}

impl KeyValueStore for SqliteKvStore<'_> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE namespace = ?1 AND key = ?2;",
                params![self.namespace.as_str(), key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (namespace, key, value)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(namespace, key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![self.namespace.as_str(), key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.conn.execute(
            "DELETE FROM kv_entries WHERE namespace = ?1 AND key = ?2;",
            params![self.namespace.as_str(), key],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{SqliteKvStore, SESSION_NAMESPACE};
    use crate::db::open_db_in_memory;
    use crate::storage::KeyValueStore;

    #[test]
    fn set_replaces_previous_value() {
        let conn = open_db_in_memory().unwrap();
        let mut store = SqliteKvStore::new(&conn);

        store.set("catalog", "[]").unwrap();
        store.set("catalog", "[1]").unwrap();

        assert_eq!(store.get("catalog").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn namespaces_are_isolated() {
        let conn = open_db_in_memory().unwrap();
        let mut local = SqliteKvStore::new(&conn);
        let session = SqliteKvStore::with_namespace(&conn, SESSION_NAMESPACE);

        local.set("currentGame", "围棋").unwrap();

        assert!(session.get("currentGame").unwrap().is_none());
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let conn = open_db_in_memory().unwrap();
        let mut store = SqliteKvStore::new(&conn);

        store.remove("missing").unwrap();
        assert!(store.get("missing").unwrap().is_none());
    }
}

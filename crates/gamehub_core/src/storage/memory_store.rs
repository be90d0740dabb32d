//! In-memory key-value store for session-scoped data.

use super::{KeyValueStore, StorageError, StorageResult};
use std::collections::BTreeMap;

/// Process-local store; contents vanish when dropped.
///
/// Writes can be switched off with [`MemoryKvStore::set_fail_writes`], which
/// makes `set` and `remove` fail the way a full browser quota does.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    values: BTreeMap<String, String>,
    fail_writes: bool,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn fails_writes(&self) -> bool {
        self.fail_writes
    }

    fn check_writable(&self) -> StorageResult<()> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("writes disabled".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.check_writable()?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.check_writable()?;
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryKvStore;
    use crate::storage::{KeyValueStore, StorageError};

    #[test]
    fn failing_mode_rejects_writes_but_keeps_reads() {
        let mut store = MemoryKvStore::new();
        store.set("catalog", "[]").unwrap();
        store.set_fail_writes(true);

        assert!(matches!(
            store.set("catalog", "[1]"),
            Err(StorageError::Unavailable(_))
        ));
        assert!(store.remove("catalog").is_err());
        assert_eq!(store.get("catalog").unwrap().as_deref(), Some("[]"));

        store.set_fail_writes(false);
        store.remove("catalog").unwrap();
        assert!(store.is_empty());
    }
}

//! Key-value stores backing the ledger collections
//!
//! Values are opaque strings (JSON text in practice). `FileStore` keeps one
//! file per key; `MemoryStore` lives only as long as the process.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{ContaproError, ContaproResult};

use super::file_io::{read_text, remove_if_exists, write_text_atomic};

/// Durable string key-value storage
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key has never been written
    fn get(&self, key: &str) -> ContaproResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> ContaproResult<()>;

    /// Delete a key; deleting a missing key is not an error
    fn remove(&self, key: &str) -> ContaproResult<()>;
}

/// Store keeping each key in `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn path_for(&self, key: &str) -> ContaproResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ContaproError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> ContaproResult<Option<String>> {
        read_text(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> ContaproResult<()> {
        write_text_atomic(self.path_for(key)?, value)
    }

    fn remove(&self, key: &str) -> ContaproResult<()> {
        remove_if_exists(self.path_for(key)?)
    }
}

/// In-process store, used by tests and `--ephemeral` runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> ContaproResult<Option<String>> {
        let entries = self.entries.read().map_err(|e| {
            ContaproError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ContaproResult<()> {
        let mut entries = self.entries.write().map_err(|e| {
            ContaproError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ContaproResult<()> {
        let mut entries = self.entries.write().map_err(|e| {
            ContaproError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        entries.remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> ContaproResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> ContaproResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> ContaproResult<()> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        assert_eq!(store.get("contapro_clients").unwrap(), None);
        store.set("contapro_clients", "[1,2]").unwrap();
        assert_eq!(store.get("contapro_clients").unwrap().as_deref(), Some("[1,2]"));
        assert!(temp_dir.path().join("contapro_clients.json").exists());

        store.remove("contapro_clients").unwrap();
        assert_eq!(store.get("contapro_clients").unwrap(), None);
        store.remove("contapro_clients").unwrap();
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("").is_err());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));
        assert_eq!(store.len(), 1);

        store.remove("a").unwrap();
        assert!(store.is_empty());
    }
}

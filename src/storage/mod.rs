//! Storage layer for ContaPro
//!
//! Each ledger collection is stored as a JSON array under its own
//! namespaced key (`contapro_clients`, `contapro_payroll`, ...). Reads never
//! fail: a missing or malformed value falls back to the seed collection.
//! Writes follow the configured [`PersistencePolicy`].

pub mod file_io;
pub mod seed;
pub mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore};

use std::fmt;
use std::str::FromStr;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::config::paths::ContaproPaths;
use crate::error::{ContaproError, ContaproResult};

/// Prefix shared by every key the ledger writes
pub const KEY_PREFIX: &str = "contapro_";

/// What to do when a collection cannot be written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PersistencePolicy {
    /// Log the failure and carry on in memory
    #[default]
    BestEffort,
    /// Return the failure to the caller
    Durable,
}

impl fmt::Display for PersistencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BestEffort => write!(f, "best-effort"),
            Self::Durable => write!(f, "durable"),
        }
    }
}

impl FromStr for PersistencePolicy {
    type Err = ContaproError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "best-effort" | "best_effort" | "besteffort" => Ok(Self::BestEffort),
            "durable" => Ok(Self::Durable),
            other => Err(ContaproError::Config(format!(
                "Unknown persistence policy '{}'. Valid policies: best-effort, durable",
                other
            ))),
        }
    }
}

/// The persisted ledger collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Clients,
    Employees,
    Suppliers,
    Banks,
    Receivables,
    Payables,
    Payroll,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Clients,
        Collection::Employees,
        Collection::Suppliers,
        Collection::Banks,
        Collection::Receivables,
        Collection::Payables,
        Collection::Payroll,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Clients => "clients",
            Self::Employees => "employees",
            Self::Suppliers => "suppliers",
            Self::Banks => "banks",
            Self::Receivables => "receivables",
            Self::Payables => "payables",
            Self::Payroll => "payroll",
        }
    }

    /// Namespaced storage key
    pub fn key(&self) -> String {
        format!("{}{}", KEY_PREFIX, self.name())
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Store adapter used by the ledger
pub struct Storage {
    store: Box<dyn KeyValueStore>,
    policy: PersistencePolicy,
}

impl Storage {
    /// Wrap any key-value store
    pub fn new(store: impl KeyValueStore + 'static, policy: PersistencePolicy) -> Self {
        Self {
            store: Box::new(store),
            policy,
        }
    }

    /// File-backed storage under the data directory
    pub fn open(paths: &ContaproPaths, policy: PersistencePolicy) -> ContaproResult<Self> {
        paths.ensure_directories()?;
        Ok(Self::new(FileStore::new(paths.data_dir()), policy))
    }

    /// Process-local storage, discarded on exit
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new(), PersistencePolicy::BestEffort)
    }

    pub fn policy(&self) -> PersistencePolicy {
        self.policy
    }

    /// Load a collection, substituting `default` when the key is missing,
    /// unreadable or holds malformed JSON
    pub fn load<T, F>(&self, collection: Collection, default: F) -> Vec<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        let key = collection.key();

        let raw = match self.store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(%key, "collection not stored yet, using seed data");
                return default();
            }
            Err(e) => {
                tracing::warn!(%key, error = %e, "storage unavailable, using seed data");
                return default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(%key, error = %e, "malformed collection, using seed data");
                default()
            }
        }
    }

    /// Persist a collection, replacing the stored value
    pub fn save<T: Serialize>(&self, collection: Collection, items: &[T]) -> ContaproResult<()> {
        let key = collection.key();
        let result = serde_json::to_string(items)
            .map_err(ContaproError::from)
            .and_then(|json| self.store.set(&key, &json));

        self.apply_policy(&key, result)
    }

    /// Drop a stored collection so the next load falls back to seed data
    pub fn reset(&self, collection: Collection) -> ContaproResult<()> {
        let key = collection.key();
        let result = self.store.remove(&key);
        self.apply_policy(&key, result)
    }

    fn apply_policy(&self, key: &str, result: ContaproResult<()>) -> ContaproResult<()> {
        match (result, self.policy) {
            (Ok(()), _) => Ok(()),
            (Err(e), PersistencePolicy::BestEffort) => {
                tracing::warn!(%key, error = %e, "failed to persist collection, continuing in memory");
                Ok(())
            }
            (Err(e), PersistencePolicy::Durable) => Err(ContaproError::Storage(format!(
                "Failed to persist {}: {}",
                key, e
            ))),
        }
    }
}

impl fmt::Debug for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::UnavailableStore;
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_keys_are_namespaced() {
        assert_eq!(Collection::Clients.key(), "contapro_clients");
        assert_eq!(Collection::Payroll.key(), "contapro_payroll");
    }

    #[test]
    fn test_missing_key_uses_default() {
        let storage = Storage::in_memory();
        let loaded: Vec<u32> = storage.load(Collection::Banks, || vec![7]);
        assert_eq!(loaded, vec![7]);
    }

    #[test]
    fn test_malformed_json_uses_default() {
        let store = Arc::new(MemoryStore::new());
        store.set("contapro_banks", "{not json").unwrap();
        let storage = Storage::new(store, PersistencePolicy::BestEffort);

        let loaded: Vec<u32> = storage.load(Collection::Banks, || vec![1, 2]);
        assert_eq!(loaded, vec![1, 2]);
    }

    #[test]
    fn test_save_then_load() {
        let store = Arc::new(MemoryStore::new());
        let storage = Storage::new(store.clone(), PersistencePolicy::Durable);

        storage.save(Collection::Clients, &[3u32, 4]).unwrap();
        assert_eq!(store.get("contapro_clients").unwrap().as_deref(), Some("[3,4]"));

        let loaded: Vec<u32> = storage.load(Collection::Clients, Vec::new);
        assert_eq!(loaded, vec![3, 4]);
    }

    #[test]
    fn test_best_effort_swallows_write_failures() {
        let storage = Storage::new(UnavailableStore, PersistencePolicy::BestEffort);
        assert!(storage.save(Collection::Payables, &[1u32]).is_ok());
        assert!(storage.reset(Collection::Payables).is_ok());

        let loaded: Vec<u32> = storage.load(Collection::Payables, || vec![9]);
        assert_eq!(loaded, vec![9]);
    }

    #[test]
    fn test_durable_surfaces_write_failures() {
        let storage = Storage::new(UnavailableStore, PersistencePolicy::Durable);
        let err = storage.save(Collection::Payables, &[1u32]).unwrap_err();
        assert!(matches!(err, ContaproError::Storage(_)));
        assert!(err.to_string().contains("contapro_payables"));
    }

    #[test]
    fn test_open_uses_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContaproPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(&paths, PersistencePolicy::Durable).unwrap();

        storage.save(Collection::Employees, &["x"]).unwrap();
        assert!(paths.data_dir().join("contapro_employees.json").exists());

        storage.reset(Collection::Employees).unwrap();
        assert!(!paths.data_dir().join("contapro_employees.json").exists());
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(
            "best-effort".parse::<PersistencePolicy>().unwrap(),
            PersistencePolicy::BestEffort
        );
        assert_eq!(
            "DURABLE".parse::<PersistencePolicy>().unwrap(),
            PersistencePolicy::Durable
        );
        assert!("sometimes".parse::<PersistencePolicy>().is_err());
        assert_eq!(
            serde_json::to_string(&PersistencePolicy::BestEffort).unwrap(),
            "\"best-effort\""
        );
    }
}

//! On-device persistence.
//!
//! Everything the app persists is small scalar values and one ledger
//! snapshot, so the contract is a string key-value store with full-snapshot
//! semantics: read everything at startup, rewrite on every mutation.
//! Persistence failures degrade to in-memory state instead of failing the
//! caller; the app must stay usable with a broken disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub mod ledger;
pub mod profile;

pub use ledger::WatchedLedger;
pub use profile::{Profile, ProfileStore};

pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// File-backed store: one JSON object per file, rewritten atomically
/// (write to a sibling temp file, then rename) on every mutation.
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store, starting empty when the file is absent or does not
    /// parse. A corrupt snapshot must never block startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Discarding corrupt store file");
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };

        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        let json = match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize store");
                return;
            }
        };

        let tmp = self.path.with_extension("tmp");
        let result = fs::write(&tmp, json).and_then(|_| fs::rename(&tmp, &self.path));
        if let Err(e) = result {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to persist store");
        }
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.persist();
        }
    }
}

/// In-memory store for tests and previews
#[derive(Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

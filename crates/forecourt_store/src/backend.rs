//! Key-value storage backends
//!
//! The store talks to durable storage through [`StorageBackend`], a small
//! string-keyed KV seam. Keys come from [`crate::store::storage_key`] and
//! are restricted to lowercase alphanumerics, `-` and `.`, which keeps
//! them filesystem-safe for [`FileBackend`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::error::{Result, StoreError};

/// String-keyed durable storage
pub trait StorageBackend {
    /// Value for a key, `None` when absent
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Create or overwrite a key
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Returns whether it existed; removing an absent key
    /// is not an error.
    fn remove(&mut self, key: &str) -> Result<bool>;

    /// All stored keys, sorted
    fn keys(&self) -> Result<Vec<String>>;
}

/// In-memory backend for previews and tests
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: FxHashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(key).is_some())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self.entries.keys().cloned().collect();
        keys.sort_unstable();
        Ok(keys)
    }
}

/// Directory-backed backend: one `<key>.json` file per key
#[derive(Debug)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Open a backend rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> std::result::Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.entry_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.entry_path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        match fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if let Some(key) = name.strip_suffix(".json") {
                keys.push(key.to_string());
            }
        }
        keys.sort_unstable();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_round_trip() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.read("a").unwrap(), None);

        backend.write("a", "one").unwrap();
        backend.write("b", "two").unwrap();
        backend.write("a", "three").unwrap();

        assert_eq!(backend.read("a").unwrap().as_deref(), Some("three"));
        assert_eq!(backend.keys().unwrap(), vec!["a", "b"]);

        assert!(backend.remove("a").unwrap());
        assert!(!backend.remove("a").unwrap());
        assert_eq!(backend.read("a").unwrap(), None);
    }
}

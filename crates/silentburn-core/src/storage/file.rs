//! File-backed key-value store.
//!
//! Each key maps to one `<key>.json` file inside the data directory.
//! A missing file reads as an absent key.

use std::io::ErrorKind;
use std::path::PathBuf;

use super::{data_dir, KeyValueStore};
use crate::error::StorageError;

/// Store keeping one file per key under a base directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store in the default data directory, creating it if needed.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self { dir: data_dir()? })
    }

    /// Open the store over a custom directory (for tests).
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Base directory holding the key files.
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed {
                key: key.to_string(),
                path,
                source: e,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        std::fs::write(&path, value).map_err(|e| StorageError::WriteFailed {
            key: key.to_string(),
            path,
            source: e,
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::WriteFailed {
                key: key.to_string(),
                path,
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_as_none() {
        let temp = tempfile::tempdir().unwrap();
        let store = FileStore::with_dir(temp.path().to_path_buf());

        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn test_set_get_roundtrip() {
        let temp = tempfile::tempdir().unwrap();
        let mut store = FileStore::with_dir(temp.path().to_path_buf());

        store.set("k", r#"{"a":1}"#).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some(r#"{"a":1}"#));

        // One file per key
        assert!(temp.path().join("k.json").exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let temp = tempfile::tempdir().unwrap();
        let mut store = FileStore::with_dir(temp.path().to_path_buf());

        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);

        store.remove("k").unwrap();
    }
}

//! Key-value persistence layer.
//!
//! All persisted state lives under three independent keys in a simple
//! string key-value store. The [`KeyValueStore`] trait is the capability
//! boundary: the journal and achievement logic stay pure and testable
//! against [`MemoryStore`], while the CLI runs on [`FileStore`].

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::StorageError;

/// Key holding the journal entry list (most-recent-first, max 90).
pub const ENTRIES_KEY: &str = "burnout-journal-entries";

/// Key holding the 5-element achievement catalog.
pub const ACHIEVEMENTS_KEY: &str = "burnout-achievements";

/// Reserved settings key. Untouched by current logic, including
/// `clear_history`.
pub const SETTINGS_KEY: &str = "burnout-settings";

/// Simple string key-value store with get/set/remove semantics.
pub trait KeyValueStore {
    /// Read the value under `key`, or `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` if present. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Returns `~/.config/silentburn[-dev]/` based on SILENTBURN_ENV.
///
/// Set SILENTBURN_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("SILENTBURN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("silentburn-dev")
    } else {
        base_dir.join("silentburn")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StorageError::DataDir(e.to_string()))?;
    Ok(dir)
}

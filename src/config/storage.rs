//! Key/value storage backends for persisted preferences.
//!
//! Values are opaque strings keyed by name, the same shape as browser local
//! storage. `FileStorage` keeps one file per key under the XDG config
//! directory; `MemoryStorage` is used by tests and headless embedders.

use std::{
    collections::HashMap,
    env::var,
    fmt::Debug,
    fs::{create_dir_all, read_to_string, write},
    path::PathBuf,
};

use {parking_lot::RwLock, tracing::debug};

use crate::config::settings::SettingsError;

/// Durable string storage addressed by key.
pub trait KeyValueStorage: Debug + Send + Sync {
    /// Reads the value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// File-backed storage, one `<key>.json` file per entry.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Directory holding the entry files.
    dir: PathBuf,
}

impl FileStorage {
    /// Creates a file storage rooted at the default config directory.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the directory cannot be created.
    pub fn new() -> Result<Self, SettingsError> {
        Self::with_dir(get_config_dir())
    }

    /// Creates a file storage rooted at `dir`, creating it if needed.
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory that will hold one file per key
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the directory cannot be created.
    pub fn with_dir(dir: PathBuf) -> Result<Self, SettingsError> {
        create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Path of the file backing `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        let path = self.path_for(key);
        if !path.exists() {
            debug!("No stored value for {key} at {:?}", path);
            return Ok(None);
        }

        Ok(Some(read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let path = self.path_for(key);
        debug!("Writing {key} to {:?}", path);
        write(path, value)?;
        Ok(())
    }
}

/// In-memory storage; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a memory storage pre-seeded with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .write()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Resolves the application config directory.
///
/// Uses `XDG_CONFIG_HOME` if set, otherwise `$HOME/.config`, with an
/// `acestudio` subdirectory.
#[must_use]
pub fn get_config_dir() -> PathBuf {
    let mut config_dir = get_xdg_config_home();
    config_dir.push("acestudio");
    config_dir
}

fn get_xdg_config_home() -> PathBuf {
    if let Ok(config_home) = var("XDG_CONFIG_HOME")
        && !config_home.is_empty()
    {
        return PathBuf::from(config_home);
    }

    if let Ok(home) = var("HOME") {
        let mut path = PathBuf::from(home);
        path.push(".config");
        return path;
    }

    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::config::storage::{FileStorage, KeyValueStorage, MemoryStorage};

    #[test]
    fn test_file_storage_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::with_dir(temp_dir.path().to_path_buf()).unwrap();

        assert!(storage.get("ace-step-settings").unwrap().is_none());
    }

    #[test]
    fn test_file_storage_set_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::with_dir(temp_dir.path().join("nested")).unwrap();

        storage.set("language", "vi").unwrap();
        assert_eq!(storage.get("language").unwrap().as_deref(), Some("vi"));
        assert!(storage.path_for("language").ends_with("language.json"));

        storage.set("language", "en").unwrap();
        assert_eq!(storage.get("language").unwrap().as_deref(), Some("en"));
    }

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::with_entry("language", "vi");
        assert_eq!(storage.get("language").unwrap().as_deref(), Some("vi"));
        assert!(storage.get("other").unwrap().is_none());

        storage.set("other", "1").unwrap();
        assert_eq!(storage.get("other").unwrap().as_deref(), Some("1"));
    }
}

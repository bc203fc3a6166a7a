use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage.io_error")]
    Io(#[from] std::io::Error),
    #[error("storage.format_error")]
    Format(#[from] serde_json::Error),
    #[error("storage.lock_poisoned")]
    Poisoned,
}

/// String key-value storage with the semantics of browser local storage:
/// reads never touch the backend, every write is flushed before returning.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Storage kept in a single JSON object file.
///
/// Writes go to a sibling temp file that is then renamed over the target,
/// so a crash mid-write leaves the previous contents intact.
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Opens the storage file, creating nothing until the first write.
    ///
    /// A file that is not a JSON object of strings opens as empty storage;
    /// the next write replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = read_entries(&path)?;

        tracing::debug!(path = %path.display(), keys = entries.len(), "storage opened");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let raw = fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    match serde_json::from_str(&raw) {
        Ok(entries) => Ok(entries),
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                %error,
                "unreadable storage file, starting empty"
            );
            Ok(BTreeMap::new())
        }
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        let previous = entries.insert(key.to_string(), value.to_string());

        if let Err(error) = self.flush(&entries) {
            // Keep memory and disk in agreement when the write is refused.
            match previous {
                Some(previous) => entries.insert(key.to_string(), previous),
                None => entries.remove(key),
            };
            return Err(error);
        }

        tracing::debug!(key, bytes = value.len(), "storage entry written");
        Ok(())
    }
}

/// Process-local storage for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_none_for_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("storage.json")).unwrap();

        assert_eq!(storage.get("@RocketShoes:cart").unwrap(), None);
    }

    #[test]
    fn should_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let storage = FileStorage::open(&path).unwrap();
        storage.set("a", "1").unwrap();
        storage.set("b", "2").unwrap();
        drop(storage);

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(reopened.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn should_overwrite_existing_value() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("storage.json")).unwrap();

        storage.set("key", "old").unwrap();
        storage.set("key", "new").unwrap();

        assert_eq!(storage.get("key").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn should_treat_empty_file_as_empty_storage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "").unwrap();

        let storage = FileStorage::open(&path).unwrap();

        assert_eq!(storage.get("anything").unwrap(), None);
    }

    #[test]
    fn should_open_unreadable_file_as_empty_and_replace_it_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "garbage").unwrap();

        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get("@RocketShoes:cart").unwrap(), None);

        storage.set("@RocketShoes:cart", "[]").unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let written: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(written.get("@RocketShoes:cart").map(String::as_str), Some("[]"));
    }

    #[test]
    fn should_open_object_with_non_string_values_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"@RocketShoes:cart": [{"id": 1}]}"#).unwrap();

        let storage = FileStorage::open(&path).unwrap();

        assert_eq!(storage.get("@RocketShoes:cart").unwrap(), None);
    }

    #[test]
    fn should_roll_back_when_write_fails() {
        let dir = tempfile::tempdir().unwrap();
        // The target path is a directory, so the final rename fails.
        let path = dir.path().join("occupied");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();
        let storage = FileStorage {
            path: path.clone(),
            entries: Mutex::new(BTreeMap::new()),
        };

        let result = storage.set("key", "value");

        assert!(result.is_err());
        assert_eq!(storage.get("key").unwrap(), None);
    }

    #[test]
    fn should_store_values_in_memory() {
        let storage = MemoryStorage::new();

        storage.set("key", "value").unwrap();

        assert_eq!(storage.get("key").unwrap().as_deref(), Some("value"));
        assert_eq!(storage.get("other").unwrap(), None);
    }
}

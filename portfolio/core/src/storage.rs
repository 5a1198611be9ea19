//! Client-Local Persistent Storage
//!
//! Two string entries survive between sessions:
//!
//! | key           | values                          |
//! |---------------|---------------------------------|
//! | `theme`       | `"dark"` \| `"light"`           |
//! | `currentPage` | `"hero"` \| `"projects"` \| `"contact"` |
//!
//! Both controllers share one store through `Arc<dyn Storage>`, so
//! implementations use interior locking. Reads never fail; a missing or
//! unreadable entry is simply absent.
//!
//! [`FileStorage`] keeps the entries in a small JSON object at
//! `$XDG_DATA_HOME/portfolio/state.json`.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

/// Key holding the persisted theme
pub const THEME_KEY: &str = "theme";

/// Key holding the persisted current page
pub const CURRENT_PAGE_KEY: &str = "currentPage";

/// Errors from writing persistent state
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to write the state file
    #[error("Failed to write state file at {path}: {source}")]
    Write {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to encode the state
    #[error("Failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key-value store for the little state that outlives a session
pub trait Storage: Send + Sync {
    /// Read an entry
    fn get(&self, key: &str) -> Option<String>;

    /// Write an entry
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium could not be written. The
    /// in-memory view is updated regardless.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove an entry
    ///
    /// # Errors
    ///
    /// Same as [`Storage::set`].
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle used by the controllers
pub type SharedStorage = Arc<dyn Storage>;

// =============================================================================
// In-memory
// =============================================================================

/// Volatile storage (tests, `--state` disabled)
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStorage {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with entries
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: RwLock::new(map),
        }
    }

    /// Wrap in the shared handle the controllers expect
    #[must_use]
    pub fn shared(self) -> SharedStorage {
        Arc::new(self)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().remove(key);
        Ok(())
    }
}

// =============================================================================
// File-backed
// =============================================================================

/// Default state file location
///
/// Returns `$XDG_DATA_HOME/portfolio/state.json` or
/// `~/.local/share/portfolio/state.json`.
#[must_use]
pub fn default_state_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("portfolio").join("state.json"))
}

/// JSON-file storage
///
/// The whole object is rewritten on every change (temp file + rename).
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open (or lazily create) the state file at `path`
    ///
    /// A missing file is an empty store. A corrupt file is logged and also
    /// treated as empty; the next write replaces it.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(map) => {
                    tracing::debug!(path = %path.display(), entries = map.len(), "Loaded state");
                    map
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Ignoring corrupt state file"
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read state file");
                BTreeMap::new()
            }
        };

        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    /// Wrap in the shared handle the controllers expect
    #[must_use]
    pub fn shared(self) -> SharedStorage {
        Arc::new(self)
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete every entry and the backing file
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.entries.write().clear();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Write {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let encoded = serde_json::to_string_pretty(entries)?;
        let write_err = |source: std::io::Error| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp).map_err(write_err)?;
        file.write_all(encoded.as_bytes()).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write();
        if entries.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write();
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush(&entries)
    }
}

/// Write an entry, logging instead of failing
///
/// Persistence is best-effort: a failed write must never undo a state change
/// the user already sees.
pub(crate) fn persist(storage: &dyn Storage, key: &str, value: &str) {
    if let Err(e) = storage.set(key, value) {
        tracing::warn!(key, value, error = %e, "Failed to persist state");
    }
}

/// Store whose every write fails, as a full or read-only disk would
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FailingStorage {
    inner: MemoryStorage,
}

#[cfg(test)]
impl FailingStorage {
    /// Store with readable entries that can never be overwritten
    pub(crate) fn with_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self {
            inner: MemoryStorage::with_entries(entries),
        }
    }

    /// Wrap in the shared handle the controllers expect
    pub(crate) fn shared(self) -> SharedStorage {
        Arc::new(self)
    }

    fn write_error() -> StorageError {
        StorageError::Write {
            path: PathBuf::from("/read-only/state.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        }
    }
}

#[cfg(test)]
impl Storage for FailingStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(Self::write_error())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(Self::write_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::with_entries([(THEME_KEY, "light")]);
        assert_eq!(storage.get(THEME_KEY), Some("light".to_string()));
        assert_eq!(storage.get(CURRENT_PAGE_KEY), None);

        storage.set(CURRENT_PAGE_KEY, "contact").unwrap();
        assert_eq!(storage.get(CURRENT_PAGE_KEY), Some("contact".to_string()));

        storage.remove(THEME_KEY).unwrap();
        assert_eq!(storage.get(THEME_KEY), None);
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let storage = FileStorage::open(&path);
        assert_eq!(storage.get(THEME_KEY), None);
        storage.set(THEME_KEY, "dark").unwrap();
        storage.set(CURRENT_PAGE_KEY, "projects").unwrap();
        drop(storage);

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get(THEME_KEY), Some("dark".to_string()));
        assert_eq!(reopened.get(CURRENT_PAGE_KEY), Some("projects".to_string()));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_storage_corrupt_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();

        let storage = FileStorage::open(&path);
        assert_eq!(storage.get(THEME_KEY), None);

        // The next write replaces the corrupt file
        storage.set(THEME_KEY, "light").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.get(THEME_KEY).map(String::as_str), Some("light"));
    }

    #[test]
    fn test_file_storage_clear() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        let storage = FileStorage::open(&path);
        storage.set(THEME_KEY, "light").unwrap();
        assert!(path.exists());

        storage.clear().unwrap();
        assert!(!path.exists());
        assert_eq!(storage.get(THEME_KEY), None);
        // Clearing twice is fine
        storage.clear().unwrap();
    }

    #[test]
    fn test_default_state_path() {
        if let Some(p) = default_state_path() {
            assert!(p.ends_with("portfolio/state.json"));
        }
    }
}

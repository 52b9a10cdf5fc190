//! The storage seam: a minimal synchronous key-value interface.
//!
//! Everything the storefront persists goes through [`BlobStore`], which
//! mirrors the host's local-storage surface: blocking `get`/`set`/`keys`
//! with no eviction, no expiry, and no capacity management beyond a hard
//! quota failure on write. Two implementations ship with the crate:
//!
//! - [`MemoryStore`] - a plain in-memory map, used by unit tests and
//!   anywhere persistence is unwanted. Can be given a byte quota to
//!   exercise the write-failure path.
//! - [`FileStore`] - the whole namespace as one JSON object in a single
//!   file, rewritten on every `set`. This is the write-through durability
//!   model of browser local storage, expressed on a filesystem.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::StoreWriteError;

/// Minimal synchronous key-value storage interface.
///
/// All operations block and return immediately; there is no suspension and
/// no cross-process coordination. `keys` makes no ordering guarantee.
pub trait BlobStore {
    /// Fetch the serialized value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreWriteError`] when the host storage rejects the write
    /// (quota exceeded, I/O failure).
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreWriteError>;

    /// Every key currently present, in no particular order.
    fn keys(&self) -> Vec<String>;
}

/// In-memory [`BlobStore`] backed by a hash map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    cells: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    /// Create an empty, unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that rejects writes once the total size of all
    /// keys and values would exceed `quota_bytes`.
    ///
    /// Mirrors the host storage quota; mainly useful for exercising the
    /// [`StoreWriteError::QuotaExceeded`] path in tests.
    #[must_use]
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            cells: HashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    fn used_bytes(&self) -> usize {
        self.cells.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cells.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreWriteError> {
        if let Some(quota) = self.quota_bytes {
            let replaced = self.cells.get(key).map_or(0, |v| key.len() + v.len());
            let projected = self.used_bytes() - replaced + key.len() + value.len();
            if projected > quota {
                return Err(StoreWriteError::QuotaExceeded {
                    key: key.to_owned(),
                });
            }
        }
        self.cells.insert(key.to_owned(), value);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.cells.keys().cloned().collect()
    }
}

/// File-backed [`BlobStore`]: the entire namespace as one JSON object.
///
/// The file is read once at [`FileStore::open`] and rewritten in full on
/// every `set`. A write failure leaves the in-memory state as it was before
/// the call, so a caller that sees an error has not silently diverged from
/// disk.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    cells: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, creating an empty namespace if the file
    /// does not exist yet.
    ///
    /// A file that exists but does not parse as a JSON string-to-string
    /// object is treated as empty (with a warning) rather than an error -
    /// the same availability-over-correctness policy the repository applies
    /// to individual blobs.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file exists but cannot be
    /// read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, std::io::Error> {
        let path = path.into();
        let cells = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(cells) => cells,
                Err(error) => {
                    warn!(path = %path.display(), %error, "store file is corrupt, starting empty");
                    BTreeMap::new()
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => return Err(error),
        };
        Ok(Self { path, cells })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, changed_key: &str) -> Result<(), StoreWriteError> {
        let raw = serde_json::to_string_pretty(&self.cells).map_err(|source| {
            StoreWriteError::Serialize {
                key: changed_key.to_owned(),
                source,
            }
        })?;
        fs::write(&self.path, raw).map_err(|source| StoreWriteError::Io {
            key: changed_key.to_owned(),
            source,
        })
    }
}

impl BlobStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cells.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreWriteError> {
        let previous = self.cells.insert(key.to_owned(), value);
        if let Err(error) = self.persist(key) {
            // Roll back so memory and disk stay in agreement.
            match previous {
                Some(old) => {
                    self.cells.insert(key.to_owned(), old);
                }
                None => {
                    self.cells.remove(key);
                }
            }
            return Err(error);
        }
        debug!(key, path = %self.path.display(), "persisted blob");
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.cells.keys().cloned().collect()
    }
}

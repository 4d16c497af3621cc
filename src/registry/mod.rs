//! Version registry
//!
//! A single JSON object mapping identifiers to the installed version and the
//! retained bundle's path:
//!
//! ```json
//! {
//!   "firefox": {
//!     "version": "121.0",
//!     "path": "/home/alice/.local/bin/Firefox.AppImage"
//!   }
//! }
//! ```
//!
//! The file is created lazily. Saves go through a temporary file in the same
//! directory followed by a rename, and every read-modify-write cycle holds
//! the lock in [`lock`].

pub mod lock;

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::common::fs::create_dir;
use crate::error::{Result, fs as fs_error, registry as registry_error};
use crate::names::AppId;

pub use lock::RegistryGuard;

/// Extension of the lock file living next to the registry
const LOCK_EXTENSION: &str = "lock";

/// One installed application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub version: String,
    /// Absolute path of the retained bundle
    pub path: String,
}

/// Registry contents, ordered by identifier
pub type Entries = BTreeMap<String, RegistryEntry>;

/// Handle on the registry file
#[derive(Debug, Clone)]
pub struct Registry {
    path: PathBuf,
}

impl Registry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lock_path(&self) -> PathBuf {
        self.path.with_extension(LOCK_EXTENSION)
    }

    /// Read the registry; a missing file is an empty registry
    pub fn load(&self) -> Result<Entries> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(fs_error::read_failed(&self.path, e)),
        };

        serde_json::from_str(&content).map_err(|e| registry_error::corrupt(&self.path, e))
    }

    /// Replace the registry file with `entries`
    pub fn save(&self, entries: &Entries) -> Result<()> {
        let dir = self
            .path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        create_dir(&dir)?;

        let mut content = serde_json::to_string_pretty(entries)
            .map_err(|e| fs_error::write_failed(&self.path, e))?;
        content.push('\n');

        let mut temp =
            tempfile::NamedTempFile::new_in(&dir).map_err(|e| fs_error::write_failed(&dir, e))?;
        temp.write_all(content.as_bytes())
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|e| fs_error::write_failed(temp.path(), e))?;
        temp.persist(&self.path)
            .map_err(|e| fs_error::write_failed(&self.path, e.error))?;

        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Option<RegistryEntry>> {
        Ok(self.load()?.remove(id))
    }

    /// Take the advisory lock guarding read-modify-write cycles
    pub fn lock(&self) -> Result<RegistryGuard> {
        RegistryGuard::acquire(&self.lock_path())
    }

    /// Insert or overwrite the entry for `id` while `_guard` is held
    pub fn upsert(&self, _guard: &RegistryGuard, id: &AppId, entry: RegistryEntry) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(id.to_string(), entry);
        self.save(&entries)
    }

    /// Remove the entry for `id` while `_guard` is held, returning it if present
    ///
    /// The file is left untouched when there is nothing to remove.
    pub fn remove(&self, _guard: &RegistryGuard, id: &AppId) -> Result<Option<RegistryEntry>> {
        let mut entries = self.load()?;
        let removed = entries.remove(id.as_str());
        if removed.is_some() {
            self.save(&entries)?;
        }
        Ok(removed)
    }
}

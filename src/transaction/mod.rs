//! Transaction support for installs
//!
//! An install touches the registry and three artifact files. Running it
//! inside an [`InstallTransaction`] guarantees that a failure part-way leaves
//! the user environment as it was before the install started.
//!
//! ## Usage
//!
//! ```ignore
//! let mut transaction = InstallTransaction::new(registry.path());
//! let guard = transaction.backup_registry(registry.lock()?)?;
//! registry.upsert(guard, &id, entry)?;
//!
//! // Perform operations...
//! transaction.track_file_created(path);
//!
//! // On success:
//! transaction.commit();
//!
//! // On error (automatic via Drop if not committed):
//! // rollback happens automatically
//! ```
//!
//! The registry lock taken for the backup is held until commit or rollback,
//! so a restore never overwrites another process's update.
//!
//! Files that already existed and were overwritten are not restored: bundles
//! can be large and are not copied aside.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{Result, fs as fs_error};
use crate::registry::RegistryGuard;

/// Registry file state captured before the install touched it
#[derive(Debug, Clone)]
enum RegistrySnapshot {
    Absent,
    Present(Vec<u8>),
}

/// A rollback scope for one install
#[derive(Debug)]
pub struct InstallTransaction {
    /// Registry file path
    registry_path: PathBuf,

    /// Registry content before the install
    registry_snapshot: Option<RegistrySnapshot>,

    /// Registry lock, held from backup until commit or rollback
    registry_guard: Option<RegistryGuard>,

    /// Files created during this transaction
    created_files: Vec<PathBuf>,

    /// Whether the transaction has been committed
    committed: bool,
}

impl InstallTransaction {
    pub fn new(registry_path: impl Into<PathBuf>) -> Self {
        Self {
            registry_path: registry_path.into(),
            registry_snapshot: None,
            registry_guard: None,
            created_files: Vec::new(),
            committed: false,
        }
    }

    /// Capture the registry file under `guard` so it can be restored on rollback
    ///
    /// Must be called before the registry is modified. The transaction keeps
    /// the guard; the returned reference is for the registry update itself.
    pub fn backup_registry(&mut self, guard: RegistryGuard) -> Result<&RegistryGuard> {
        let snapshot = match fs::read(&self.registry_path) {
            Ok(content) => RegistrySnapshot::Present(content),
            Err(e) if e.kind() == ErrorKind::NotFound => RegistrySnapshot::Absent,
            Err(e) => return Err(fs_error::read_failed(&self.registry_path, e)),
        };
        self.registry_snapshot = Some(snapshot);
        Ok(&*self.registry_guard.insert(guard))
    }

    /// Track a file that did not exist before this transaction
    pub fn track_file_created(&mut self, path: impl Into<PathBuf>) {
        self.created_files.push(path.into());
    }

    /// Commit the transaction (prevent rollback)
    pub fn commit(mut self) {
        self.committed = true;
    }

    /// Undo everything tracked so far
    pub fn rollback(&mut self) {
        if self.committed {
            return;
        }

        for path in self.created_files.drain(..).rev() {
            match fs::remove_file(&path) {
                Ok(()) => tracing::debug!(path = %path.display(), "rolled back created file"),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to remove file during rollback");
                }
            }
        }

        let restored = match self.registry_snapshot.take() {
            None => Ok(()),
            Some(RegistrySnapshot::Present(content)) => fs::write(&self.registry_path, content),
            Some(RegistrySnapshot::Absent) => match fs::remove_file(&self.registry_path) {
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                other => other,
            },
        };
        if let Err(e) = restored {
            tracing::warn!(path = %self.registry_path.display(), error = %e, "failed to restore registry");
        }
        self.registry_guard = None;
    }
}

impl Drop for InstallTransaction {
    fn drop(&mut self) {
        if !self.committed {
            tracing::debug!("install not committed, rolling back");
            self.rollback();
        }
    }
}

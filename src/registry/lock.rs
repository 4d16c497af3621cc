//! Advisory locking for registry updates

use std::path::{Path, PathBuf};

use fslock::LockFile;

use crate::common::fs::create_dir;
use crate::error::{Result, registry as registry_error};

/// RAII guard for the registry lock
///
/// Acquires an advisory file lock on creation and releases it on drop, so
/// two processes cannot interleave their read-modify-write cycles.
#[derive(Debug)]
pub struct RegistryGuard {
    lock: LockFile,
    lock_path: PathBuf,
}

impl RegistryGuard {
    /// Block until the lock at `lock_path` is held
    pub fn acquire(lock_path: &Path) -> Result<Self> {
        if let Some(parent) = lock_path.parent() {
            create_dir(parent)?;
        }

        let mut lock =
            LockFile::open(lock_path).map_err(|e| registry_error::lock_failed(lock_path, e))?;
        lock.lock()
            .map_err(|e| registry_error::lock_failed(lock_path, e))?;
        tracing::debug!(path = %lock_path.display(), "registry lock acquired");

        Ok(Self {
            lock,
            lock_path: lock_path.to_path_buf(),
        })
    }

    /// Try to take the lock without blocking; `None` if another holder exists
    #[cfg(test)]
    pub fn try_acquire(lock_path: &Path) -> Result<Option<Self>> {
        let mut lock =
            LockFile::open(lock_path).map_err(|e| registry_error::lock_failed(lock_path, e))?;
        let acquired = lock
            .try_lock()
            .map_err(|e| registry_error::lock_failed(lock_path, e))?;

        Ok(acquired.then(|| Self {
            lock,
            lock_path: lock_path.to_path_buf(),
        }))
    }
}

impl Drop for RegistryGuard {
    fn drop(&mut self) {
        if let Err(e) = self.lock.unlock() {
            tracing::warn!(path = %self.lock_path.display(), error = %e, "failed to release registry lock");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_acquire_creates_parent() {
        let temp = TempDir::new().unwrap();
        let lock_path = temp.path().join("data/registry.lock");

        let guard = RegistryGuard::acquire(&lock_path).unwrap();
        assert!(lock_path.exists());
        drop(guard);
    }

    #[test]
    fn test_lock_is_exclusive_until_dropped() {
        let temp = TempDir::new().unwrap();
        let lock_path = temp.path().join("registry.lock");

        let guard = RegistryGuard::acquire(&lock_path).unwrap();
        assert!(RegistryGuard::try_acquire(&lock_path).unwrap().is_none());

        drop(guard);
        assert!(RegistryGuard::try_acquire(&lock_path).unwrap().is_some());
    }
}

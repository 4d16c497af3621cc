//! Registry errors

use std::path::Path;

use super::AppError;

/// Creates a corrupt-registry error
pub fn corrupt(path: &Path, reason: impl ToString) -> AppError {
    AppError::RegistryCorrupt {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a lock failure error
pub fn lock_failed(path: &Path, reason: impl ToString) -> AppError {
    AppError::RegistryLockFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

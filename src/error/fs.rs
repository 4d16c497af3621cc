//! File system errors

use std::path::Path;

use super::AppError;

/// Creates a read failure error
pub fn read_failed(path: &Path, err: impl ToString) -> AppError {
    AppError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a write failure error
pub fn write_failed(path: &Path, err: impl ToString) -> AppError {
    AppError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

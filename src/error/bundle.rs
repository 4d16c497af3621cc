//! Bundle extraction and descriptor errors

use std::path::Path;

use super::AppError;

/// Creates an extraction error for a bundle
pub fn extraction_failed(bundle: &Path, reason: impl Into<String>) -> AppError {
    AppError::ExtractionFailed {
        bundle: bundle.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates a "no descriptor" error for a bundle
pub fn descriptor_not_found(bundle: &Path) -> AppError {
    AppError::DescriptorNotFound {
        bundle: bundle.display().to_string(),
    }
}

/// Creates a descriptor parse error
pub fn descriptor_parse_failed(path: &Path, reason: impl Into<String>) -> AppError {
    AppError::DescriptorParseFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

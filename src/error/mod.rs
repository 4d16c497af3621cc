//! Error types and handling for appinstall
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`bundle`]: Extraction and descriptor errors
//! - [`registry`]: Version registry errors
//! - [`fs`]: File system errors

pub mod bundle;
pub mod fs;
pub mod registry;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for appinstall operations
#[derive(Error, Diagnostic, Debug)]
pub enum AppError {
    // Bundle errors
    #[error("Bundle file not found: {path}")]
    #[diagnostic(
        code(appinstall::bundle::not_found),
        help("Pass the full path of an existing AppImage file")
    )]
    BundleNotFound { path: String },

    #[error("Failed to extract bundle {bundle}: {reason}")]
    #[diagnostic(
        code(appinstall::bundle::extraction_failed),
        help("Check that the file is a valid AppImage and runs on this system")
    )]
    ExtractionFailed { bundle: String, reason: String },

    #[error("No .desktop file found in bundle {bundle}")]
    #[diagnostic(code(appinstall::bundle::descriptor_not_found))]
    DescriptorNotFound { bundle: String },

    #[error("Failed to parse descriptor {path}: {reason}")]
    #[diagnostic(code(appinstall::bundle::descriptor_parse_failed))]
    DescriptorParseFailed { path: String, reason: String },

    #[error("Invalid application name: '{name}'")]
    #[diagnostic(
        code(appinstall::bundle::invalid_name),
        help("The bundle's Name entry must be non-empty and must not contain '/'")
    )]
    InvalidAppName { name: String },

    // Registry errors
    #[error("Registry file is corrupt: {path}: {reason}")]
    #[diagnostic(
        code(appinstall::registry::corrupt),
        help("Fix or delete the registry file; it is recreated on the next install")
    )]
    RegistryCorrupt { path: String, reason: String },

    #[error("Failed to lock registry {path}: {reason}")]
    #[diagnostic(code(appinstall::registry::lock_failed))]
    RegistryLockFailed { path: String, reason: String },

    // Configuration errors
    #[error("Could not determine the home directory")]
    #[diagnostic(
        code(appinstall::config::home_not_found),
        help("Set HOME or APPINSTALL_HOME")
    )]
    HomeNotFound,

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(appinstall::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(appinstall::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(appinstall::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AppError>;

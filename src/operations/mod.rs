//! Operations module for installing and uninstalling bundles
//!
//! This module provides high-level operations that coordinate:
//! - InstallOperation: extraction, registry update, artifact placement
//! - UninstallOperation: artifact and registry removal
//! - list_installed: registry listing
//!
//! Operations return structured outcomes; presenting them to the user is
//! left to the command layer.

pub mod install;
pub mod list;
pub mod uninstall;

pub use install::{InstallOperation, InstallOptions, InstallOutcome, SourceCleanup};
pub use list::list_installed;
pub use uninstall::{
    ArtifactKind, ArtifactRemoval, RemovalStatus, UninstallOperation, UninstallOutcome,
};

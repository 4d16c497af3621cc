//! Bundle inspection
//!
//! An AppImage is unpacked into a scratch directory with its own
//! `--appimage-extract` switch; the extracted tree is then searched for the
//! `.desktop` descriptor and for icon candidates.

pub mod discovery;
pub mod extract;

use std::path::{Path, PathBuf};

use crate::desktop::BundleMetadata;
use crate::error::{Result, bundle as bundle_error};

pub use discovery::{find_first_by_extension, select_icon};
pub use extract::extract;

/// Extension of the descriptor inside the extracted tree
pub const DESCRIPTOR_EXTENSION: &str = ".desktop";

/// What an extracted bundle tells us about itself
#[derive(Debug, Clone)]
pub struct Inspection {
    /// Root of the extracted tree
    pub root: PathBuf,
    pub metadata: BundleMetadata,
}

impl Inspection {
    /// Icon inside the extracted tree matching the metadata's Icon hint
    pub fn icon(&self) -> Option<PathBuf> {
        select_icon(&self.root, &self.metadata.icon)
    }
}

/// Extract `bundle` into `scratch`, then locate and parse its descriptor
pub fn inspect(bundle: &Path, scratch: &Path) -> Result<Inspection> {
    let root = extract(bundle, scratch)?;
    let descriptor = find_first_by_extension(&root, DESCRIPTOR_EXTENSION)
        .ok_or_else(|| bundle_error::descriptor_not_found(bundle))?;
    tracing::debug!(descriptor = %descriptor.display(), "found descriptor");
    let metadata = BundleMetadata::parse(&descriptor)?;

    Ok(Inspection { root, metadata })
}

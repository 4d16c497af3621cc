//! Desktop integration
//!
//! - [`metadata`]: reading a bundle's `.desktop` descriptor
//! - [`launcher`]: writing the launcher entry for an installed bundle
//! - [`database`]: notifying the desktop menu of changes

pub mod database;
pub mod launcher;
pub mod metadata;

pub use metadata::BundleMetadata;

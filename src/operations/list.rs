//! List operation

use crate::config::Layout;
use crate::error::Result;
use crate::registry::{Registry, RegistryEntry};

/// Installed applications as recorded in the registry.
///
/// Artifacts are not checked for existence.
pub fn list_installed(layout: &Layout) -> Result<Vec<(String, RegistryEntry)>> {
    let entries = Registry::new(layout.registry_file()).load()?;
    Ok(entries.into_iter().collect())
}

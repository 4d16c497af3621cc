//! Uninstall operation
//!
//! The retained bundle is the source of truth: it is re-extracted and the
//! identifier derived from its own descriptor decides which launcher entry,
//! icon and registry key are removed. The name given by the user only serves
//! to find the bundle, so renaming an application between install and
//! uninstall still removes the right artifacts.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::bundle;
use crate::config::Layout;
use crate::desktop::database;
use crate::error::Result;
use crate::names::AppId;
use crate::registry::{Registry, RegistryEntry};
use crate::temp::ScratchDir;

/// Kinds of installed artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Bundle,
    Launcher,
    Icon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalStatus {
    Removed,
    Missing,
    Failed(String),
}

/// What happened to one artifact
#[derive(Debug, Clone)]
pub struct ArtifactRemoval {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub status: RemovalStatus,
}

#[derive(Debug, Clone)]
pub enum UninstallOutcome {
    /// No retained bundle for the requested name; nothing was touched
    NotFound { path: PathBuf },
    Removed {
        /// Identifier declared by the bundle itself
        id: AppId,
        artifacts: Vec<ArtifactRemoval>,
        registry_entry: Option<RegistryEntry>,
        refreshed: bool,
    },
}

/// High-level uninstall operation
pub struct UninstallOperation<'a> {
    layout: &'a Layout,
    registry: Registry,
}

impl<'a> UninstallOperation<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Self {
            layout,
            registry: Registry::new(layout.registry_file()),
        }
    }

    /// Uninstall the application known by `name` (display name or identifier)
    ///
    /// `name` is validated like a bundle Name, so it can never resolve to a
    /// path outside the bin directory.
    pub fn execute(&self, name: &str) -> Result<UninstallOutcome> {
        let requested = AppId::from_display_name(name)?;

        let Some(bundle_path) = self.locate_bundle(&requested)? else {
            return Ok(UninstallOutcome::NotFound {
                path: self.layout.conventional_bundle_path(&requested),
            });
        };

        let scratch = ScratchDir::new()?;
        let id = resolve_canonical_identifier(&bundle_path, scratch.path())?;
        if id != requested {
            tracing::debug!(%requested, canonical = %id, "bundle declares a different identifier");
        }

        let artifacts = vec![
            remove_artifact(ArtifactKind::Bundle, bundle_path),
            remove_artifact(ArtifactKind::Launcher, self.layout.launcher_path(&id)),
            remove_artifact(ArtifactKind::Icon, self.layout.icon_path(&id)),
        ];

        let registry_entry = {
            let guard = self.registry.lock()?;
            self.registry.remove(&guard, &id)?
        };
        let refreshed = database::refresh(&self.layout.applications_dir);

        Ok(UninstallOutcome::Removed {
            id,
            artifacts,
            registry_entry,
            refreshed,
        })
    }

    /// Find the retained bundle for an identifier.
    ///
    /// The registry path recorded at install time is tried first, since
    /// bundles keep their original file name; then `<bin>/<id>.AppImage`.
    fn locate_bundle(&self, requested: &AppId) -> Result<Option<PathBuf>> {
        let recorded = self
            .registry
            .get(requested.as_str())?
            .map(|entry| PathBuf::from(entry.path))
            .filter(|path| path.is_file());

        Ok(recorded.or_else(|| {
            Some(self.layout.conventional_bundle_path(requested)).filter(|path| path.is_file())
        }))
    }
}

/// Re-read a bundle's descriptor and derive the identifier it installs under
pub fn resolve_canonical_identifier(bundle_path: &Path, scratch: &Path) -> Result<AppId> {
    let inspection = bundle::inspect(bundle_path, scratch)?;
    AppId::from_display_name(&inspection.metadata.name)
}

fn remove_artifact(kind: ArtifactKind, path: PathBuf) -> ArtifactRemoval {
    let status = match fs::remove_file(&path) {
        Ok(()) => RemovalStatus::Removed,
        Err(e) if e.kind() == ErrorKind::NotFound => RemovalStatus::Missing,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove artifact");
            RemovalStatus::Failed(e.to_string())
        }
    };
    ArtifactRemoval { kind, path, status }
}

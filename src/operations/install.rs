//! Install operation
//!
//! Places a bundle, its icon and a generated launcher entry into the user's
//! directories and records it in the registry. All steps after the registry
//! update run inside an [`InstallTransaction`], so a failure removes what this
//! install created and restores the previous registry.

use std::fs;
use std::path::{Path, PathBuf};

use crate::bundle;
use crate::common::fs::{self as common_fs, LAUNCHER_MODE};
use crate::config::Layout;
use crate::desktop::{database, launcher};
use crate::error::{AppError, Result, fs as fs_error};
use crate::names::AppId;
use crate::registry::{Registry, RegistryEntry};
use crate::temp::ScratchDir;
use crate::transaction::InstallTransaction;

/// Configuration options for install
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Append `--no-sandbox` to the launch command
    pub no_sandbox: bool,
    /// Delete the source file once installed
    pub clean: bool,
}

/// What happened to the source file when `clean` was requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceCleanup {
    Removed,
    /// The source is the retained bundle itself
    Kept,
    Failed(String),
}

/// Result of a successful install
#[derive(Debug, Clone)]
pub struct InstallOutcome {
    pub name: String,
    pub version: String,
    /// Source path as given by the caller
    pub source: PathBuf,
    /// Installed icon, `None` when no candidate matched the Icon hint
    pub icon: Option<PathBuf>,
    pub refreshed: bool,
    pub cleanup: Option<SourceCleanup>,
}

/// High-level install operation
pub struct InstallOperation<'a> {
    layout: &'a Layout,
    registry: Registry,
    options: InstallOptions,
}

impl<'a> InstallOperation<'a> {
    pub fn new(layout: &'a Layout, options: InstallOptions) -> Self {
        Self {
            layout,
            registry: Registry::new(layout.registry_file()),
            options,
        }
    }

    /// Install the bundle at `source`
    ///
    /// The retained copy keeps the basename of `source` as given, even when
    /// `source` is a symlink; only the bundle contents come from its target.
    pub fn execute(&self, source: &Path) -> Result<InstallOutcome> {
        if !source.is_file() {
            return Err(AppError::BundleNotFound {
                path: source.display().to_string(),
            });
        }
        let file_name = source.file_name().ok_or_else(|| AppError::BundleNotFound {
            path: source.display().to_string(),
        })?;
        let resolved = dunce::canonicalize(source).map_err(|e| fs_error::read_failed(source, e))?;
        common_fs::ensure_executable(&resolved)?;

        let scratch = ScratchDir::new()?;
        let inspection = bundle::inspect(&resolved, scratch.path())?;
        let metadata = &inspection.metadata;
        let id = AppId::from_display_name(&metadata.name)?;

        let bundle_target = self.layout.bin_dir.join(file_name);
        let source_is_retained = source == bundle_target
            || dunce::canonicalize(&bundle_target).is_ok_and(|target| target == resolved);

        let mut transaction = InstallTransaction::new(self.registry.path());
        let guard = transaction.backup_registry(self.registry.lock()?)?;
        self.registry.upsert(
            guard,
            &id,
            RegistryEntry {
                version: metadata.version.clone(),
                path: bundle_target.display().to_string(),
            },
        )?;

        if !source_is_retained {
            place(&mut transaction, &bundle_target, |dst| {
                common_fs::copy_file(&resolved, dst)
            })?;
        }

        let icon = match inspection.icon() {
            Some(icon_source) => {
                let icon_target = self.layout.icon_path(&id);
                place(&mut transaction, &icon_target, |dst| {
                    common_fs::copy_file(&icon_source, dst)
                })?;
                Some(icon_target)
            }
            None => None,
        };

        let exec = launcher::launch_command(&bundle_target, self.options.no_sandbox);
        let icon_field = icon
            .as_ref()
            .map_or_else(|| metadata.icon.clone(), |path| path.display().to_string());
        let launcher_path = self.layout.launcher_path(&id);
        let entry = launcher::render(metadata, &exec, &icon_field);
        place(&mut transaction, &launcher_path, |dst| {
            common_fs::write_file(dst, &entry)
        })?;
        common_fs::set_mode(&launcher_path, LAUNCHER_MODE)?;

        transaction.commit();
        tracing::debug!(
            %id,
            bundle = %bundle_target.display(),
            launcher = %launcher_path.display(),
            "install committed"
        );

        let refreshed = database::refresh(&self.layout.applications_dir);
        let cleanup = self
            .options
            .clean
            .then(|| clean_source(source, source_is_retained));

        Ok(InstallOutcome {
            name: metadata.name.clone(),
            version: metadata.version.clone(),
            source: source.to_path_buf(),
            icon,
            refreshed,
            cleanup,
        })
    }
}

/// Create or overwrite `target`, tracking it for rollback if it is new
fn place(
    transaction: &mut InstallTransaction,
    target: &Path,
    write: impl FnOnce(&Path) -> Result<bool>,
) -> Result<()> {
    let existed = target.exists();
    let result = write(target);
    if !existed && target.exists() {
        transaction.track_file_created(target);
    }
    result.map(|_| ())
}

/// Delete the path the caller gave; a symlink is removed, not its target
fn clean_source(source: &Path, source_is_retained: bool) -> SourceCleanup {
    if source_is_retained {
        return SourceCleanup::Kept;
    }
    match fs::remove_file(source) {
        Ok(()) => SourceCleanup::Removed,
        Err(e) => SourceCleanup::Failed(e.to_string()),
    }
}

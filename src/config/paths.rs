//! User directory layout
//!
//! Bundles, icons, launcher entries and the registry all live under
//! user-scoped standard directories:
//!
//! ```text
//! ~/.local/bin/                       # retained AppImages
//! ~/.local/share/icons/               # <id>.png
//! ~/.local/share/applications/        # <id>.desktop
//! ~/.local/share/appinstall/
//! ├── registry.json                   # installed versions
//! └── registry.lock                   # advisory lock file
//! ```

use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::names::AppId;

/// Environment variable overriding the home directory used as layout base
pub const HOME_ENV: &str = "APPINSTALL_HOME";

/// Subdirectory of the user data directory holding the registry
const DATA_DIR: &str = "appinstall";

/// Registry file name
pub const REGISTRY_FILE: &str = "registry.json";

/// Extension used for installed icons, whatever the source format
pub const ICON_EXTENSION: &str = "png";

/// Extension of launcher entries
pub const LAUNCHER_EXTENSION: &str = "desktop";

/// Extension of bundle files when looked up by identifier
pub const BUNDLE_EXTENSION: &str = "AppImage";

/// Resolved set of user directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub bin_dir: PathBuf,
    pub icons_dir: PathBuf,
    pub applications_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl Layout {
    /// Layout rooted at an explicit home directory
    pub fn from_home(home: &Path) -> Self {
        let share = home.join(".local").join("share");
        Self {
            bin_dir: home.join(".local").join("bin"),
            icons_dir: share.join("icons"),
            applications_dir: share.join("applications"),
            data_dir: share.join(DATA_DIR),
        }
    }

    /// Resolve the layout for the current user
    ///
    /// `APPINSTALL_HOME` takes precedence; otherwise the platform's standard
    /// locations (XDG on Linux) are used, falling back to `~/.local/...`.
    pub fn discover() -> Result<Self> {
        if let Some(home) = std::env::var_os(HOME_ENV) {
            return Ok(Self::from_home(Path::new(&home)));
        }

        let home = dirs::home_dir().ok_or(AppError::HomeNotFound)?;
        let fallback = Self::from_home(&home);
        let share = dirs::data_dir().unwrap_or_else(|| home.join(".local").join("share"));

        Ok(Self {
            bin_dir: dirs::executable_dir().unwrap_or(fallback.bin_dir),
            icons_dir: share.join("icons"),
            applications_dir: share.join("applications"),
            data_dir: share.join(DATA_DIR),
        })
    }

    pub fn registry_file(&self) -> PathBuf {
        self.data_dir.join(REGISTRY_FILE)
    }

    pub fn launcher_path(&self, id: &AppId) -> PathBuf {
        self.applications_dir
            .join(format!("{id}.{LAUNCHER_EXTENSION}"))
    }

    pub fn icon_path(&self, id: &AppId) -> PathBuf {
        self.icons_dir.join(format!("{id}.{ICON_EXTENSION}"))
    }

    /// Conventional location of a retained bundle named after its identifier
    pub fn conventional_bundle_path(&self, id: &AppId) -> PathBuf {
        self.bin_dir.join(format!("{id}.{BUNDLE_EXTENSION}"))
    }
}

//! Desktop menu database refresh

use std::path::Path;
use std::process::{Command, Stdio};

/// External tool rebuilding the MIME/menu cache of an applications directory
pub const UPDATE_DESKTOP_DATABASE: &str = "update-desktop-database";

/// Ask the desktop to re-read `applications_dir`.
///
/// Best effort: failures are logged and reported as `false`, never as errors.
pub fn refresh(applications_dir: &Path) -> bool {
    refresh_with(UPDATE_DESKTOP_DATABASE, applications_dir)
}

fn refresh_with(program: &str, applications_dir: &Path) -> bool {
    let status = Command::new(program)
        .arg(applications_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) if status.success() => {
            tracing::debug!(dir = %applications_dir.display(), "desktop database refreshed");
            true
        }
        Ok(status) => {
            tracing::warn!(%status, "{program} exited unsuccessfully");
            false
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not run {program}");
            false
        }
    }
}

//! Self-extraction of AppImage bundles

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Result, bundle as bundle_error};

/// Argument that makes an AppImage unpack itself into the working directory
pub const EXTRACT_ARG: &str = "--appimage-extract";

/// Directory the bundle unpacks into, relative to the working directory
pub const EXTRACT_ROOT: &str = "squashfs-root";

/// Unpack `bundle` inside `scratch` and return the conventional extraction root.
///
/// The returned path is not checked for existence; lookups below it report
/// absence on their own.
pub fn extract(bundle: &Path, scratch: &Path) -> Result<PathBuf> {
    tracing::debug!(bundle = %bundle.display(), scratch = %scratch.display(), "extracting bundle");

    let output = Command::new(bundle)
        .arg(EXTRACT_ARG)
        .current_dir(scratch)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| bundle_error::extraction_failed(bundle, e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = match stderr.trim() {
            "" => output.status.to_string(),
            detail => format!("{}: {detail}", output.status),
        };
        return Err(bundle_error::extraction_failed(bundle, reason));
    }

    Ok(scratch.join(EXTRACT_ROOT))
}

//! Common file system operations with unified error handling

use std::fs;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use crate::error::{Result, fs as fs_error};

/// Execute bits for owner, group and other
const EXECUTE_BITS: u32 = 0o111;

/// Mode for generated launcher entries
pub const LAUNCHER_MODE: u32 = 0o755;

/// Add execute permission to a file, keeping every existing bit
#[cfg(unix)]
pub fn ensure_executable(path: &Path) -> Result<()> {
    let mut perms = fs::metadata(path)
        .map_err(|e| fs_error::read_failed(path, e))?
        .permissions();
    perms.set_mode(perms.mode() | EXECUTE_BITS);
    fs::set_permissions(path, perms).map_err(|e| fs_error::write_failed(path, e))
}

#[cfg(not(unix))]
pub fn ensure_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Set the exact permission bits of a file
#[cfg(unix)]
pub fn set_mode(path: &Path, mode: u32) -> Result<()> {
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .map_err(|e| fs_error::write_failed(path, e))
}

#[cfg(not(unix))]
pub fn set_mode(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}

/// Copy a file, creating the destination's parent directories
///
/// Returns whether the destination existed before the copy.
pub fn copy_file(src: &Path, dst: &Path) -> Result<bool> {
    if let Some(parent) = dst.parent() {
        create_dir(parent)?;
    }
    let existed = dst.exists();
    fs::copy(src, dst).map_err(|e| fs_error::write_failed(dst, e))?;
    Ok(existed)
}

/// Write a text file, creating the parent directories
///
/// Returns whether the file existed before the write.
pub fn write_file(path: &Path, content: &str) -> Result<bool> {
    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }
    let existed = path.exists();
    fs::write(path, content).map_err(|e| fs_error::write_failed(path, e))?;
    Ok(existed)
}

pub fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| fs_error::write_failed(path, e))
}

//! Scratch directories for bundle extraction.
//!
//! Scratch directories are never created under the current working directory
//! (e.g. when TMPDIR=tmp or TMPDIR=./tmp) and are removed when dropped.

use std::env;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::Result;

const SCRATCH_PREFIX: &str = "appinstall-";

/// Returns a directory path suitable for creating temporary directories.
/// Never returns a relative path.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        PathBuf::from("/tmp")
    }
}

/// A process-local extraction directory, deleted recursively on drop
#[derive(Debug)]
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .tempdir_in(temp_dir_base())?;
        tracing::debug!(path = %dir.path().display(), "created scratch directory");
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

//! Plain filesystem operations: copy, inspect, purge.

pub mod copy_dir;
pub mod copy_file;
pub mod inspect;
pub mod purge;

use std::path::Path;

use crate::FsUtilError;
use crate::Result;

/// Directory name skipped by tree copies (macOS volume trash).
pub const TRASHES_DIR: &str = ".Trashes";

/// Rejects empty path arguments.
pub(crate) fn require_path(path: &Path, what: &'static str) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(FsUtilError::InvalidArgument(what));
    }
    Ok(())
}

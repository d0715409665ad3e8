//! Existence and emptiness checks.

use std::fs;
use std::path::Path;

use crate::FsUtilError;
use crate::Result;

/// Returns `true` if `path` can be stat'ed (links are followed).
///
/// Every failure, including permission denied and dangling links, reads as
/// `false`.
pub fn file_exists(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

/// Returns whether the directory at `path` has no entries.
///
/// Only the first listing entry is read.
///
/// # Errors
///
/// - [`FsUtilError::Open`] if `path` cannot be listed or its first entry
///   cannot be read.
pub fn is_empty(path: &Path) -> Result<bool> {
    let open_err = |e| FsUtilError::Open {
        path: path.to_path_buf(),
        source: e,
    };
    let mut entries = fs::read_dir(path).map_err(open_err)?;

    match entries.next() {
        None => Ok(true),
        Some(Ok(_)) => Ok(false),
        Some(Err(e)) => Err(open_err(e)),
    }
}

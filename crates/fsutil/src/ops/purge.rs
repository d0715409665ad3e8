//! Clearing a directory while keeping the directory itself.

use std::fs;
use std::io;
use std::path::Path;

use crate::FsUtilError;
use crate::Result;

/// Removes every child of `path`, recursing into subdirectories.
///
/// The full listing is read before anything is removed. Symlinks are
/// unlinked, never followed. A child that disappears before its turn counts
/// as removed. The first other failure stops the purge.
///
/// # Errors
///
/// - [`FsUtilError::Open`] if `path` cannot be listed.
/// - [`FsUtilError::Remove`] for the first child that cannot be removed.
pub fn remove_contents(path: &Path) -> Result<()> {
    let open_err = |e| FsUtilError::Open {
        path: path.to_path_buf(),
        source: e,
    };
    let names = fs::read_dir(path)
        .map_err(open_err)?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect::<io::Result<Vec<_>>>()
        .map_err(open_err)?;

    tracing::debug!(path = %path.display(), children = names.len(), "removing directory contents");

    for name in names {
        let child = path.join(name);
        remove_all(&child).map_err(|e| FsUtilError::Remove {
            path: child.clone(),
            source: e,
        })?;
    }

    Ok(())
}

fn remove_all(path: &Path) -> io::Result<()> {
    let result = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) => Err(e),
    };

    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

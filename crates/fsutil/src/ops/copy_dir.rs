//! Directory tree copy.

use std::fs;
use std::fs::DirBuilder;
use std::path::Path;

use super::TRASHES_DIR;
use super::copy_file::copy_file_with_buffer;
use super::require_path;
use crate::CopyOptions;
use crate::FsUtilError;
use crate::Result;
use crate::copy::CopyBuffer;

/// Copies the directory `source` to `destination`.
///
/// `destination` is created with the source directory's mode. Children are
/// copied in listing order; `.Trashes` is always skipped. Subdirectories are
/// descended into only when `options.recursive` is set. Symlinks are copied
/// as links, including links to directories. The first failing child aborts
/// the copy.
///
/// # Errors
///
/// - [`FsUtilError::InvalidArgument`] for an empty path.
/// - [`FsUtilError::Stat`] if `source` cannot be inspected.
/// - [`FsUtilError::NotADirectory`] if `source` is not a directory.
/// - [`FsUtilError::Create`] if `destination` cannot be created.
/// - [`FsUtilError::Open`] if `source` cannot be listed.
/// - any error from copying a child.
pub fn copy_directory(source: &Path, destination: &Path, options: &CopyOptions) -> Result<()> {
    let mut buffer = CopyBuffer::new();
    copy_tree(source, destination, options, &mut buffer)
}

fn copy_tree(
    source: &Path,
    destination: &Path,
    options: &CopyOptions,
    buffer: &mut CopyBuffer,
) -> Result<()> {
    require_path(source, "source directory path must not be empty")?;
    require_path(destination, "destination directory path must not be empty")?;

    let metadata = fs::metadata(source).map_err(|e| FsUtilError::Stat {
        path: source.to_path_buf(),
        source: e,
    })?;
    if !metadata.is_dir() {
        return Err(FsUtilError::NotADirectory {
            path: source.to_path_buf(),
        });
    }

    create_like(destination, &metadata).map_err(|e| FsUtilError::Create {
        path: destination.to_path_buf(),
        source: e,
    })?;

    let open_err = |e| FsUtilError::Open {
        path: source.to_path_buf(),
        source: e,
    };
    let children = fs::read_dir(source)
        .map_err(open_err)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(open_err)?;

    for child in children {
        let name = child.file_name();
        if name == TRASHES_DIR {
            tracing::debug!(path = %child.path().display(), "skipping trash directory");
            continue;
        }

        let child_source = child.path();
        let child_destination = destination.join(&name);
        let file_type = child.file_type().map_err(|e| FsUtilError::Stat {
            path: child_source.clone(),
            source: e,
        })?;

        if file_type.is_dir() {
            if !options.recursive {
                tracing::debug!(path = %child_source.display(), "skipping subdirectory");
                continue;
            }
            copy_tree(&child_source, &child_destination, options, buffer)?;
        } else {
            copy_file_with_buffer(&child_source, &child_destination, buffer)?;
        }
    }

    Ok(())
}

fn create_like(path: &Path, metadata: &fs::Metadata) -> std::io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        use std::os::unix::fs::PermissionsExt;
        builder.mode(metadata.permissions().mode() & 0o7777);
    }
    #[cfg(not(unix))]
    let _ = metadata;

    builder.create(path)
}

//! Single-path copy: regular files by content, symlinks by target.

use std::fs;
use std::fs::File;
use std::fs::Metadata;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use super::require_path;
use crate::FsUtilError;
use crate::Result;
use crate::copy::COPY_BUFFER_SIZE;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;
use crate::error::SymlinkOp;

/// Copies `source` to `destination`.
///
/// The source is classified without following links. A regular file is
/// copied byte for byte and the destination receives the source's
/// permissions. A symlink is recreated pointing at the same, unresolved,
/// target. Anything else is refused.
///
/// # Errors
///
/// - [`FsUtilError::InvalidArgument`] for an empty path.
/// - [`FsUtilError::Stat`] if `source` cannot be inspected.
/// - [`FsUtilError::Open`] / [`FsUtilError::Create`] for the file handles.
/// - [`FsUtilError::Symlink`] if the link cannot be read or recreated.
/// - [`FsUtilError::UnsupportedFileType`] for devices, fifos and sockets.
/// - [`FsUtilError::Io`] if copying or applying permissions fails.
pub fn copy_file(source: &Path, destination: &Path) -> Result<()> {
    copy_file_with_buffer(source, destination, &mut CopyBuffer::new())
}

/// [`copy_file`] reusing a caller-owned buffer, for tree walks.
pub(crate) fn copy_file_with_buffer(
    source: &Path,
    destination: &Path,
    buffer: &mut CopyBuffer,
) -> Result<()> {
    require_path(source, "source file path must not be empty")?;
    require_path(destination, "destination file path must not be empty")?;

    let metadata = fs::symlink_metadata(source).map_err(|e| FsUtilError::Stat {
        path: source.to_path_buf(),
        source: e,
    })?;
    let file_type = metadata.file_type();

    if file_type.is_file() {
        copy_regular(source, destination, &metadata, buffer)
    } else if file_type.is_symlink() {
        copy_symlink(source, destination)
    } else {
        Err(unsupported(source, &metadata))
    }
}

fn copy_regular(
    source: &Path,
    destination: &Path,
    metadata: &Metadata,
    buffer: &mut CopyBuffer,
) -> Result<()> {
    let mut input = File::open(source).map_err(|e| FsUtilError::Open {
        path: source.to_path_buf(),
        source: e,
    })?;
    let output = File::create(destination).map_err(|e| FsUtilError::Create {
        path: destination.to_path_buf(),
        source: e,
    })?;

    let mut writer = BufWriter::with_capacity(COPY_BUFFER_SIZE, output);
    let copied = copy_with_buffer(&mut input, &mut writer, buffer)?;
    writer.flush()?;
    drop(writer);

    fs::set_permissions(destination, metadata.permissions())?;

    tracing::debug!(
        source = %source.display(),
        destination = %destination.display(),
        bytes = copied,
        "copied file"
    );
    Ok(())
}

fn copy_symlink(source: &Path, destination: &Path) -> Result<()> {
    let target = fs::read_link(source).map_err(|e| FsUtilError::Symlink {
        path: source.to_path_buf(),
        op: SymlinkOp::Read,
        source: e,
    })?;

    create_symlink(&target, destination).map_err(|e| FsUtilError::Symlink {
        path: destination.to_path_buf(),
        op: SymlinkOp::Create,
        source: e,
    })?;

    tracing::debug!(
        link = %destination.display(),
        target = %target.display(),
        "replicated symlink"
    );
    Ok(())
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(not(unix))]
fn create_symlink(_target: &Path, _link: &Path) -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "symlinks are not supported on this platform",
    ))
}

#[cfg(unix)]
fn unsupported(path: &Path, metadata: &Metadata) -> FsUtilError {
    use std::os::unix::fs::FileTypeExt;
    use std::os::unix::fs::MetadataExt;

    let file_type = metadata.file_type();
    let kind = if file_type.is_fifo() {
        "fifo"
    } else if file_type.is_socket() {
        "socket"
    } else if file_type.is_block_device() {
        "block device"
    } else if file_type.is_char_device() {
        "character device"
    } else if file_type.is_dir() {
        "directory"
    } else {
        "special file"
    };

    FsUtilError::UnsupportedFileType {
        path: path.to_path_buf(),
        kind,
        mode: metadata.mode(),
    }
}

#[cfg(not(unix))]
fn unsupported(path: &Path, metadata: &Metadata) -> FsUtilError {
    let kind = if metadata.is_dir() {
        "directory"
    } else {
        "special file"
    };
    FsUtilError::UnsupportedFileType {
        path: path.to_path_buf(),
        kind,
        mode: 0,
    }
}

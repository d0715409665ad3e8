//! Filesystem writes shared by the archive extractor.
//!
//! Every function here returns plain `io::Result` so the caller can attach
//! the entry name when wrapping the failure.

use std::fs::DirBuilder;
use std::fs::File;
use std::fs::OpenOptions;
use std::fs::create_dir_all;
use std::io;
use std::io::BufWriter;
use std::io::Read;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::copy::COPY_BUFFER_SIZE;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;

/// Creates `path` and any missing parents with `mode`.
///
/// Existing directories are left untouched, mode included. The mode is
/// subject to the process umask, and ignored on non-Unix platforms.
pub fn create_directory(path: &Path, mode: u32) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder.create(path)
}

/// Writes `reader` to a freshly created or truncated file at `path`.
///
/// Missing parent directories are created first. The writer is flushed
/// before the file is released so that write-back failures are reported.
/// When `mode` is set it is applied to the finished file (Unix only).
///
/// Returns the number of bytes written.
pub fn write_file<R: Read + ?Sized>(
    reader: &mut R,
    path: &Path,
    mode: Option<u32>,
    buffer: &mut CopyBuffer,
) -> io::Result<u64> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    let mut writer = BufWriter::with_capacity(COPY_BUFFER_SIZE, file);
    let written = copy_with_buffer(reader, &mut writer, buffer)?;
    let file = writer.into_inner().map_err(io::IntoInnerError::into_error)?;

    if let Some(mode) = mode {
        apply_mode(&file, mode)?;
    }

    Ok(written)
}

#[cfg(unix)]
fn apply_mode(file: &File, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(mode))
}

// Permission bits have no portable meaning elsewhere; extraction still
// succeeds without them.
#[cfg(not(unix))]
fn apply_mode(_file: &File, _mode: u32) -> io::Result<()> {
    Ok(())
}

/// Joins a raw entry name onto `dest` lexically, the way a plain path join
/// would: root and prefix components are dropped, `.` is ignored, and `..`
/// pops the previous component even past `dest` itself.
///
/// No containment check is performed.
pub fn join_unchecked(dest: &Path, name: &str) -> PathBuf {
    let mut joined = dest.to_path_buf();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => joined.push(part),
            Component::ParentDir => {
                joined.pop();
            }
            Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
        }
    }
    joined
}

//! Error types for filesystem and archive operations.

use std::io;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `FsUtilError`.
pub type Result<T> = std::result::Result<T, FsUtilError>;

/// Which half of a symlink replication failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymlinkOp {
    /// Reading the target of the source link.
    Read,
    /// Creating the link at the destination.
    Create,
}

impl std::fmt::Display for SymlinkOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read => write!(f, "unable to read symlink"),
            Self::Create => write!(f, "unable to replicate symlink"),
        }
    }
}

/// Errors returned by the filesystem helpers.
#[derive(Error, Debug)]
pub enum FsUtilError {
    /// A required argument was missing or empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Stat of a source path failed.
    #[error("cannot stat {path}: {source}")]
    Stat {
        /// The path that was inspected.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Opening a file or directory listing failed.
    #[error("cannot open {path}: {source}")]
    Open {
        /// The path that could not be opened.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Creating a destination file or directory failed.
    #[error("cannot create {path}: {source}")]
    Create {
        /// The path that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The source of a directory copy is not a directory.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// The archive could not be opened or is not a valid zip container.
    #[error("cannot open archive {path}: {source}")]
    ArchiveOpen {
        /// Path of the archive.
        path: PathBuf,
        /// Underlying zip error.
        source: zip::result::ZipError,
    },

    /// Writing a single archive entry failed; extraction stopped there.
    #[error("failed to extract entry '{entry}': {source}")]
    ExtractEntry {
        /// Entry name as stored in the archive.
        entry: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Entry name is absolute or escapes the destination directory.
    #[error("unsafe entry path in archive: '{entry}'")]
    UnsafeEntryPath {
        /// Entry name as stored in the archive.
        entry: String,
    },

    /// Reading or recreating a symbolic link failed.
    #[error("{op} {path}: {source}")]
    Symlink {
        /// The link path involved.
        path: PathBuf,
        /// Which step failed.
        op: SymlinkOp,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The source is neither a regular file nor a symlink.
    #[error("unable to copy {kind} {path} (mode {mode:#o})")]
    UnsupportedFileType {
        /// The offending path.
        path: PathBuf,
        /// Human readable file type.
        kind: &'static str,
        /// Raw mode bits (0 where the platform has none).
        mode: u32,
    },

    /// Removing a directory child failed.
    #[error("cannot remove {path}: {source}")]
    Remove {
        /// The child that could not be removed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl FsUtilError {
    /// Returns the underlying I/O error, if this failure carries one.
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::Stat { source, .. }
            | Self::Open { source, .. }
            | Self::Create { source, .. }
            | Self::ExtractEntry { source, .. }
            | Self::Symlink { source, .. }
            | Self::Remove { source, .. }
            | Self::Io(source) => Some(source),
            Self::ArchiveOpen {
                source: zip::result::ZipError::Io(source),
                ..
            } => Some(source),
            _ => None,
        }
    }

    /// Returns `true` if the failure was caused by a missing path.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsutil::copy_file;
    ///
    /// let err = copy_file("/definitely/not/here", "/tmp/out").unwrap_err();
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.io_error()
            .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
    }

    /// Returns the path this failure concerns, when one is known.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stat { path, .. }
            | Self::Open { path, .. }
            | Self::Create { path, .. }
            | Self::NotADirectory { path }
            | Self::ArchiveOpen { path, .. }
            | Self::Symlink { path, .. }
            | Self::UnsupportedFileType { path, .. }
            | Self::Remove { path, .. } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = FsUtilError::InvalidArgument("source path must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid argument: source path must not be empty"
        );
        assert!(err.path().is_none());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_stat_not_found() {
        let err = FsUtilError::Stat {
            path: PathBuf::from("missing.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.is_not_found());
        assert_eq!(err.path(), Some(Path::new("missing.txt")));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_symlink_display() {
        let err = FsUtilError::Symlink {
            path: PathBuf::from("link"),
            op: SymlinkOp::Create,
            source: io::Error::from(io::ErrorKind::AlreadyExists),
        };
        assert!(err.to_string().starts_with("unable to replicate symlink link"));
    }

    #[test]
    fn test_unsupported_file_type_display() {
        let err = FsUtilError::UnsupportedFileType {
            path: PathBuf::from("/tmp/fifo"),
            kind: "fifo",
            mode: 0o010_644,
        };
        let msg = err.to_string();
        assert!(msg.contains("fifo"));
        assert!(msg.contains("0o10644"));
    }

    #[test]
    fn test_archive_open_exposes_io_error() {
        let err = FsUtilError::ArchiveOpen {
            path: PathBuf::from("a.zip"),
            source: zip::result::ZipError::Io(io::Error::from(io::ErrorKind::NotFound)),
        };
        assert!(err.is_not_found());

        let err = FsUtilError::ArchiveOpen {
            path: PathBuf::from("a.zip"),
            source: zip::result::ZipError::InvalidArchive("bad header".into()),
        };
        assert!(err.io_error().is_none());
    }

    #[test]
    fn test_unsafe_entry_path_display() {
        let err = FsUtilError::UnsafeEntryPath {
            entry: "../etc/passwd".to_string(),
        };
        assert!(err.to_string().contains("../etc/passwd"));
    }
}

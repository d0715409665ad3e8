//! Test helpers for building zip archives and directory fixtures.
//!
//! # Panics
//!
//! All functions in this module panic on I/O errors; they are only compiled
//! for tests.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::fs;
use std::io::Cursor;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use zip::write::SimpleFileOptions;

/// Builder for in-memory ZIP archives.
///
/// Files are stored uncompressed with mode 0o644 unless a mode is given;
/// directories get mode 0o755.
pub struct ZipTestBuilder {
    zip: zip::ZipWriter<Cursor<Vec<u8>>>,
}

impl ZipTestBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zip: zip::ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Adds a regular file.
    #[must_use]
    pub fn add_file(self, path: &str, data: &[u8]) -> Self {
        self.add_file_with_mode(path, data, 0o644)
    }

    /// Adds a regular file with a custom mode.
    #[must_use]
    pub fn add_file_with_mode(mut self, path: &str, data: &[u8], mode: u32) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored)
            .unix_permissions(mode);

        self.zip.start_file(path, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Adds a deflate-compressed file.
    #[must_use]
    pub fn add_deflated_file(mut self, path: &str, data: &[u8]) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .unix_permissions(0o644);

        self.zip.start_file(path, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Adds a directory marker.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        let options = SimpleFileOptions::default().unix_permissions(0o755);
        self.zip.add_directory(path, options).unwrap();
        self
    }

    /// Builds and returns the archive bytes.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.zip.finish().unwrap().into_inner()
    }
}

impl Default for ZipTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes the built archive to `dir/name` and returns its path.
pub fn write_archive(dir: &Path, name: &str, builder: ZipTestBuilder) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, builder.build()).unwrap();
    path
}

/// Creates a small source tree under `root`:
///
/// ```text
/// root/a.txt
/// root/sub/b.txt
/// root/sub/deeper/c.txt
/// root/.Trashes/junk
/// ```
pub fn populate_tree(root: &Path) {
    fs::create_dir_all(root.join("sub/deeper")).unwrap();
    fs::create_dir_all(root.join(".Trashes")).unwrap();
    fs::write(root.join("a.txt"), b"alpha").unwrap();
    fs::write(root.join("sub/b.txt"), b"bravo").unwrap();
    fs::write(root.join("sub/deeper/c.txt"), b"charlie").unwrap();
    fs::write(root.join(".Trashes/junk"), b"trash").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_builder() {
        let data = ZipTestBuilder::new()
            .add_file("file.txt", b"content")
            .add_directory("dir/")
            .build();
        assert!(data.starts_with(b"PK\x03\x04"));
    }

    #[test]
    fn test_populate_tree() {
        let temp = tempfile::TempDir::new().unwrap();
        populate_tree(temp.path());
        assert!(temp.path().join("sub/deeper/c.txt").is_file());
        assert!(temp.path().join(".Trashes/junk").is_file());
    }
}

//! High-level public API.
//!
//! Thin generic wrappers over the format and ops modules so callers can pass
//! anything path-like.

use std::path::Path;

use crate::CopyOptions;
use crate::ExtractConfig;
use crate::ExtractionReport;
use crate::Result;
use crate::formats::extract_zip;
use crate::ops;

/// Extracts the zip archive at `archive_path` into `dest_dir` using the
/// default [`ExtractConfig`].
///
/// `dest_dir` is created (mode 0755) if missing.
///
/// # Examples
///
/// ```no_run
/// use fsutil::extract;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = extract("bundle.zip", "/tmp/bundle")?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    dest_dir: Q,
) -> Result<ExtractionReport> {
    extract_with_config(archive_path, dest_dir, &ExtractConfig::default())
}

/// Extracts the zip archive at `archive_path` into `dest_dir`.
pub fn extract_with_config<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    dest_dir: Q,
    config: &ExtractConfig,
) -> Result<ExtractionReport> {
    extract_zip(archive_path.as_ref(), dest_dir.as_ref(), config)
}

/// Returns `true` if `path` exists and can be stat'ed.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    ops::inspect::file_exists(path.as_ref())
}

/// Copies a regular file or symlink from `source` to `destination`.
///
/// # Examples
///
/// ```no_run
/// use fsutil::copy_file;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// copy_file("config.toml", "config.toml.bak")?;
/// # Ok(())
/// # }
/// ```
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> Result<()> {
    ops::copy_file::copy_file(source.as_ref(), destination.as_ref())
}

/// Copies the directory `source` to `destination`, skipping `.Trashes`.
///
/// Subdirectories are copied only when `recursive` is `true`.
pub fn copy_directory<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
    recursive: bool,
) -> Result<()> {
    copy_directory_with_options(
        source,
        destination,
        &CopyOptions::default().with_recursive(recursive),
    )
}

/// Copies the directory `source` to `destination` with explicit options.
pub fn copy_directory_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
    options: &CopyOptions,
) -> Result<()> {
    ops::copy_dir::copy_directory(source.as_ref(), destination.as_ref(), options)
}

/// Returns whether the directory at `path` has no entries.
pub fn is_empty<P: AsRef<Path>>(path: P) -> Result<bool> {
    ops::inspect::is_empty(path.as_ref())
}

/// Removes everything inside the directory at `path`, keeping `path`.
pub fn remove_contents<P: AsRef<Path>>(path: P) -> Result<()> {
    ops::purge::remove_contents(path.as_ref())
}

//! ZIP archive extraction.

use std::fs::File;
use std::io;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use zip::result::ZipError;

use super::common;
use crate::ExtractConfig;
use crate::ExtractionReport;
use crate::FsUtilError;
use crate::Result;
use crate::config::DEST_DIR_MODE;
use crate::copy::CopyBuffer;

/// Extracts every entry of the zip archive at `archive_path` into `dest`.
///
/// Entries are materialized in archive order, each inside its own scope so
/// that the entry reader and destination file are released before the next
/// entry is opened. The first failing entry stops the extraction; anything
/// written before it stays on disk.
///
/// # Errors
///
/// - [`FsUtilError::ArchiveOpen`] if the archive is missing or not a zip.
/// - [`FsUtilError::Create`] if `dest` cannot be created.
/// - [`FsUtilError::UnsafeEntryPath`] for an escaping entry name, unless
///   `config.allow_unsafe_paths` is set.
/// - [`FsUtilError::ExtractEntry`] for any per-entry read or write failure.
pub fn extract_zip(
    archive_path: &Path,
    dest: &Path,
    config: &ExtractConfig,
) -> Result<ExtractionReport> {
    let start = Instant::now();

    let file = File::open(archive_path).map_err(|e| FsUtilError::ArchiveOpen {
        path: archive_path.to_path_buf(),
        source: ZipError::Io(e),
    })?;
    let mut archive =
        zip::ZipArchive::new(BufReader::new(file)).map_err(|e| FsUtilError::ArchiveOpen {
            path: archive_path.to_path_buf(),
            source: e,
        })?;

    common::create_directory(dest, DEST_DIR_MODE).map_err(|e| FsUtilError::Create {
        path: dest.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(
        archive = %archive_path.display(),
        dest = %dest.display(),
        entries = archive.len(),
        "extracting zip archive"
    );

    let mut report = ExtractionReport::new();
    let mut buffer = CopyBuffer::new();

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| FsUtilError::ExtractEntry {
                entry: format!("#{index}"),
                source: io::Error::other(e),
            })?;

        let name = entry.name().to_string();
        let output_path = resolve_entry_path(dest, &name, entry.enclosed_name(), config)?;
        let is_dir = entry.is_dir();
        let mode = config.entry_mode(entry.unix_mode(), is_dir);

        let entry_err = |source: io::Error| FsUtilError::ExtractEntry {
            entry: name.clone(),
            source,
        };

        if is_dir {
            tracing::debug!(entry = %name, mode, "creating directory");
            common::create_directory(&output_path, mode).map_err(entry_err)?;
            report.directories_created += 1;
        } else {
            tracing::debug!(entry = %name, size = entry.size(), "writing file");
            let file_mode = config.preserve_permissions.then_some(mode);
            let written = common::write_file(&mut entry, &output_path, file_mode, &mut buffer)
                .map_err(entry_err)?;
            report.files_extracted += 1;
            report.bytes_written += written;
        }
    }

    report.duration = start.elapsed();
    tracing::debug!(
        files = report.files_extracted,
        directories = report.directories_created,
        bytes = report.bytes_written,
        "zip extraction finished"
    );

    Ok(report)
}

fn resolve_entry_path(
    dest: &Path,
    name: &str,
    enclosed: Option<PathBuf>,
    config: &ExtractConfig,
) -> Result<PathBuf> {
    if config.allow_unsafe_paths {
        return Ok(common::join_unchecked(dest, name));
    }

    enclosed
        .map(|relative| dest.join(relative))
        .ok_or_else(|| FsUtilError::UnsafeEntryPath {
            entry: name.to_string(),
        })
}

//! Small synchronous filesystem helpers.
//!
//! `fsutil` covers the chores that surround handling archives and directory
//! trees: sniffing whether a stream is compressed, unpacking zip files,
//! copying files and trees (symlinks kept as links), and checking or clearing
//! directories. Every call is a blocking sequence of filesystem operations
//! that either completes or stops at the first error.
//!
//! # Examples
//!
//! ```no_run
//! use std::fs::File;
//! use fsutil::{extract, is_compressed, is_empty};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut upload = File::open("upload.bin")?;
//! if is_compressed(Some(&mut upload)) {
//!     extract("upload.bin", "/srv/unpacked")?;
//! }
//! assert!(!is_empty("/srv/unpacked")?);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod copy;
pub mod error;
pub mod formats;
pub mod ops;
pub mod report;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export main API
pub use api::copy_directory;
pub use api::copy_directory_with_options;
pub use api::copy_file;
pub use api::extract;
pub use api::extract_with_config;
pub use api::file_exists;
pub use api::is_empty;
pub use api::remove_contents;
pub use config::CopyOptions;
pub use config::ExtractConfig;
pub use error::FsUtilError;
pub use error::Result;
pub use error::SymlinkOp;
pub use formats::ContentType;
pub use formats::detect::is_compressed;
pub use formats::detect::sniff;
pub use report::ExtractionReport;

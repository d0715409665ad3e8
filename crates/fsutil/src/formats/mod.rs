//! Content detection and archive extraction.

pub(crate) mod common;
pub mod detect;
pub mod zip;

pub use detect::ContentType;
pub use self::zip::extract_zip;

//! Options for extraction and directory copy.

/// Mode applied to the extraction root when it has to be created.
pub const DEST_DIR_MODE: u32 = 0o755;

/// Configuration for zip extraction.
///
/// The default rejects entries whose names would land outside the
/// destination directory. Use [`ExtractConfig::permissive`] for archives from
/// trusted sources that must be unpacked exactly as named.
///
/// # Examples
///
/// ```
/// use fsutil::ExtractConfig;
///
/// let config = ExtractConfig::default();
/// assert!(!config.allow_unsafe_paths);
///
/// let custom = ExtractConfig {
///     preserve_permissions: false,
///     ..Default::default()
/// };
/// assert!(!custom.preserve_permissions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Join raw entry names onto the destination without checking for
    /// absolute paths or `..` escapes.
    pub allow_unsafe_paths: bool,

    /// Apply the mode stored in each entry to the extracted file.
    pub preserve_permissions: bool,

    /// Mode for file entries that carry no unix mode.
    pub default_file_mode: u32,

    /// Mode for directory entries that carry no unix mode.
    pub default_dir_mode: u32,
}

impl Default for ExtractConfig {
    /// Default values:
    /// - `allow_unsafe_paths`: false
    /// - `preserve_permissions`: true
    /// - `default_file_mode`: 0o644
    /// - `default_dir_mode`: 0o755
    fn default() -> Self {
        Self {
            allow_unsafe_paths: false,
            preserve_permissions: true,
            default_file_mode: 0o644,
            default_dir_mode: DEST_DIR_MODE,
        }
    }
}

impl ExtractConfig {
    /// Configuration that joins entry names verbatim.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            allow_unsafe_paths: true,
            ..Default::default()
        }
    }

    /// Resolves the permission bits for an entry, falling back to the
    /// configured default. File-type bits are stripped.
    #[must_use]
    pub fn entry_mode(&self, stored: Option<u32>, is_dir: bool) -> u32 {
        let fallback = if is_dir {
            self.default_dir_mode
        } else {
            self.default_file_mode
        };
        stored.map_or(fallback, |mode| mode & 0o7777)
    }
}

/// Options for [`copy_directory_with_options`](crate::copy_directory_with_options).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyOptions {
    /// Descend into subdirectories. When unset only the top-level
    /// non-directory children are copied.
    pub recursive: bool,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self { recursive: true }
    }
}

impl CopyOptions {
    /// Sets whether subdirectories are copied.
    #[must_use]
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

//! Content sniffing from a leading byte window.
//!
//! Classification looks only at the first [`SNIFF_LEN`] bytes and matches
//! exact-prefix signatures, falling back to a text/binary decision. Only the
//! gzip and zip classifications count as compressed.

use std::io::Read;
use std::io::Seek;

/// Size of the sniffing window in bytes.
pub const SNIFF_LEN: usize = 512;

/// Content classification produced by [`sniff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// Gzip stream.
    Gzip,
    /// ZIP container.
    Zip,
    /// RAR container (v4 or v5).
    Rar,
    /// PDF document.
    Pdf,
    /// PNG image.
    Png,
    /// GIF image.
    Gif,
    /// JPEG image.
    Jpeg,
    /// WebAssembly module.
    Wasm,
    /// No binary control bytes in the window.
    Text,
    /// Anything else.
    Binary,
}

impl ContentType {
    /// Returns the MIME type for this classification.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Gzip => "application/x-gzip",
            Self::Zip => "application/zip",
            Self::Rar => "application/x-rar-compressed",
            Self::Pdf => "application/pdf",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Jpeg => "image/jpeg",
            Self::Wasm => "application/wasm",
            Self::Text => "text/plain; charset=utf-8",
            Self::Binary => "application/octet-stream",
        }
    }

    /// Returns `true` for the archive classifications treated as compressed.
    #[must_use]
    pub const fn is_compressed(self) -> bool {
        matches!(self, Self::Gzip | Self::Zip)
    }
}

const SIGNATURES: &[(&[u8], ContentType)] = &[
    (b"%PDF-", ContentType::Pdf),
    (b"GIF87a", ContentType::Gif),
    (b"GIF89a", ContentType::Gif),
    (b"\x89PNG\x0D\x0A\x1A\x0A", ContentType::Png),
    (b"\xFF\xD8\xFF", ContentType::Jpeg),
    (b"\x1F\x8B\x08", ContentType::Gzip),
    (b"PK\x03\x04", ContentType::Zip),
    (b"Rar!\x1A\x07\x00", ContentType::Rar),
    (b"Rar!\x1A\x07\x01\x00", ContentType::Rar),
    (b"\x00asm", ContentType::Wasm),
];

/// Classifies a byte window. Bytes past [`SNIFF_LEN`] are ignored.
///
/// # Examples
///
/// ```
/// use fsutil::formats::detect::{ContentType, sniff};
///
/// assert_eq!(sniff(b"PK\x03\x04rest"), ContentType::Zip);
/// assert_eq!(sniff(b"plain words"), ContentType::Text);
/// ```
#[must_use]
pub fn sniff(data: &[u8]) -> ContentType {
    let window = &data[..data.len().min(SNIFF_LEN)];

    if let Some((_, kind)) = SIGNATURES.iter().find(|(sig, _)| window.starts_with(sig)) {
        return *kind;
    }

    if window.iter().copied().any(is_binary_byte) {
        ContentType::Binary
    } else {
        ContentType::Text
    }
}

const fn is_binary_byte(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}

/// Reports whether `source` starts with a gzip or zip signature.
///
/// Reads at most [`SNIFF_LEN`] bytes from the current position, then rewinds
/// the source to offset 0 whatever the outcome. `None`, an empty source, and
/// any read or seek failure all yield `false`; failures are logged, never
/// returned.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use fsutil::is_compressed;
///
/// let mut gz = Cursor::new(vec![0x1F, 0x8B, 0x08, 0x00]);
/// assert!(is_compressed(Some(&mut gz)));
/// assert_eq!(gz.position(), 0);
///
/// assert!(!is_compressed(None::<&mut Cursor<Vec<u8>>>));
/// ```
pub fn is_compressed<R: Read + Seek>(source: Option<&mut R>) -> bool {
    let Some(source) = source else {
        return false;
    };

    let mut window = Vec::with_capacity(SNIFF_LEN);
    let read = source
        .by_ref()
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut window);

    if let Err(e) = source.rewind() {
        tracing::warn!(error = %e, "failed to rewind sniffed source");
        return false;
    }

    match read {
        Ok(0) => false,
        Ok(_) => sniff(&window).is_compressed(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read sniffing window");
            false
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io;
    use std::io::Cursor;
    use std::io::SeekFrom;

    #[test]
    fn test_sniff_zip() {
        let header = [0x50, 0x4B, 0x03, 0x04, 0x14, 0x00, 0x00, 0x00];
        assert_eq!(sniff(&header), ContentType::Zip);
        assert_eq!(sniff(&header).mime_type(), "application/zip");
    }

    #[test]
    fn test_sniff_gzip() {
        let header = [0x1F, 0x8B, 0x08, 0x00];
        assert_eq!(sniff(&header), ContentType::Gzip);
        assert_eq!(sniff(&header).mime_type(), "application/x-gzip");
    }

    #[test]
    fn test_sniff_gzip_requires_deflate_method_byte() {
        assert_ne!(sniff(&[0x1F, 0x8B, 0x00]), ContentType::Gzip);
        assert_ne!(sniff(&[0x1F, 0x8B]), ContentType::Gzip);
    }

    #[test]
    fn test_sniff_rar_is_not_compressed() {
        let kind = sniff(b"Rar!\x1A\x07\x00\x00\x00");
        assert_eq!(kind, ContentType::Rar);
        assert!(!kind.is_compressed());

        assert_eq!(sniff(b"Rar!\x1A\x07\x01\x00"), ContentType::Rar);
    }

    #[test]
    fn test_sniff_images_and_documents() {
        assert_eq!(sniff(b"%PDF-1.7\n"), ContentType::Pdf);
        assert_eq!(sniff(b"\x89PNG\r\n\x1A\n\0\0"), ContentType::Png);
        assert_eq!(sniff(b"GIF89a...."), ContentType::Gif);
        assert_eq!(sniff(b"\xFF\xD8\xFF\xE0"), ContentType::Jpeg);
        assert_eq!(sniff(b"\0asm\x01\0\0\0"), ContentType::Wasm);
    }

    #[test]
    fn test_sniff_text_and_binary() {
        assert_eq!(sniff(b"hello\nworld\t!\r\n"), ContentType::Text);
        assert_eq!(sniff(b""), ContentType::Text);
        assert_eq!(sniff(&[0xDE, 0xAD, 0xBE, 0xEF, 0x00]), ContentType::Binary);
    }

    #[test]
    fn test_sniff_ignores_bytes_past_window() {
        let mut data = vec![b'a'; SNIFF_LEN];
        data.push(0x00);
        assert_eq!(sniff(&data), ContentType::Text);
    }

    #[test]
    fn test_is_compressed_none() {
        assert!(!is_compressed(None::<&mut Cursor<Vec<u8>>>));
    }

    #[test]
    fn test_is_compressed_empty_source() {
        let mut source = Cursor::new(Vec::new());
        assert!(!is_compressed(Some(&mut source)));
        assert_eq!(source.position(), 0);
    }

    #[test]
    fn test_is_compressed_short_zip() {
        let mut source = Cursor::new(b"PK\x03\x04".to_vec());
        assert!(is_compressed(Some(&mut source)));
        assert_eq!(source.position(), 0);
    }

    #[test]
    fn test_is_compressed_rewinds_long_source() {
        let mut data = vec![0x1F, 0x8B, 0x08];
        data.resize(4096, 0);
        let mut source = Cursor::new(data);

        assert!(is_compressed(Some(&mut source)));
        assert_eq!(source.position(), 0);
    }

    #[test]
    fn test_is_compressed_text_is_false() {
        let mut source = Cursor::new(b"just some text".to_vec());
        assert!(!is_compressed(Some(&mut source)));
        assert_eq!(source.position(), 0);
    }

    #[test]
    fn test_is_compressed_read_error_is_false() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("device gone"))
            }
        }

        impl Seek for Broken {
            fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
                Ok(0)
            }
        }

        assert!(!is_compressed(Some(&mut Broken)));
    }

    #[test]
    fn test_is_compressed_file() {
        use std::io::Write;

        let mut file = tempfile::tempfile().unwrap();
        file.write_all(b"PK\x03\x04\x14\x00").unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();

        assert!(is_compressed(Some(&mut file)));
        assert_eq!(file.stream_position().unwrap(), 0);
    }
}

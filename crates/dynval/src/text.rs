// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Stream-to-text reading with encoding and BOM handling.

use std::fmt;
use std::io::Read;
use std::string::{FromUtf16Error, FromUtf8Error};

const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Supported text encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
}

/// Options for [`read_text_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextReadOptions {
    /// Encoding assumed for the payload.
    pub encoding: TextEncoding,
    /// When set, a leading byte-order mark overrides `encoding` and is
    /// stripped from the output. When clear, bytes decode exactly as
    /// configured and a BOM survives as U+FEFF.
    pub detect_bom: bool,
    /// Read chunk size in bytes.
    pub buffer_size: usize,
}

impl Default for TextReadOptions {
    fn default() -> Self {
        Self {
            encoding: TextEncoding::Utf8,
            detect_bom: true,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl TextReadOptions {
    /// Default options: UTF-8, BOM detection on, 8 KiB chunks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the assumed encoding.
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Enable or disable BOM detection.
    pub fn with_detect_bom(mut self, detect: bool) -> Self {
        self.detect_bom = detect;
        self
    }

    /// Set the read chunk size.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }
}

/// Errors for text reading.
#[derive(Debug)]
pub enum TextReadError {
    Io(std::io::Error),
    Utf8(FromUtf8Error),
    Utf16(FromUtf16Error),
    TruncatedUtf16 { len: usize },
}

impl fmt::Display for TextReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "read error: {}", e),
            Self::Utf8(e) => write!(f, "UTF-8 error: {}", e),
            Self::Utf16(e) => write!(f, "UTF-16 error: {}", e),
            Self::TruncatedUtf16 { len } => {
                write!(f, "truncated UTF-16 payload: {} bytes", len)
            }
        }
    }
}

impl std::error::Error for TextReadError {}

impl From<std::io::Error> for TextReadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<FromUtf8Error> for TextReadError {
    fn from(e: FromUtf8Error) -> Self {
        Self::Utf8(e)
    }
}

impl From<FromUtf16Error> for TextReadError {
    fn from(e: FromUtf16Error) -> Self {
        Self::Utf16(e)
    }
}

/// Drain the reader to EOF and decode it with the default options
/// (UTF-8, BOM detection on).
///
/// The reader's position advances to its end; calling again on the
/// exhausted reader yields the empty string.
pub fn read_text<R: Read>(reader: R) -> Result<String, TextReadError> {
    read_text_with(reader, &TextReadOptions::default())
}

/// Drain the reader to EOF and decode it per `options`.
pub fn read_text_with<R: Read>(
    mut reader: R,
    options: &TextReadOptions,
) -> Result<String, TextReadError> {
    let mut bytes = Vec::new();
    let mut chunk = vec![0u8; options.buffer_size.max(1)];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => bytes.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    let (encoding, payload) = if options.detect_bom {
        sniff_bom(&bytes, options.encoding)
    } else {
        (options.encoding, &bytes[..])
    };
    decode(payload, encoding)
}

/// A recognized BOM wins over the configured encoding and is consumed.
fn sniff_bom(bytes: &[u8], fallback: TextEncoding) -> (TextEncoding, &[u8]) {
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        (TextEncoding::Utf8, &bytes[3..])
    } else if bytes.starts_with(&[0xFF, 0xFE]) {
        (TextEncoding::Utf16Le, &bytes[2..])
    } else if bytes.starts_with(&[0xFE, 0xFF]) {
        (TextEncoding::Utf16Be, &bytes[2..])
    } else {
        (fallback, bytes)
    }
}

fn decode(bytes: &[u8], encoding: TextEncoding) -> Result<String, TextReadError> {
    match encoding {
        TextEncoding::Utf8 => Ok(String::from_utf8(bytes.to_vec())?),
        TextEncoding::Utf16Le | TextEncoding::Utf16Be => {
            if bytes.len() % 2 != 0 {
                return Err(TextReadError::TruncatedUtf16 { len: bytes.len() });
            }
            let units: Vec<u16> = bytes
                .chunks_exact(2)
                .map(|pair| {
                    if encoding == TextEncoding::Utf16Le {
                        u16::from_le_bytes([pair[0], pair[1]])
                    } else {
                        u16::from_be_bytes([pair[0], pair[1]])
                    }
                })
                .collect();
            Ok(String::from_utf16(&units)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_utf8() {
        let mut cursor = Cursor::new("Hello 世界".as_bytes().to_vec());
        assert_eq!(read_text(&mut cursor).unwrap(), "Hello 世界");
        // Exhausted reader yields the empty string.
        assert_eq!(read_text(&mut cursor).unwrap(), "");
    }

    #[test]
    fn test_read_utf8_bom_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("hi".as_bytes());
        assert_eq!(read_text(Cursor::new(bytes)).unwrap(), "hi");
    }

    #[test]
    fn test_bom_overrides_configured_encoding() {
        // UTF-16LE BOM + "ab", read with UTF-8 configured.
        let bytes = vec![0xFF, 0xFE, b'a', 0x00, b'b', 0x00];
        assert_eq!(read_text(Cursor::new(bytes)).unwrap(), "ab");

        // UTF-16BE BOM.
        let bytes = vec![0xFE, 0xFF, 0x00, b'a', 0x00, b'b'];
        assert_eq!(read_text(Cursor::new(bytes)).unwrap(), "ab");
    }

    #[test]
    fn test_detection_off_keeps_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("hi".as_bytes());
        let options = TextReadOptions::new().with_detect_bom(false);
        assert_eq!(
            read_text_with(Cursor::new(bytes), &options).unwrap(),
            "\u{feff}hi"
        );
    }

    #[test]
    fn test_read_utf16_without_bom() {
        let bytes = vec![b'h', 0x00, b'i', 0x00];
        let options = TextReadOptions::new().with_encoding(TextEncoding::Utf16Le);
        assert_eq!(read_text_with(Cursor::new(bytes), &options).unwrap(), "hi");

        let bytes = vec![0x00, b'h', 0x00, b'i'];
        let options = TextReadOptions::new().with_encoding(TextEncoding::Utf16Be);
        assert_eq!(read_text_with(Cursor::new(bytes), &options).unwrap(), "hi");
    }

    #[test]
    fn test_truncated_utf16() {
        let bytes = vec![b'h', 0x00, b'i'];
        let options = TextReadOptions::new().with_encoding(TextEncoding::Utf16Le);
        assert!(matches!(
            read_text_with(Cursor::new(bytes), &options),
            Err(TextReadError::TruncatedUtf16 { len: 3 })
        ));
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let bytes = vec![b'h', 0xFF, b'i'];
        assert!(matches!(
            read_text(Cursor::new(bytes)),
            Err(TextReadError::Utf8(_))
        ));
    }

    #[test]
    fn test_unpaired_surrogate_is_an_error() {
        // Lone high surrogate 0xD800.
        let bytes = vec![0x00, 0xD8];
        let options = TextReadOptions::new()
            .with_encoding(TextEncoding::Utf16Le)
            .with_detect_bom(false);
        assert!(matches!(
            read_text_with(Cursor::new(bytes), &options),
            Err(TextReadError::Utf16(_))
        ));
    }

    #[test]
    fn test_small_buffer_size() {
        let payload = "x".repeat(10_000);
        let options = TextReadOptions::new().with_buffer_size(7);
        assert_eq!(
            read_text_with(Cursor::new(payload.clone().into_bytes()), &options).unwrap(),
            payload
        );
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(read_text(Cursor::new(Vec::new())).unwrap(), "");
    }

    #[test]
    fn test_read_from_file() {
        use std::io::{Seek, Write};

        let mut file = tempfile::tempfile().expect("tempfile");
        file.write_all("line one\nline two".as_bytes()).expect("write");
        file.flush().expect("flush");

        file.rewind().expect("rewind");
        assert_eq!(read_text(&mut file).unwrap(), "line one\nline two");
        assert_eq!(read_text(&mut file).unwrap(), "");
    }
}

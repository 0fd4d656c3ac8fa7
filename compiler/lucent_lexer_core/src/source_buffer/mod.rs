//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the cursor can detect EOF without explicit bounds checks. The total
//! size is rounded up to the next 64-byte boundary, which also leaves safe
//! padding for [`Cursor::peek`](crate::Cursor::peek) at the end of input.
//!
//! # Encoding Detection
//!
//! Construction records encoding problems as [`EncodingIssue`] values:
//! - UTF-8 BOM (Lucent sources are plain UTF-8)
//! - UTF-16 BOMs (wrong encoding)
//! - Interior null bytes
//!
//! They do not stop scanning. Callers such as the CLI surface them as
//! warnings.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Encoding issues detected during construction.
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    /// What kind of encoding issue was detected.
    pub kind: EncodingIssueKind,
    /// Byte position in the source where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

/// Kind of encoding issue detected in a source buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at start.
    Utf8Bom,
    /// UTF-16 Little-Endian BOM (`0xFF 0xFE`) at start.
    Utf16LeBom,
    /// UTF-16 Big-Endian BOM (`0xFE 0xFF`) at start.
    Utf16BeBom,
    /// Null byte (U+0000) in source content.
    InteriorNull,
}

impl EncodingIssueKind {
    /// Short human-readable description.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Utf8Bom => "UTF-8 byte order mark",
            Self::Utf16LeBom => "UTF-16 little-endian byte order mark",
            Self::Utf16BeBom => "UTF-16 big-endian byte order mark",
            Self::InteriorNull => "null byte in source",
        }
    }
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source text.
    ///
    /// Sources larger than `u32::MAX` bytes are accepted but `source_len`
    /// saturates at `u32::MAX`; content past that point is never scanned.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding stay 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let mut encoding_issues = Vec::new();
        detect_bom(source_bytes, &mut encoding_issues);
        detect_interior_nulls(source_bytes, &mut encoding_issues);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            encoding_issues,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Encoding issues detected during construction.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }
}

/// Detect byte order marks at the start of the source.
fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    let bom = match source {
        [0xEF, 0xBB, 0xBF, ..] => Some((EncodingIssueKind::Utf8Bom, 3)),
        [0xFF, 0xFE, ..] => Some((EncodingIssueKind::Utf16LeBom, 2)),
        [0xFE, 0xFF, ..] => Some((EncodingIssueKind::Utf16BeBom, 2)),
        _ => None,
    };
    if let Some((kind, len)) = bom {
        issues.push(EncodingIssue { kind, pos: 0, len });
    }
}

/// Detect null bytes (U+0000) within the source content.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    issues.extend(
        memchr::memchr_iter(0, source)
            .filter_map(|pos| u32::try_from(pos).ok())
            .map(|pos| EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos,
                len: 1,
            }),
    );
}

#[cfg(test)]
mod tests;

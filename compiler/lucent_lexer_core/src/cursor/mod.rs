//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor advances byte-by-byte and remembers where the current line
//! started, so the indentation scanner can ask for the column. EOF is the
//! sentinel (`0x00`) at `pos >= source_len`; a null at `pos < source_len`
//! is an interior null and is treated as ordinary content.

/// Byte cursor over a sentinel-terminated buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so hosts snapshot it freely for rewinding.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Byte index of the first byte of the current line.
    line_start: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// &[u8] = 16 (fat pointer), 3 x u32 = 12, + 4 padding.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    ///
    /// # Contract
    ///
    /// `buf[source_len]` must be `0x00` and so must all padding bytes.
    /// Guaranteed by [`SourceBuffer::new()`](crate::SourceBuffer::new).
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            line_start: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe at any position up to EOF: padding follows the sentinel.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf.get(self.pos as usize + 1).copied().unwrap_or(0)
    }

    /// Returns the full character at the current position, or `None` at EOF.
    ///
    /// Invalid UTF-8 (only possible when the source was truncated at
    /// `u32::MAX`) decodes to `U+FFFD`.
    pub fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        let byte = self.current();
        if byte.is_ascii() {
            return Some(char::from(byte));
        }
        let start = self.pos as usize;
        let end = (start + Self::utf8_char_width(byte) as usize).min(self.source_len as usize);
        Some(
            std::str::from_utf8(&self.buf[start..end])
                .ok()
                .and_then(|s| s.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        )
    }

    /// Advance the cursor by one byte.
    ///
    /// Passing a `\n` starts a new line for [`column()`](Self::column).
    /// Does nothing at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        let byte = self.current();
        self.pos += 1;
        if byte == b'\n' {
            self.line_start = self.pos;
        }
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        for _ in 0..width {
            self.advance();
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Byte column of the current position; 0 at the start of a line.
    #[inline]
    pub fn column(&self) -> u32 {
        self.pos - self.line_start
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring as `&str`.
    ///
    /// Returns `""` if `start..end` does not fall on character boundaries
    /// within the source content.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        let end = end.min(self.source_len) as usize;
        let start = (start as usize).min(end);
        std::str::from_utf8(&self.buf[start..end]).unwrap_or("")
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at EOF regardless of `pred`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Advance past horizontal whitespace (spaces and tabs).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| b == b' ' || b == b'\t');
    }

    /// Advance to the next `\n` byte or EOF.
    ///
    /// The newline itself is not consumed, so the line start is unchanged.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }
}

//! Character lookahead consumed by the indentation scanner.
//!
//! The scanner never owns input. It reads through [`Lookahead`], which a
//! parser host implements over its own buffer. The contract mirrors an
//! external-scanner lexer: one character of lookahead, an advance that can
//! mark characters as skipped trivia, and an explicit end-of-token mark.

use crate::Cursor;

/// Lookahead over the host's remaining input.
pub trait Lookahead {
    /// The next character, or `None` at end of input.
    fn lookahead(&self) -> Option<char>;

    /// Consume the lookahead character.
    ///
    /// With `skip`, the character is trivia and the token start moves past
    /// it. Does nothing at end of input.
    fn advance(&mut self, skip: bool);

    /// Record the current position as the end of the token being scanned.
    ///
    /// If never called, the token ends wherever the lookahead stopped.
    fn mark_end(&mut self);

    /// Column of the lookahead character; 0 at the start of a line.
    fn column(&self) -> u32;
}

/// Half-open byte range `start..end` in the source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Inclusive start offset.
    pub start: u32,
    /// Exclusive end offset.
    pub end: u32,
}

impl Span {
    /// Create a span from `start` to `end`.
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `pos`.
    pub const fn point(pos: u32) -> Self {
        Self::new(pos, pos)
    }

    /// Byte length of the span.
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` for zero-width spans.
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// [`Lookahead`] over a [`Cursor`].
///
/// Tracks the token start and a cursor snapshot at the end mark, so that
/// after a successful scan the host can resume exactly at the token end.
#[derive(Clone, Copy, Debug)]
pub struct SourceLookahead<'a> {
    cursor: Cursor<'a>,
    token_start: u32,
    marked: Option<Cursor<'a>>,
}

impl<'a> SourceLookahead<'a> {
    /// Start a token at the cursor's position.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            token_start: cursor.pos(),
            marked: None,
        }
    }

    /// Current read position (may be past the end mark).
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Finish the token: its span and a cursor positioned at its end.
    ///
    /// Trivia skipped after the end mark would put the start past the end;
    /// the start is clamped so the span is zero-width at the mark.
    pub fn finish(self) -> (Span, Cursor<'a>) {
        let end = self.marked.unwrap_or(self.cursor);
        let start = self.token_start.min(end.pos());
        (Span::new(start, end.pos()), end)
    }
}

impl Lookahead for SourceLookahead<'_> {
    #[inline]
    fn lookahead(&self) -> Option<char> {
        self.cursor.current_char()
    }

    #[inline]
    fn advance(&mut self, skip: bool) {
        self.cursor.advance_char();
        if skip {
            self.token_start = self.cursor.pos();
        }
    }

    #[inline]
    fn mark_end(&mut self) {
        self.marked = Some(self.cursor);
    }

    #[inline]
    fn column(&self) -> u32 {
        self.cursor.column()
    }
}

#[cfg(test)]
mod tests;

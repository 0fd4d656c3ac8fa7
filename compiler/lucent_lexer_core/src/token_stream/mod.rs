//! Reference host driving the indentation scanner over a whole document.
//!
//! A real parser decides per position which structural tokens are
//! acceptable. [`TokenStream`] stands in for it with the one rule the
//! Lucent grammar's `enclose` shape needs for a flat view: after a LEVEL a
//! statement must follow, so no structural token is acceptable there; at
//! every other position all three are.
//!
//! When the scanner declines a position, the stream does what the host
//! lexer would: skip whitespace and emit one ordinary token, either a `//`
//! comment or a [`StreamTag::Content`] run of non-whitespace bytes.
//! Keywords and operators are not distinguished. Comments are extras in the
//! grammar, so they do not satisfy the statement a LEVEL asks for.

use tracing::debug;

use crate::{
    Cursor, IndentScanner, IndentTag, SourceBuffer, SourceLookahead, Span, ValidTokens, STATE_SIZE,
};

/// Kind of token produced by [`TokenStream`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamTag {
    /// Structural `_open`.
    Open,
    /// Structural `_close`.
    Close,
    /// Structural `_level`.
    Level,
    /// A run of non-whitespace source bytes.
    Content,
    /// A `//` line comment, without its newline.
    Comment,
}

impl StreamTag {
    /// Upper-case display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Close => "CLOSE",
            Self::Level => "LEVEL",
            Self::Content => "CONTENT",
            Self::Comment => "COMMENT",
        }
    }

    /// Returns `true` for the three structural kinds.
    pub const fn is_structural(self) -> bool {
        !matches!(self, Self::Content | Self::Comment)
    }
}

impl From<IndentTag> for StreamTag {
    fn from(tag: IndentTag) -> Self {
        match tag {
            IndentTag::Open => Self::Open,
            IndentTag::Close => Self::Close,
            IndentTag::Level => Self::Level,
        }
    }
}

/// A token with its source span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StreamToken {
    pub tag: StreamTag,
    pub span: Span,
}

/// Saved stream position for rewinding.
///
/// The scanner state is stored in its serialized form, exactly as an
/// incremental parser would keep it between edits.
#[derive(Clone, Copy, Debug)]
pub struct Checkpoint<'a> {
    cursor: Cursor<'a>,
    state: [u8; STATE_SIZE],
    after_level: bool,
    finished: bool,
}

impl Checkpoint<'_> {
    /// Byte offset the stream will resume from.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }
}

/// Iterator of structural and content tokens over a [`SourceBuffer`].
pub struct TokenStream<'a> {
    cursor: Cursor<'a>,
    scanner: IndentScanner,
    /// The previous token was LEVEL; a statement must come next.
    after_level: bool,
    finished: bool,
}

impl<'a> TokenStream<'a> {
    /// Stream over `buffer` starting at the top level.
    pub fn new(buffer: &'a SourceBuffer) -> Self {
        Self {
            cursor: buffer.cursor(),
            scanner: IndentScanner::new(),
            after_level: false,
            finished: false,
        }
    }

    /// The scanner's current state.
    pub fn scanner(&self) -> &IndentScanner {
        &self.scanner
    }

    /// Structural tokens acceptable at the current position.
    pub fn valid_tokens(&self) -> ValidTokens {
        if self.after_level {
            ValidTokens::empty()
        } else {
            ValidTokens::all()
        }
    }

    /// Save the current position and scanner state.
    pub fn checkpoint(&self) -> Checkpoint<'a> {
        Checkpoint {
            cursor: self.cursor,
            state: self.scanner.to_bytes(),
            after_level: self.after_level,
            finished: self.finished,
        }
    }

    /// Return to a saved checkpoint; following tokens replay identically.
    pub fn rewind(&mut self, checkpoint: &Checkpoint<'a>) {
        debug!(pos = checkpoint.pos(), "rewinding token stream");
        self.cursor = checkpoint.cursor;
        self.scanner.restore(&checkpoint.state);
        self.after_level = checkpoint.after_level;
        self.finished = checkpoint.finished;
    }

    /// Offer the position to the indentation scanner.
    fn structural(&mut self) -> Option<StreamToken> {
        let valid = self.valid_tokens();
        if valid.is_empty() {
            return None;
        }
        let mut lookahead = SourceLookahead::new(self.cursor);
        let tag = self.scanner.scan(&mut lookahead, valid)?;
        let (span, end) = lookahead.finish();
        self.cursor = end;
        self.after_level = tag == IndentTag::Level;
        Some(StreamToken {
            tag: tag.into(),
            span,
        })
    }

    /// Ordinary tokenization: skip whitespace, then one comment or content run.
    fn ordinary(&mut self) -> Option<StreamToken> {
        self.cursor.eat_while(is_whitespace);
        if self.cursor.is_eof() {
            return None;
        }
        let start = self.cursor.pos();
        let tag = if self.at_comment() {
            self.cursor.eat_until_newline_or_eof();
            StreamTag::Comment
        } else {
            while !self.cursor.is_eof()
                && !is_whitespace(self.cursor.current())
                && !self.at_comment()
            {
                self.cursor.advance_char();
            }
            self.after_level = false;
            StreamTag::Content
        };
        Some(StreamToken {
            tag,
            span: Span::new(start, self.cursor.pos()),
        })
    }

    fn at_comment(&self) -> bool {
        self.cursor.current() == b'/' && self.cursor.peek() == b'/'
    }
}

impl Iterator for TokenStream<'_> {
    type Item = StreamToken;

    fn next(&mut self) -> Option<StreamToken> {
        if self.finished {
            return None;
        }
        let token = self.structural().or_else(|| self.ordinary());
        if token.is_none() {
            self.finished = true;
        }
        token
    }
}

#[inline]
fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Tokenize a whole document from the top level.
pub fn tokenize(source: &str) -> Vec<StreamToken> {
    let buffer = SourceBuffer::new(source);
    TokenStream::new(&buffer).collect()
}

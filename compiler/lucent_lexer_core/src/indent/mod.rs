//! Indentation state machine producing `_open`, `_close` and `_level`.
//!
//! The scanner keeps two counters:
//! - `current`: depth the token stream has committed to,
//! - `target`: depth measured from the most recently scanned line.
//!
//! Each call either steps `current` one level toward `target` (a zero-width
//! OPEN or CLOSE), or measures the next line's leading tabs. A line at the
//! committed depth yields LEVEL; any other depth becomes the new `target`
//! and the first step toward it is taken immediately. A drop of N levels
//! therefore produces N consecutive CLOSE tokens, one per call, before the
//! line's LEVEL.
//!
//! Only tabs count toward depth. Spaces are skipped without contributing,
//! blank lines restart the measurement, and end of input measures as depth
//! zero so every open block is closed.
//!
//! Depth is a single scalar, not a stack of widths: re-indenting to a depth
//! that was never opened before is indistinguishable from returning to one.

use thiserror::Error;
use tracing::trace;

use crate::{IndentTag, Lookahead, ValidTokens};

/// Size of the serialized state: two little-endian `u16` counters.
pub const STATE_SIZE: usize = 4;

/// Buffer size parser hosts provide to [`IndentScanner::serialize`].
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// Error converting between [`IndentScanner`] and its byte representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    /// The output buffer cannot hold the serialized state.
    #[error("serialization buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
    /// A strict restore was given a snapshot of the wrong length.
    #[error("scanner state must be exactly {expected} bytes, got {found}")]
    Length { expected: usize, found: usize },
}

/// Per-parse indentation state.
///
/// Construct one per parse session and pass it by `&mut` to every
/// [`scan`](Self::scan). Snapshots taken with [`to_bytes`](Self::to_bytes)
/// or [`serialize`](Self::serialize) restore exactly through
/// [`restore`](Self::restore).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IndentScanner {
    current: u16,
    target: u16,
}

impl IndentScanner {
    /// Scanner at the top level: `current = 0`, `target = 0`.
    pub const fn new() -> Self {
        Self {
            current: 0,
            target: 0,
        }
    }

    /// Scanner with explicit counters.
    pub const fn with_depths(current: u16, target: u16) -> Self {
        Self { current, target }
    }

    /// Depth committed by emitted OPEN/CLOSE tokens.
    #[inline]
    pub const fn current(&self) -> u16 {
        self.current
    }

    /// Depth measured from the last scanned line.
    #[inline]
    pub const fn target(&self) -> u16 {
        self.target
    }

    // ─── Serialization ──────────────────────────────────────────────────

    /// Fixed byte layout: `current` then `target`, little-endian.
    pub fn to_bytes(&self) -> [u8; STATE_SIZE] {
        let [c0, c1] = self.current.to_le_bytes();
        let [t0, t1] = self.target.to_le_bytes();
        [c0, c1, t0, t1]
    }

    /// Inverse of [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: [u8; STATE_SIZE]) -> Self {
        let [c0, c1, t0, t1] = bytes;
        Self {
            current: u16::from_le_bytes([c0, c1]),
            target: u16::from_le_bytes([t0, t1]),
        }
    }

    /// Write the state into `buffer` and return the number of bytes written.
    ///
    /// Always writes [`STATE_SIZE`] bytes. The buffer is left untouched if
    /// it is shorter than that.
    pub fn serialize(&self, buffer: &mut [u8]) -> Result<usize, StateError> {
        let Some(out) = buffer.get_mut(..STATE_SIZE) else {
            return Err(StateError::BufferTooSmall {
                needed: STATE_SIZE,
                available: buffer.len(),
            });
        };
        out.copy_from_slice(&self.to_bytes());
        Ok(STATE_SIZE)
    }

    /// Overwrite the leading bytes of the state from `buffer`.
    ///
    /// Copies `min(buffer.len(), STATE_SIZE)` bytes; bytes past that keep
    /// their current value, so an empty buffer is a no-op and a longer one
    /// is truncated.
    pub fn restore(&mut self, buffer: &[u8]) {
        let len = buffer.len().min(STATE_SIZE);
        let mut bytes = self.to_bytes();
        bytes[..len].copy_from_slice(&buffer[..len]);
        *self = Self::from_bytes(bytes);
    }

    // ─── Scanning ───────────────────────────────────────────────────────

    /// Try to produce one structural token at the lookahead position.
    ///
    /// Returns the emitted tag, or `None` when this is not an indentation
    /// boundary and the host should run its ordinary tokenizer. On success
    /// the token ends at the lookahead's end mark (or where it stands, if
    /// no mark was made). On `None` the host discards whatever was read.
    pub fn scan<L: Lookahead + ?Sized>(
        &mut self,
        lexer: &mut L,
        valid: ValidTokens,
    ) -> Option<IndentTag> {
        if let Some(tag) = self.step(valid) {
            return Some(tag);
        }

        if !valid.intersects(ValidTokens::all()) {
            return None;
        }

        lexer.mark_end();
        let length = measure_line(lexer)?;

        if valid.permits(IndentTag::Level) && length == self.current {
            trace!(depth = self.current, "level");
            return Some(IndentTag::Level);
        }

        self.target = length;
        self.step(valid)
    }

    /// Move `current` one level toward `target` if the grammar allows it.
    fn step(&mut self, valid: ValidTokens) -> Option<IndentTag> {
        if valid.permits(IndentTag::Open) && self.current < self.target {
            self.current += 1;
            trace!(current = self.current, target = self.target, "open");
            return Some(IndentTag::Open);
        }

        if valid.permits(IndentTag::Close) && self.current > self.target {
            self.current -= 1;
            trace!(current = self.current, target = self.target, "close");
            return Some(IndentTag::Close);
        }

        None
    }
}

impl TryFrom<&[u8]> for IndentScanner {
    type Error = StateError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; STATE_SIZE] = bytes.try_into().map_err(|_| StateError::Length {
            expected: STATE_SIZE,
            found: bytes.len(),
        })?;
        Ok(Self::from_bytes(bytes))
    }
}

/// Count the tabs in the indentation of the last line before content.
///
/// Newlines restart the count, so blank lines are passed over. End of
/// input measures as zero. Returns `None` if content appears before any
/// line start was seen: the lookahead is mid-line and this is not an
/// indentation position.
fn measure_line<L: Lookahead + ?Sized>(lexer: &mut L) -> Option<u16> {
    let mut new_line = lexer.column() == 0;
    let mut length: u16 = 0;
    loop {
        match lexer.lookahead() {
            None => return Some(0),
            Some('\n') => {
                lexer.advance(true);
                new_line = true;
                length = 0;
            }
            Some('\t') => {
                lexer.advance(true);
                length = length.saturating_add(1);
            }
            Some(' ') => lexer.advance(true),
            Some(_) if !new_line => return None,
            Some(_) => return Some(length),
        }
    }
}

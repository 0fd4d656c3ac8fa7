//! Structural token kinds and the permitted-token set.
//!
//! [`IndentTag`] discriminants follow the order of the `externals` array in
//! the Lucent grammar, so a host can index its `valid_symbols` array with
//! `tag as usize` and hand the result to [`ValidTokens::from_valid_symbols`].

use bitflags::bitflags;

/// A structural token produced by the indentation scanner.
///
/// All three kinds are zero-width: they carry block structure, not text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum IndentTag {
    /// Nesting increased by one level.
    Open = 0,
    /// Nesting decreased by one level.
    Close = 1,
    /// New line at the current nesting level.
    Level = 2,
}

impl IndentTag {
    /// Every tag, in grammar `externals` order.
    pub const ALL: [Self; 3] = [Self::Open, Self::Close, Self::Level];

    /// Grammar symbol name for this tag.
    pub const fn symbol_name(self) -> &'static str {
        match self {
            Self::Open => "_open",
            Self::Close => "_close",
            Self::Level => "_level",
        }
    }

    /// Returns the tag for a grammar `externals` index.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Open),
            1 => Some(Self::Close),
            2 => Some(Self::Level),
            _ => None,
        }
    }

    /// The single-bit [`ValidTokens`] set containing only this tag.
    pub const fn as_valid(self) -> ValidTokens {
        match self {
            Self::Open => ValidTokens::OPEN,
            Self::Close => ValidTokens::CLOSE,
            Self::Level => ValidTokens::LEVEL,
        }
    }
}

bitflags! {
    /// Structural tokens the grammar accepts at the current position.
    ///
    /// The parser computes this per position from its parse table; the
    /// scanner never emits a tag outside the set.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ValidTokens: u8 {
        /// An `_open` token is acceptable.
        const OPEN = 1 << 0;
        /// A `_close` token is acceptable.
        const CLOSE = 1 << 1;
        /// A `_level` token is acceptable.
        const LEVEL = 1 << 2;
    }
}

impl ValidTokens {
    /// Builds the set from a host's boolean array indexed by [`IndentTag`].
    ///
    /// Entries past the slice end count as not permitted. Extra entries
    /// (symbols this scanner does not produce) are ignored.
    pub fn from_valid_symbols(valid: &[bool]) -> Self {
        IndentTag::ALL
            .iter()
            .filter(|&&tag| valid.get(tag as usize).copied().unwrap_or(false))
            .fold(Self::empty(), |set, &tag| set | tag.as_valid())
    }

    /// Returns `true` if `tag` may be emitted.
    #[inline]
    pub fn permits(self, tag: IndentTag) -> bool {
        self.contains(tag.as_valid())
    }
}

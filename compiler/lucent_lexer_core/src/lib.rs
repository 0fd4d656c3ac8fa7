//! Indentation scanner for the Lucent grammar.
//!
//! Lucent blocks are delimited by tab indentation. The grammar declares three
//! external tokens (`_open`, `_close`, `_level`) and every indented construct
//! has the shape `OPEN item (LEVEL item)* CLOSE`. This crate produces those
//! tokens from leading whitespace so the parser never sees raw indentation.
//!
//! # Layers
//!
//! - [`IndentScanner`]: the two-counter state machine. Hosts call
//!   [`IndentScanner::scan`] once per tokenization attempt.
//! - [`Lookahead`]: the character lookahead the scanner reads from. Any host
//!   input buffer can implement it; [`SourceLookahead`] is the in-crate one.
//! - [`SourceBuffer`] / [`Cursor`]: sentinel-terminated source storage.
//! - [`TokenStream`]: a reference host that drives the scanner over a whole
//!   document, falling back to a minimal content tokenizer.
//!
//! # Example
//!
//! ```
//! use lucent_lexer_core::{tokenize, StreamTag};
//!
//! let tags: Vec<StreamTag> = tokenize("a\n\tb\n").into_iter().map(|t| t.tag).collect();
//! assert_eq!(
//!     tags,
//!     [
//!         StreamTag::Level,
//!         StreamTag::Content,
//!         StreamTag::Open,
//!         StreamTag::Level,
//!         StreamTag::Content,
//!         StreamTag::Close,
//!         StreamTag::Level,
//!     ]
//! );
//! ```

mod cursor;
mod indent;
mod lookahead;
mod source_buffer;
mod tag;
mod token_stream;

pub use cursor::Cursor;
pub use indent::{IndentScanner, StateError, SERIALIZATION_BUFFER_SIZE, STATE_SIZE};
pub use lookahead::{Lookahead, SourceLookahead, Span};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use tag::{IndentTag, ValidTokens};
pub use token_stream::{tokenize, Checkpoint, StreamTag, StreamToken, TokenStream};

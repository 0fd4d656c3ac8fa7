//! Command handlers for the Lucent CLI.
//!
//! Each submodule implements one CLI command. Shared utilities like
//! [`read_file`] and the [`CommandError`] type live here in the module root.

use std::io;

use thiserror::Error;

mod lex;

pub use lex::{lex_file, parse_lex_args, render_tokens, LexOptions};

/// Failure of a CLI command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The input file does not exist.
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    /// The input file is not UTF-8 text.
    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },
    /// Any other I/O failure while reading input.
    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    /// Bad command line.
    #[error("{0}")]
    Usage(String),
}

impl CommandError {
    /// Returns `true` if usage help should be shown alongside the error.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

/// Read a source file, classifying the common failure modes.
pub fn read_file(path: &str) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CommandError::NotFound {
            path: path.to_owned(),
        },
        io::ErrorKind::InvalidData => CommandError::InvalidUtf8 {
            path: path.to_owned(),
        },
        _ => CommandError::Read {
            path: path.to_owned(),
            source: e,
        },
    })
}

//! The `lex` command: dump the structural token stream of a file.

use std::fmt::Write as _;

use lucent_lexer_core::{SourceBuffer, StreamTag, TokenStream};
use tracing::debug;

use super::{read_file, CommandError};

/// Options accepted by `lucent lex`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Omit content and comment tokens (`--no-content`).
    pub hide_content: bool,
    /// Append the scanner's `current/target` after each token (`--state`).
    pub show_state: bool,
}

/// Parse `lex` arguments into the input path and options.
///
/// The path is the first argument not starting with `-`; flags may appear
/// before or after it.
pub fn parse_lex_args(args: &[String]) -> Result<(String, LexOptions), CommandError> {
    let mut options = LexOptions::default();
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "--no-content" => options.hide_content = true,
            "--state" => options.show_state = true,
            flag if flag.starts_with('-') => {
                return Err(CommandError::Usage(format!("unknown option '{flag}'")));
            }
            file if path.is_none() => path = Some(file.to_owned()),
            extra => {
                return Err(CommandError::Usage(format!("unexpected argument '{extra}'")));
            }
        }
    }

    let path = path.ok_or_else(|| {
        CommandError::Usage(
            "missing file path\nUsage: lucent lex <file> [--no-content] [--state]".to_owned(),
        )
    })?;
    Ok((path, options))
}

/// Render the token stream of `source`, one token per line.
///
/// Each line is the tag name padded to eight columns and the byte span.
/// Content and comment lines add the quoted source text.
pub fn render_tokens(source: &str, options: &LexOptions) -> String {
    let buffer = SourceBuffer::new(source);
    let cursor = buffer.cursor();
    let mut stream = TokenStream::new(&buffer);
    let mut out = String::new();

    while let Some(token) = stream.next() {
        if options.hide_content && !token.tag.is_structural() {
            continue;
        }
        let _ = write!(out, "{:<8} {}", token.tag.name(), token.span);
        if matches!(token.tag, StreamTag::Content | StreamTag::Comment) {
            let _ = write!(out, " {:?}", cursor.slice(token.span.start, token.span.end));
        }
        if options.show_state {
            let scanner = stream.scanner();
            let _ = write!(out, " [{}/{}]", scanner.current(), scanner.target());
        }
        out.push('\n');
    }
    out
}

/// Read `path` and print its token stream to stdout.
///
/// Encoding issues are reported on stderr before the dump.
#[tracing::instrument(level = "debug", skip(options))]
pub fn lex_file(path: &str, options: &LexOptions) -> Result<(), CommandError> {
    let content = read_file(path)?;
    debug!(bytes = content.len(), "read source");

    let buffer = SourceBuffer::new(&content);
    for issue in buffer.encoding_issues() {
        eprintln!(
            "warning: {path}: {} at byte {}",
            issue.kind.describe(),
            issue.pos
        );
    }

    print!("{}", render_tokens(&content, options));
    Ok(())
}

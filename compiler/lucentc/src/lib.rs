//! Lucent tooling CLI.
//!
//! Runs the reference host from `lucent_lexer_core` over source files and
//! prints the structural token stream the Lucent grammar would receive.
//!
//! ```text
//! source file ──► SourceBuffer ──► TokenStream ──► OPEN / CLOSE / LEVEL / CONTENT
//!                                     │
//!                                     └── IndentScanner (two u16 counters)
//! ```

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;

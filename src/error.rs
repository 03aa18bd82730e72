//! Error types for the parser generator and the regex compiler.

use thiserror::Error;

/// Errors that can occur during table generation, parsing, and regex
/// compilation.
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("\\{0} is not an escapable character")]
    Escape(char),

    #[error("parse error at state {state} on token '{token}'")]
    Parse { token: String, state: usize },

    #[error("grammar conflict at state {state}, symbol {symbol}:\n  {existing}\n  {proposed}")]
    Conflict {
        state: usize,
        symbol: String,
        existing: String,
        proposed: String,
    },

    #[error("'{0}' unexpected symbol")]
    UnexpectedSymbol(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, CompileError>;

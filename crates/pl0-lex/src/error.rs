//! Lexer error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexError {
    #[error("unexpected character {found:?} at line {line}, column {column}")]
    UnexpectedChar { found: char, line: u32, column: u32 },

    #[error("unterminated string literal starting at line {line}, column {column}")]
    UnterminatedString { line: u32, column: u32 },

    #[error("unterminated comment starting at line {line}, column {column}")]
    UnterminatedComment { line: u32, column: u32 },
}

pub type LexResult<T> = std::result::Result<T, LexError>;

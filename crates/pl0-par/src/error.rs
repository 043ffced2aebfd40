//! Parse-time error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("syntax error at line {line}, column {column}: unexpected token {found}")]
    Syntax { line: u32, column: u32, found: String },

    /// A semantic action reported a fatal error; the diagnostic itself was
    /// already emitted to the shared [`pl0_util::Handler`] at the point of
    /// failure, so this variant carries no message of its own.
    #[error("parsing aborted after a reported error")]
    Aborted,

    #[error(transparent)]
    Name(#[from] pl0_sym::NameListError),

    #[error(transparent)]
    Gen(#[from] pl0_gen::GenError),
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;

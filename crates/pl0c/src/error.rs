//! Top-level error type returned by [`crate::run`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("couldn't read {0}: {1}")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("couldn't open {0} for writing: {1}")]
    Write(PathBuf, #[source] std::io::Error),

    #[error(transparent)]
    Parse(#[from] pl0_par::ParseError),

    #[error("compilation failed with {0} error(s)")]
    CompilationFailed(usize),
}

pub type CompileResult<T> = std::result::Result<T, CompileError>;

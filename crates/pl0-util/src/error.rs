//! Core error types shared by the pl0-util crate itself.

use thiserror::Error;

/// Errors from [`crate::IndexVec`]-adjacent bookkeeping.
#[derive(Debug, Error)]
pub enum IndexVecError {
    #[error("index out of bounds: index {index}, length {length}")]
    OutOfBounds { index: usize, length: usize },
}

/// Errors from [`crate::diagnostic`] formatting.
#[derive(Debug, Error)]
pub enum DiagnosticError {
    #[error("failed to format diagnostic: {0}")]
    FormatFailed(String),
}

pub type IndexVecResult<T> = std::result::Result<T, IndexVecError>;
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;

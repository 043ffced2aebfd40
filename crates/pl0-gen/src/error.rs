//! Error types for the bytecode emitter.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("label stack underflow: popLabel called with no matching pushLabel")]
    LabelStackUnderflow,

    #[error("jump target at buffer offset {0} falls outside the emitted buffer")]
    InvalidJumpAddress(usize),

    #[error("procedure length can't be backpatched into a buffer shorter than 2 bytes")]
    BufferTooShortForLength,

    #[error("no delayed command to release")]
    NoDelayedCommand,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type GenResult<T> = std::result::Result<T, GenError>;

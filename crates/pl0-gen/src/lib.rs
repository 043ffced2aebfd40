//! pl0-gen - Bytecode emitter targeting the Beck virtual machine.
//!
//! Owns the output buffer, the label stack used to backpatch jump
//! operands, the deferred-command stack used for condition comparators,
//! and the record/replay buffer used to relocate `FOR`-loop increments
//! after their body.

pub mod buffer;
pub mod error;
pub mod opcode;

pub use buffer::{CodeGenerator, Emitter, Label};
pub use error::{GenError, GenResult};
pub use opcode::VmOp;

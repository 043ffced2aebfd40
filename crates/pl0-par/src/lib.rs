//! pl0-par - Graph-driven recursive-descent parser for PL/0.
//!
//! Walks a static table of [`graph::Edge`]s per non-terminal with one level
//! of backtracking (an alternative that has consumed no tokens may still be
//! tried), running semantic actions that drive [`pl0_sym::NameList`] and
//! emit bytecode through [`pl0_gen::Emitter`] as it goes.

mod actions;
pub mod error;
pub mod graph;
mod parser;
pub mod tree;

pub use error::{ParseError, ParseResult};
pub use parser::Parser;
pub use tree::{ParseTree, ParseTreeNode};

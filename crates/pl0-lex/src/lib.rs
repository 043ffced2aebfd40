//! pl0-lex - Lexical analyzer for PL/0.
//!
//! Turns source text into a stream of [`Token`]s. Identifiers are
//! case-folded to uppercase as they are scanned (PL/0 keywords and names
//! are case-insensitive); numeric literals are parsed as `i32`; string
//! literals use Pascal-style `""` escaping for a literal quote.

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{Sym, Token, TokenKind};

//! Errors raised while building or querying the name table.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NameListError {
    #[error("identifier `{0}` is already declared in this scope")]
    DuplicateLocalIdent(String),

    #[error("cannot end a procedure with no parent")]
    EndProcedureNoParent,

    #[error("no variable declared yet in this procedure to turn into an array")]
    NoCurrentVariable,
}

pub type NameListResult<T> = std::result::Result<T, NameListError>;

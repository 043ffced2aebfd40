//! The edge graph: one array of [`Edge`]s per non-terminal, driving the
//! backtracking recursive-descent engine in [`crate::parser`].

pub mod block;
pub mod condition;
pub mod expr;
pub mod stmt;

use pl0_lex::Sym;

use crate::parser::Parser;

/// A semantic action bound to an edge. Runs after the edge's token or
/// subgraph has matched but before the matched token is consumed; may veto
/// the match by returning `false`.
pub type Action = fn(&mut Parser) -> bool;

/// The lexical category an edge expects, for edges that don't match an
/// exact fixed symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Morpheme {
    Ident,
    Number,
    Str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NonTerminal {
    Program,
    Block,
    ConstantList,
    ConstantDeclaration,
    VariableList,
    VariableDeclaration,
    ArrayIndex,
    ProcedureDeclaration,
    ParameterListDeclaration,
    ParameterListCall,
    Statement,
    Assignment,
    Conditional,
    Loop,
    For,
    Compound,
    ProcedureCall,
    Input,
    Output,
    Expression,
    Term,
    Factor,
    Condition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    /// Always matches, consumes nothing.
    Nil,
    /// Matches an exact fixed token.
    Symbol,
    /// Matches any token of a lexical category (identifier, number, string).
    Morpheme,
    /// Recurses into another non-terminal's edge graph.
    Subgraph,
    /// Marks the end of this non-terminal's edge array.
    End,
}

#[derive(Clone, Copy, Debug)]
pub enum EdgeValue {
    None,
    Symbol(Sym),
    Morpheme(Morpheme),
    Subgraph(NonTerminal),
}

/// One transition in a non-terminal's graph.
///
/// `next` is tried after a successful match; `alt` is tried after a failed
/// match that consumed no tokens (0 means "no alternative - backtrack to
/// the caller").
#[derive(Clone, Copy)]
pub struct Edge {
    pub kind: EdgeKind,
    pub value: EdgeValue,
    pub action: Option<Action>,
    pub next: usize,
    pub alt: usize,
}

pub const fn nil(next: usize, alt: usize) -> Edge {
    Edge {
        kind: EdgeKind::Nil,
        value: EdgeValue::None,
        action: None,
        next,
        alt,
    }
}

pub const fn nil_a(action: Action, next: usize, alt: usize) -> Edge {
    Edge {
        kind: EdgeKind::Nil,
        value: EdgeValue::None,
        action: Some(action),
        next,
        alt,
    }
}

pub const fn sym(s: Sym, next: usize, alt: usize) -> Edge {
    Edge {
        kind: EdgeKind::Symbol,
        value: EdgeValue::Symbol(s),
        action: None,
        next,
        alt,
    }
}

pub const fn sym_a(s: Sym, action: Action, next: usize, alt: usize) -> Edge {
    Edge {
        kind: EdgeKind::Symbol,
        value: EdgeValue::Symbol(s),
        action: Some(action),
        next,
        alt,
    }
}

pub const fn morph(m: Morpheme, next: usize, alt: usize) -> Edge {
    Edge {
        kind: EdgeKind::Morpheme,
        value: EdgeValue::Morpheme(m),
        action: None,
        next,
        alt,
    }
}

pub const fn morph_a(m: Morpheme, action: Action, next: usize, alt: usize) -> Edge {
    Edge {
        kind: EdgeKind::Morpheme,
        value: EdgeValue::Morpheme(m),
        action: Some(action),
        next,
        alt,
    }
}

pub const fn sub(nt: NonTerminal, next: usize, alt: usize) -> Edge {
    Edge {
        kind: EdgeKind::Subgraph,
        value: EdgeValue::Subgraph(nt),
        action: None,
        next,
        alt,
    }
}

pub const fn sub_a(nt: NonTerminal, action: Action, next: usize, alt: usize) -> Edge {
    Edge {
        kind: EdgeKind::Subgraph,
        value: EdgeValue::Subgraph(nt),
        action: Some(action),
        next,
        alt,
    }
}

pub const fn end() -> Edge {
    Edge {
        kind: EdgeKind::End,
        value: EdgeValue::None,
        action: None,
        next: 0,
        alt: 0,
    }
}

/// Returns the static edge array for `nt`.
pub fn edges(nt: NonTerminal) -> &'static [Edge] {
    match nt {
        NonTerminal::Program => block::PROGRAM,
        NonTerminal::Block => block::BLOCK,
        NonTerminal::ConstantList => block::CONSTANT_LIST,
        NonTerminal::ConstantDeclaration => block::CONSTANT_DECLARATION,
        NonTerminal::VariableList => block::VARIABLE_LIST,
        NonTerminal::VariableDeclaration => block::VARIABLE_DECLARATION,
        NonTerminal::ArrayIndex => block::ARRAY_INDEX,
        NonTerminal::ProcedureDeclaration => block::PROCEDURE_DECLARATION,
        NonTerminal::ParameterListDeclaration => block::PARAMETER_LIST_DECLARATION,
        NonTerminal::ParameterListCall => block::PARAMETER_LIST_CALL,
        NonTerminal::Statement => stmt::STATEMENT,
        NonTerminal::Assignment => stmt::ASSIGNMENT,
        NonTerminal::Conditional => stmt::CONDITIONAL,
        NonTerminal::Loop => stmt::LOOP,
        NonTerminal::For => stmt::FOR,
        NonTerminal::Compound => stmt::COMPOUND,
        NonTerminal::ProcedureCall => stmt::PROCEDURE_CALL,
        NonTerminal::Input => stmt::INPUT,
        NonTerminal::Output => stmt::OUTPUT,
        NonTerminal::Expression => expr::EXPRESSION,
        NonTerminal::Term => expr::TERM,
        NonTerminal::Factor => expr::FACTOR,
        NonTerminal::Condition => condition::CONDITION,
    }
}

//! Edge tables for the declaration-level non-terminals: the whole program,
//! a block, and the constant/variable/procedure declarations nested in it.

use pl0_lex::Sym;

use super::{end, morph_a, nil_a, sub, sym, sym_a, Edge, Morpheme, NonTerminal};
use crate::actions;

pub static PROGRAM: &[Edge] = &[
    end(), // 0: unused - index 0 is reserved as the "no alternative" sentinel
    sub(NonTerminal::Block, 2, 0),
    sym_a(Sym::Period, actions::program_finalize, 3, 0),
    end(),
];

pub static BLOCK: &[Edge] = &[
    end(),
    sub(NonTerminal::ConstantList, 2, 2),
    sub(NonTerminal::VariableList, 3, 3),
    sub(NonTerminal::ProcedureDeclaration, 3, 4),
    nil_a(actions::block_enter_statement_section, 5, 0),
    sub(NonTerminal::Statement, 6, 0),
    nil_a(actions::block_end_procedure, 7, 0),
    end(),
];

pub static CONSTANT_LIST: &[Edge] = &[
    end(),
    sym(Sym::Const, 2, 0),
    sub(NonTerminal::ConstantDeclaration, 3, 0),
    sym(Sym::Comma, 4, 5),
    sub(NonTerminal::ConstantDeclaration, 3, 0),
    sym(Sym::Semicolon, 6, 0),
    end(),
];

pub static CONSTANT_DECLARATION: &[Edge] = &[
    end(),
    morph_a(Morpheme::Ident, actions::const_decl_ident, 2, 0),
    sym(Sym::Equal, 3, 0),
    morph_a(Morpheme::Number, actions::const_decl_number, 4, 0),
    end(),
];

pub static VARIABLE_LIST: &[Edge] = &[
    end(),
    sym(Sym::Var, 2, 0),
    sub(NonTerminal::VariableDeclaration, 3, 0),
    sym(Sym::Comma, 4, 5),
    sub(NonTerminal::VariableDeclaration, 3, 0),
    sym(Sym::Semicolon, 6, 0),
    end(),
];

pub static VARIABLE_DECLARATION: &[Edge] = &[
    end(),
    morph_a(Morpheme::Ident, actions::var_decl_ident, 2, 0),
    sub(NonTerminal::ArrayIndex, 3, 3),
    end(),
];

pub static ARRAY_INDEX: &[Edge] = &[
    end(),
    sym(Sym::LBracket, 2, 0),
    morph_a(Morpheme::Number, actions::array_index_len, 3, 0),
    sym(Sym::RBracket, 4, 0),
    end(),
];

pub static PROCEDURE_DECLARATION: &[Edge] = &[
    end(),
    sym(Sym::Procedure, 2, 0),
    morph_a(Morpheme::Ident, actions::proc_decl_ident, 3, 0),
    sub(NonTerminal::ParameterListDeclaration, 4, 4),
    sym(Sym::Semicolon, 5, 0),
    sub(NonTerminal::Block, 6, 0),
    sym(Sym::Semicolon, 7, 0),
    end(),
];

pub static PARAMETER_LIST_DECLARATION: &[Edge] = &[
    end(),
    sym(Sym::LParen, 2, 0),
    morph_a(Morpheme::Ident, actions::param_decl_ident, 3, 0),
    sym(Sym::Comma, 4, 5),
    morph_a(Morpheme::Ident, actions::param_decl_ident, 3, 0),
    sym_a(Sym::RParen, actions::param_decl_end, 6, 0),
    end(),
];

pub static PARAMETER_LIST_CALL: &[Edge] = &[
    end(),
    sym(Sym::LParen, 2, 0),
    sub(NonTerminal::Expression, 3, 0),
    sym(Sym::Comma, 4, 5),
    sub(NonTerminal::Expression, 3, 0),
    sym(Sym::RParen, 6, 0),
    end(),
];

//! Edge tables for statements: the alternation itself plus each of the
//! eight statement forms.

use pl0_lex::Sym;

use super::{end, morph_a, nil_a, sub, sub_a, sym, sym_a, Edge, Morpheme, NonTerminal};
use crate::actions;

pub static STATEMENT: &[Edge] = &[
    end(),
    sub(NonTerminal::Assignment, 9, 2),
    sub(NonTerminal::Conditional, 9, 3),
    sub(NonTerminal::Loop, 9, 4),
    sub(NonTerminal::Compound, 9, 5),
    sub(NonTerminal::ProcedureCall, 9, 6),
    sub(NonTerminal::Input, 9, 7),
    sub(NonTerminal::Output, 9, 8),
    sub(NonTerminal::For, 9, 0),
    end(),
];

pub static ASSIGNMENT: &[Edge] = &[
    end(),
    morph_a(Morpheme::Ident, actions::assign_ident, 2, 0),
    sym_a(Sym::LBracket, actions::assign_array_base_addr, 3, 5),
    sub(NonTerminal::Expression, 4, 0),
    sym_a(Sym::RBracket, actions::array_index_done, 6, 0),
    nil_a(actions::assign_scalar_addr, 6, 0),
    sym(Sym::Assign, 7, 0),
    sub(NonTerminal::Expression, 8, 0),
    nil_a(actions::assign_store, 9, 0),
    end(),
];

pub static CONDITIONAL: &[Edge] = &[
    end(),
    sym(Sym::If, 2, 0),
    sub_a(NonTerminal::Condition, actions::cond_if_after_condition, 3, 0),
    sym(Sym::Then, 4, 0),
    sub(NonTerminal::Statement, 5, 0),
    sym_a(Sym::Else, actions::cond_else_keyword, 6, 8),
    sub(NonTerminal::Statement, 7, 0),
    nil_a(actions::cond_else_finish, 9, 0),
    nil_a(actions::cond_no_else_finish, 9, 0),
    end(),
];

pub static LOOP: &[Edge] = &[
    end(),
    sym_a(Sym::While, actions::loop_before_condition, 2, 0),
    sub_a(NonTerminal::Condition, actions::loop_after_condition, 3, 0),
    sym(Sym::Do, 4, 0),
    sub(NonTerminal::Statement, 5, 0),
    nil_a(actions::loop_finish, 6, 0),
    end(),
];

pub static FOR: &[Edge] = &[
    end(),
    sym(Sym::For, 2, 0),
    sym(Sym::LParen, 3, 0),
    sub(NonTerminal::Assignment, 4, 0),
    sym_a(Sym::Semicolon, actions::for_before_condition, 5, 0),
    sub_a(NonTerminal::Condition, actions::for_after_condition, 6, 0),
    sym(Sym::Semicolon, 7, 0),
    sub(NonTerminal::Assignment, 8, 0),
    sym_a(Sym::RParen, actions::for_after_step, 9, 0),
    sub(NonTerminal::Statement, 10, 0),
    nil_a(actions::for_finish, 11, 0),
    end(),
];

pub static COMPOUND: &[Edge] = &[
    end(),
    sym(Sym::Begin, 2, 0),
    sub(NonTerminal::Statement, 3, 0),
    sym(Sym::Semicolon, 4, 5),
    sub(NonTerminal::Statement, 3, 0),
    sym(Sym::End, 6, 0),
    end(),
];

pub static PROCEDURE_CALL: &[Edge] = &[
    end(),
    sym(Sym::Call, 2, 0),
    morph_a(Morpheme::Ident, actions::call_ident, 3, 0),
    sub(NonTerminal::ParameterListCall, 4, 4),
    nil_a(actions::call_release, 5, 0),
    end(),
];

pub static INPUT: &[Edge] = &[
    end(),
    sym(Sym::Question, 2, 0),
    morph_a(Morpheme::Ident, actions::input_ident, 3, 0),
    end(),
];

pub static OUTPUT: &[Edge] = &[
    end(),
    sym(Sym::Bang, 2, 0),
    morph_a(Morpheme::Str, actions::output_string, 4, 3),
    sub_a(NonTerminal::Expression, actions::output_expr, 4, 0),
    end(),
];

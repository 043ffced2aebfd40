//! Edge tables for arithmetic: expressions, terms, and factors.

use pl0_lex::Sym;

use super::{end, morph_a, nil_a, sub, sub_a, sym, sym_a, Edge, Morpheme, NonTerminal};
use crate::actions;

pub static EXPRESSION: &[Edge] = &[
    end(),
    nil_a(actions::expr_reset_neg, 2, 0),
    sym_a(Sym::Minus, actions::expr_mark_neg, 3, 3),
    sub_a(NonTerminal::Term, actions::expr_apply_neg, 4, 0),
    sym(Sym::Plus, 5, 6),
    sub_a(NonTerminal::Term, actions::expr_add, 4, 0),
    sym(Sym::Minus, 7, 8),
    sub_a(NonTerminal::Term, actions::expr_sub, 4, 0),
    end(),
];

pub static TERM: &[Edge] = &[
    end(),
    sub(NonTerminal::Factor, 2, 0),
    sym(Sym::Star, 3, 4),
    sub_a(NonTerminal::Factor, actions::term_mul, 2, 0),
    sym(Sym::Slash, 5, 6),
    sub_a(NonTerminal::Factor, actions::term_div, 2, 0),
    end(),
];

pub static FACTOR: &[Edge] = &[
    end(),
    morph_a(Morpheme::Number, actions::factor_number, 10, 2),
    sym(Sym::LParen, 3, 5),
    sub(NonTerminal::Expression, 4, 0),
    sym(Sym::RParen, 10, 0),
    morph_a(Morpheme::Ident, actions::factor_ident, 6, 0),
    sym_a(Sym::LBracket, actions::factor_array_base_addr, 7, 9),
    sub(NonTerminal::Expression, 8, 0),
    sym_a(Sym::RBracket, actions::array_index_done, 10, 0),
    nil_a(actions::factor_scalar_value, 10, 0),
    end(),
];

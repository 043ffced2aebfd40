//! Edge table for conditions: `ODD expr`, or a comparison between two
//! expressions.

use pl0_lex::Sym;

use super::{end, sub, sub_a, sym, sym_a, Edge, NonTerminal};
use crate::actions;

pub static CONDITION: &[Edge] = &[
    end(),
    sym(Sym::Odd, 2, 3),
    sub_a(NonTerminal::Expression, actions::cond_odd, 11, 0),
    sub(NonTerminal::Expression, 4, 0),
    sym_a(Sym::Equal, actions::cond_defer_eq, 10, 5),
    sym_a(Sym::Hash, actions::cond_defer_ne, 10, 6),
    sym_a(Sym::Less, actions::cond_defer_lt, 10, 7),
    sym_a(Sym::Greater, actions::cond_defer_gt, 10, 8),
    sym_a(Sym::LessEqual, actions::cond_defer_le, 10, 9),
    sym_a(Sym::GreaterEqual, actions::cond_defer_ge, 10, 0),
    sub_a(NonTerminal::Expression, actions::cond_release, 11, 0),
    end(),
];

//! Semantic actions bound to edges in the graph. Each function runs right
//! after its edge's token (or subgraph) has matched, and may veto the match
//! by returning `false` - at which point the parser aborts (the action has
//! already reported why via the shared diagnostic handler).

use pl0_gen::{Emitter, VmOp};
use pl0_lex::TokenKind;
use pl0_sym::Ident;
use pl0_util::diagnostic::DiagnosticCode;

use crate::parser::Parser;

fn ident_text(p: &Parser) -> String {
    match &p.current().kind {
        TokenKind::Ident(s) => s.clone(),
        other => unreachable!("action bound to a non-identifier token: {other:?}"),
    }
}

fn number_value(p: &Parser) -> i32 {
    match p.current().kind {
        TokenKind::Number(n) => n,
        other => unreachable!("action bound to a non-number token: {other:?}"),
    }
}

fn string_value(p: &Parser) -> String {
    match &p.current().kind {
        TokenKind::Str(s) => s.clone(),
        other => unreachable!("action bound to a non-string token: {other:?}"),
    }
}

fn reject_if_declared(p: &mut Parser, name: &str) -> bool {
    if p.names.is_local_ident(name, p.names.current_proc()) {
        p.report_error(
            DiagnosticCode::E_SEM_DUPLICATE_IDENT,
            format!("`{name}` is already declared in this scope"),
        );
        return false;
    }
    true
}

// --- PROGRAM ----------------------------------------------------------

pub(crate) fn program_finalize(p: &mut Parser) -> bool {
    let count = p.names.procedure_count() as u16;
    if let Err(e) = p.gen.set_total_count_of_procedures(count) {
        return p.fail(e.to_string());
    }
    p.gen.write_const_list(p.names.constant_pool());
    if let Err(e) = p.gen.flush_buffer() {
        return p.fail(e.to_string());
    }
    true
}

// --- BLOCK --------------------------------------------------------------

pub(crate) fn block_enter_statement_section(p: &mut Parser) -> bool {
    if let Err(e) = p.gen.flush_buffer() {
        return p.fail(e.to_string());
    }
    let proc = p.names.procedure(p.names.current_proc()).clone();
    let index = proc.index.0 as i16;
    let frame = proc.local_address_offset as i16;
    p.gen.write_command(VmOp::EntryProc, &[0, index, frame]);
    true
}

pub(crate) fn block_end_procedure(p: &mut Parser) -> bool {
    let current = p.names.current_proc();
    let proc = p.names.procedure(current).clone();
    for &var_id in &proc.variables {
        if p.names.variable(var_id).is_procedure_parameter {
            p.gen.write_command(VmOp::Pop, &[]);
        }
    }
    p.gen.write_command(VmOp::RetProc, &[]);
    if let Err(e) = p.gen.set_procedure_length() {
        return p.fail(e.to_string());
    }
    if current != p.names.main_proc() {
        if let Err(e) = p.names.end_procedure() {
            return p.fail(e.to_string());
        }
    }
    if let Err(e) = p.gen.flush_buffer() {
        return p.fail(e.to_string());
    }
    true
}

// --- CONSTANT_DECLARATION / VARIABLE_DECLARATION / ARRAY_INDEX ----------

pub(crate) fn const_decl_ident(p: &mut Parser) -> bool {
    let name = ident_text(p);
    if !reject_if_declared(p, &name) {
        return false;
    }
    p.current_ident = name;
    true
}

pub(crate) fn const_decl_number(p: &mut Parser) -> bool {
    let value = number_value(p);
    let name = std::mem::take(&mut p.current_ident);
    p.names.create_const(value, Some(name));
    true
}

pub(crate) fn var_decl_ident(p: &mut Parser) -> bool {
    let name = ident_text(p);
    if !reject_if_declared(p, &name) {
        return false;
    }
    p.names.create_variable(name);
    true
}

pub(crate) fn array_index_len(p: &mut Parser) -> bool {
    let len = number_value(p);
    if len <= 0 {
        return p.fail("array length must be a positive number");
    }
    if let Err(e) = p.names.turn_last_variable_into_array(len as u32) {
        return p.fail(e.to_string());
    }
    true
}

// --- PROCEDURE_DECLARATION / PARAMETER_LIST_DECLARATION -----------------

pub(crate) fn proc_decl_ident(p: &mut Parser) -> bool {
    let name = ident_text(p);
    if !reject_if_declared(p, &name) {
        return false;
    }
    p.names.create_procedure(name);
    true
}

pub(crate) fn param_decl_ident(p: &mut Parser) -> bool {
    let name = ident_text(p);
    if !reject_if_declared(p, &name) {
        return false;
    }
    p.names.create_procedure_parameter(name);
    true
}

pub(crate) fn param_decl_end(p: &mut Parser) -> bool {
    p.names.correct_parameter_list();
    true
}

// --- ASSIGNMENT -----------------------------------------------------------

pub(crate) fn assign_ident(p: &mut Parser) -> bool {
    p.current_ident = ident_text(p);
    true
}

pub(crate) fn assign_array_base_addr(p: &mut Parser) -> bool {
    let name = p.current_ident.clone();
    p.push_address_for_ident(&name)
}

pub(crate) fn assign_scalar_addr(p: &mut Parser) -> bool {
    let name = p.current_ident.clone();
    p.push_address_for_ident(&name)
}

pub(crate) fn array_index_done(p: &mut Parser) -> bool {
    p.emit_array_element_address();
    true
}

pub(crate) fn assign_store(p: &mut Parser) -> bool {
    p.gen.write_command(VmOp::StoreVal, &[]);
    true
}

// --- CONDITIONAL ----------------------------------------------------------

pub(crate) fn cond_if_after_condition(p: &mut Parser) -> bool {
    p.gen.push_label();
    p.gen.write_command(VmOp::JmpNot, &[0]);
    true
}

pub(crate) fn cond_else_keyword(p: &mut Parser) -> bool {
    let jmp_not_label = match p.gen.pop_label() {
        Ok(l) => l,
        Err(e) => return p.fail(e.to_string()),
    };
    p.gen.push_label();
    p.gen.write_command(VmOp::Jmp, &[0]);
    // Three more bytes (the JMP just written) land after the popped label's
    // own JMP_NOT instruction before the else branch's first byte.
    if let Err(e) = p.gen.correct_jmp(&jmp_not_label, 0) {
        return p.fail(e.to_string());
    }
    true
}

pub(crate) fn cond_else_finish(p: &mut Parser) -> bool {
    let jmp_label = match p.gen.pop_label() {
        Ok(l) => l,
        Err(e) => return p.fail(e.to_string()),
    };
    if let Err(e) = p.gen.correct_jmp(&jmp_label, -3) {
        return p.fail(e.to_string());
    }
    true
}

pub(crate) fn cond_no_else_finish(p: &mut Parser) -> bool {
    let jmp_not_label = match p.gen.pop_label() {
        Ok(l) => l,
        Err(e) => return p.fail(e.to_string()),
    };
    if let Err(e) = p.gen.correct_jmp(&jmp_not_label, -3) {
        return p.fail(e.to_string());
    }
    true
}

// --- LOOP -------------------------------------------------------------------

pub(crate) fn loop_before_condition(p: &mut Parser) -> bool {
    p.gen.push_label();
    true
}

pub(crate) fn loop_after_condition(p: &mut Parser) -> bool {
    p.gen.push_label();
    p.gen.write_command(VmOp::JmpNot, &[0]);
    true
}

pub(crate) fn loop_finish(p: &mut Parser) -> bool {
    let body_end = match p.gen.pop_label() {
        Ok(l) => l,
        Err(e) => return p.fail(e.to_string()),
    };
    let head = match p.gen.pop_label() {
        Ok(l) => l,
        Err(e) => return p.fail(e.to_string()),
    };
    let back = -(head.distance() + 3);
    p.gen.write_command(VmOp::Jmp, &[back as i16]);
    if let Err(e) = p.gen.correct_jmp(&body_end, 0) {
        return p.fail(e.to_string());
    }
    true
}

// --- FOR --------------------------------------------------------------------

pub(crate) fn for_before_condition(p: &mut Parser) -> bool {
    p.gen.push_label();
    true
}

pub(crate) fn for_after_condition(p: &mut Parser) -> bool {
    p.gen.push_label();
    p.gen.write_command(VmOp::JmpNot, &[0]);
    p.gen.record_code();
    true
}

pub(crate) fn for_after_step(p: &mut Parser) -> bool {
    p.gen.stop_recording_code();
    true
}

pub(crate) fn for_finish(p: &mut Parser) -> bool {
    p.gen.pop_recorded_code();
    let body_end = match p.gen.pop_label() {
        Ok(l) => l,
        Err(e) => return p.fail(e.to_string()),
    };
    let head = match p.gen.pop_label() {
        Ok(l) => l,
        Err(e) => return p.fail(e.to_string()),
    };
    let back = -(head.distance() + 3);
    p.gen.write_command(VmOp::Jmp, &[back as i16]);
    if let Err(e) = p.gen.correct_jmp(&body_end, 0) {
        return p.fail(e.to_string());
    }
    true
}

// --- PROCEDURE_CALL -----------------------------------------------------

pub(crate) fn call_ident(p: &mut Parser) -> bool {
    let name = ident_text(p);
    match p.names.lookup_global(&name, p.names.current_proc()) {
        Some(Ident::Proc(proc_id)) => {
            p.gen.push_delayed_command(VmOp::Call, vec![proc_id.0 as i16]);
            true
        }
        Some(_) => p.fail(format!("`{name}` is not a procedure")),
        None => {
            p.report_error(DiagnosticCode::E_SEM_UNDECLARED_IDENT, format!("undeclared identifier `{name}`"));
            false
        }
    }
}

pub(crate) fn call_release(p: &mut Parser) -> bool {
    if let Err(e) = p.gen.release_delayed_command() {
        return p.fail(e.to_string());
    }
    true
}

// --- INPUT / OUTPUT -------------------------------------------------------

pub(crate) fn input_ident(p: &mut Parser) -> bool {
    let name = ident_text(p);
    if !p.push_address_for_ident(&name) {
        return false;
    }
    p.gen.write_command(VmOp::GetVal, &[]);
    true
}

pub(crate) fn output_string(p: &mut Parser) -> bool {
    let s = string_value(p);
    p.gen.put_string(&s);
    true
}

pub(crate) fn output_expr(p: &mut Parser) -> bool {
    p.gen.write_command(VmOp::PushVal, &[]);
    true
}

// --- EXPRESSION / TERM / FACTOR ------------------------------------------

pub(crate) fn expr_reset_neg(p: &mut Parser) -> bool {
    p.pending_neg = false;
    true
}

pub(crate) fn expr_mark_neg(p: &mut Parser) -> bool {
    p.pending_neg = true;
    true
}

pub(crate) fn expr_apply_neg(p: &mut Parser) -> bool {
    if p.pending_neg {
        p.gen.write_command(VmOp::Neg, &[]);
        p.pending_neg = false;
    }
    true
}

pub(crate) fn expr_add(p: &mut Parser) -> bool {
    p.gen.write_command(VmOp::Add, &[]);
    true
}

pub(crate) fn expr_sub(p: &mut Parser) -> bool {
    p.gen.write_command(VmOp::Sub, &[]);
    true
}

pub(crate) fn term_mul(p: &mut Parser) -> bool {
    p.gen.write_command(VmOp::Mul, &[]);
    true
}

pub(crate) fn term_div(p: &mut Parser) -> bool {
    p.gen.write_command(VmOp::Div, &[]);
    true
}

pub(crate) fn factor_number(p: &mut Parser) -> bool {
    let value = number_value(p);
    let idx = p.names.create_const(value, None);
    p.gen.write_command(VmOp::PushConst, &[idx as i16]);
    true
}

pub(crate) fn factor_ident(p: &mut Parser) -> bool {
    p.current_ident = ident_text(p);
    true
}

pub(crate) fn factor_array_base_addr(p: &mut Parser) -> bool {
    let name = p.current_ident.clone();
    p.push_address_for_ident(&name)
}

pub(crate) fn factor_scalar_value(p: &mut Parser) -> bool {
    let name = p.current_ident.clone();
    p.push_value_for_ident(&name)
}

// --- CONDITION -------------------------------------------------------------

pub(crate) fn cond_odd(p: &mut Parser) -> bool {
    p.gen.write_command(VmOp::Odd, &[]);
    true
}

pub(crate) fn cond_defer_eq(p: &mut Parser) -> bool {
    p.gen.push_delayed_command(VmOp::CmpEq, vec![]);
    true
}

pub(crate) fn cond_defer_ne(p: &mut Parser) -> bool {
    p.gen.push_delayed_command(VmOp::CmpNe, vec![]);
    true
}

pub(crate) fn cond_defer_lt(p: &mut Parser) -> bool {
    p.gen.push_delayed_command(VmOp::CmpLt, vec![]);
    true
}

pub(crate) fn cond_defer_gt(p: &mut Parser) -> bool {
    p.gen.push_delayed_command(VmOp::CmpGt, vec![]);
    true
}

pub(crate) fn cond_defer_le(p: &mut Parser) -> bool {
    p.gen.push_delayed_command(VmOp::CmpLe, vec![]);
    true
}

pub(crate) fn cond_defer_ge(p: &mut Parser) -> bool {
    p.gen.push_delayed_command(VmOp::CmpGe, vec![]);
    true
}

pub(crate) fn cond_release(p: &mut Parser) -> bool {
    if let Err(e) = p.gen.release_delayed_command() {
        return p.fail(e.to_string());
    }
    true
}

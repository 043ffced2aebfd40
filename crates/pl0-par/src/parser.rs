//! The backtracking recursive-descent engine that walks the edge graph in
//! [`crate::graph`], driving [`pl0_sym::NameList`] and [`pl0_gen::Emitter`]
//! as it goes.

use pl0_gen::Emitter;
use pl0_lex::{Lexer, Sym, Token, TokenKind};
use pl0_sym::{Ident, NameList};
use pl0_util::diagnostic::DiagnosticCode;
use pl0_util::Handler;

use crate::error::{ParseError, ParseResult};
use crate::graph::{self, EdgeKind, EdgeValue, Morpheme, NonTerminal};
use crate::tree::{ParseTree, ParseTreeNode};

/// Outcome of attempting to parse one non-terminal's graph.
///
/// `consumed` tracks whether any token was consumed during *this*
/// activation; a [`Parser::parse_non_terminal`] caller uses it to decide
/// whether a graceful failure can still be backtracked past.
///
/// `node` carries the subtree built for this activation when tree recording
/// is on (`None` otherwise, and always `None` on a failed/backtracked
/// attempt - only a successful, committed activation contributes a node).
struct GraphResult {
    success: bool,
    consumed: bool,
    node: Option<ParseTreeNode>,
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    handler: &'a Handler,

    pub(crate) names: NameList,
    pub(crate) gen: &'a mut dyn Emitter,

    /// Scratch slot for the identifier text most recently matched; semantic
    /// actions stash it here and a later action in the same production
    /// consumes it. PL/0's grammar never needs more than one identifier
    /// "in flight" at a time.
    pub(crate) current_ident: String,
    /// Set by a leading unary `-` in an expression; consumed (and cleared)
    /// once the following term has been parsed.
    pub(crate) pending_neg: bool,

    pub(crate) tree: Option<ParseTree>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, handler: &'a Handler, gen: &'a mut dyn Emitter, record_tree: bool) -> Self {
        let mut lexer = Lexer::new(source, handler);
        let current = lexer.next_token().unwrap_or_else(|| Token::new(TokenKind::Eof, pl0_util::Span::DUMMY));
        Self {
            lexer,
            current,
            handler,
            names: NameList::new(),
            gen,
            current_ident: String::new(),
            pending_neg: false,
            tree: record_tree.then(ParseTree::new),
        }
    }

    /// Parses a full compilation unit. On success, every procedure body has
    /// already been flushed to the underlying writer by the `Program`
    /// graph's own actions; the caller still owns closing the writer.
    pub fn parse_program(&mut self) -> ParseResult<()> {
        tracing::debug!("parsing started");
        let result = self.parse_non_terminal(NonTerminal::Program)?;
        if let Some(node) = result.node {
            if let Some(tree) = self.tree.as_mut() {
                tree.push(node);
            }
        }
        tracing::debug!(procedures = self.names.procedure_count(), "parsing finished");
        Ok(())
    }

    pub fn into_tree(self) -> Option<ParseTree> {
        self.tree
    }

    pub fn handler(&self) -> &'a Handler {
        self.handler
    }

    fn bump(&mut self) -> Token {
        let next = self.lexer.next_token().unwrap_or_else(|| self.current.clone());
        std::mem::replace(&mut self.current, next)
    }

    pub(crate) fn current(&self) -> &Token {
        &self.current
    }

    pub(crate) fn fail(&self, message: impl Into<String>) -> bool {
        self.report_error(DiagnosticCode::E_SEM_WRONG_KIND, message);
        false
    }

    pub(crate) fn report_error(&self, code: DiagnosticCode, message: impl Into<String>) {
        self.handler.build_error(self.current.span, message).code(code).emit(self.handler);
    }

    fn syntax_error(&self) -> ParseError {
        self.report_error(
            DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN,
            format!("unexpected token {:?}", self.current.kind),
        );
        ParseError::Syntax {
            line: self.current.span.line,
            column: self.current.span.column,
            found: format!("{:?}", self.current.kind),
        }
    }

    /// Resolves `name` and pushes its *address* onto the VM stack (for
    /// assignment targets, array bases, and `?`-input targets). A procedure
    /// or constant name is a semantic error here.
    pub(crate) fn push_address_for_ident(&mut self, name: &str) -> bool {
        use pl0_gen::VmOp;

        match self.names.lookup_global(name, self.names.current_proc()) {
            Some(Ident::Proc(_)) => self.fail(format!("`{name}` is a procedure, not a variable")),
            Some(Ident::Const(_)) => self.fail(format!("cannot assign to constant `{name}`")),
            Some(Ident::Var(var_id)) => {
                let var = self.names.variable(var_id).clone();
                let displacement = var.address_offset as i16;
                if var.parent == self.names.main_proc() {
                    self.gen.write_command(VmOp::PushAddrMain, &[displacement]);
                } else if var.parent == self.names.current_proc() {
                    self.gen.write_command(VmOp::PushAddrLocal, &[displacement]);
                } else {
                    self.gen
                        .write_command(VmOp::PushAddrGlobal, &[displacement, var.parent.0 as i16]);
                }
                true
            }
            None => {
                self.report_error(DiagnosticCode::E_SEM_UNDECLARED_IDENT, format!("undeclared identifier `{name}`"));
                false
            }
        }
    }

    /// Resolves `name` and pushes its *value* onto the VM stack (for reads
    /// inside expressions). A procedure name is a semantic error here.
    pub(crate) fn push_value_for_ident(&mut self, name: &str) -> bool {
        use pl0_gen::VmOp;

        match self.names.lookup_global(name, self.names.current_proc()) {
            Some(Ident::Proc(_)) => self.fail(format!("`{name}` is a procedure, not a value")),
            Some(Ident::Const(pool_index)) => {
                self.gen.write_command(VmOp::PushConst, &[pool_index as i16]);
                true
            }
            Some(Ident::Var(var_id)) => {
                let var = self.names.variable(var_id).clone();
                let displacement = var.address_offset as i16;
                if var.parent == self.names.main_proc() {
                    self.gen.write_command(VmOp::PushValMain, &[displacement]);
                } else if var.parent == self.names.current_proc() {
                    self.gen.write_command(VmOp::PushValLocal, &[displacement]);
                } else {
                    self.gen
                        .write_command(VmOp::PushValGlobal, &[displacement, var.parent.0 as i16]);
                }
                true
            }
            None => {
                self.report_error(DiagnosticCode::E_SEM_UNDECLARED_IDENT, format!("undeclared identifier `{name}`"));
                false
            }
        }
    }

    /// Emits the element-address arithmetic shared by array assignment
    /// targets and array reads inside expressions: the base address and the
    /// index value are already on the stack as `[addr, index]`; this turns
    /// them into `[addr + index * 4]`.
    ///
    /// There is no indirect-load opcode in the target instruction set, so an
    /// array element read inside an expression still ends up needing a
    /// `SWAP` immediately before the final arithmetic in the same way an
    /// assignment target does - see `DESIGN.md` for why this asymmetry is
    /// carried over rather than designed around.
    pub(crate) fn emit_array_element_address(&mut self) {
        use pl0_gen::VmOp;

        let four = self.names.create_const(4, None);
        self.gen.write_command(VmOp::PushConst, &[four as i16]);
        self.gen.write_command(VmOp::Mul, &[]);
        self.gen.write_command(VmOp::Add, &[]);
        self.gen.write_command(VmOp::Swap, &[]);
    }

    fn parse_non_terminal(&mut self, nt: NonTerminal) -> ParseResult<GraphResult> {
        let edges = graph::edges(nt);
        let mut idx = 1usize;
        let mut consumed = false;
        let mut children: Vec<ParseTreeNode> = Vec::new();

        loop {
            let edge = edges[idx];
            match edge.kind {
                EdgeKind::End => {
                    let node = self.tree.is_some().then(|| ParseTreeNode {
                        label: format!("{nt:?}"),
                        children: std::mem::take(&mut children),
                        line: 0,
                        column: 0,
                    });
                    return Ok(GraphResult { success: true, consumed, node });
                }

                EdgeKind::Nil => {
                    if let Some(action) = edge.action {
                        if !action(self) {
                            return Err(ParseError::Aborted);
                        }
                    }
                    idx = edge.next;
                }

                EdgeKind::Symbol => {
                    let want = match edge.value {
                        EdgeValue::Symbol(s) => s,
                        _ => unreachable!("Symbol edge without a Symbol value"),
                    };
                    if self.matches_symbol(want) {
                        if self.tree.is_some() {
                            children.push(ParseTreeNode::leaf(self.terminal_label(), self.current.span.line, self.current.span.column));
                        }
                        if let Some(action) = edge.action {
                            if !action(self) {
                                return Err(ParseError::Aborted);
                            }
                        }
                        self.bump();
                        consumed = true;
                        idx = edge.next;
                    } else if edge.alt != 0 {
                        idx = edge.alt;
                    } else if !consumed {
                        return Ok(GraphResult { success: false, consumed: false, node: None });
                    } else {
                        return Err(self.syntax_error());
                    }
                }

                EdgeKind::Morpheme => {
                    let want = match edge.value {
                        EdgeValue::Morpheme(m) => m,
                        _ => unreachable!("Morpheme edge without a Morpheme value"),
                    };
                    if self.matches_morpheme(want) {
                        if self.tree.is_some() {
                            children.push(ParseTreeNode::leaf(self.terminal_label(), self.current.span.line, self.current.span.column));
                        }
                        if let Some(action) = edge.action {
                            if !action(self) {
                                return Err(ParseError::Aborted);
                            }
                        }
                        self.bump();
                        consumed = true;
                        idx = edge.next;
                    } else if edge.alt != 0 {
                        idx = edge.alt;
                    } else if !consumed {
                        return Ok(GraphResult { success: false, consumed: false, node: None });
                    } else {
                        return Err(self.syntax_error());
                    }
                }

                EdgeKind::Subgraph => {
                    let callee = match edge.value {
                        EdgeValue::Subgraph(nt) => nt,
                        _ => unreachable!("Subgraph edge without a Subgraph value"),
                    };
                    let result = self.parse_non_terminal(callee)?;
                    if result.success {
                        consumed = consumed || result.consumed;
                        if let Some(node) = result.node {
                            children.push(node);
                        }
                        if let Some(action) = edge.action {
                            if !action(self) {
                                return Err(ParseError::Aborted);
                            }
                        }
                        idx = edge.next;
                    } else if edge.alt != 0 {
                        idx = edge.alt;
                    } else if !consumed {
                        return Ok(GraphResult { success: false, consumed: false, node: None });
                    } else {
                        return Err(self.syntax_error());
                    }
                }
            }
        }
    }

    /// Text for the terminal the parser is about to consume, used only for
    /// the optional parse-tree dump; cheap to skip (see the `self.tree.is_some()`
    /// guards at call sites) since most runs never build a tree.
    fn terminal_label(&self) -> String {
        match &self.current.kind {
            TokenKind::Ident(s) => s.clone(),
            TokenKind::Number(n) => n.to_string(),
            TokenKind::Str(s) => s.clone(),
            TokenKind::Symbol(sym) => format!("{sym:?}"),
            TokenKind::Eof => "EOF".to_string(),
        }
    }

    fn matches_symbol(&self, want: Sym) -> bool {
        self.current.as_symbol() == Some(want)
    }

    fn matches_morpheme(&self, want: Morpheme) -> bool {
        matches!(
            (want, &self.current.kind),
            (Morpheme::Ident, TokenKind::Ident(_)) | (Morpheme::Number, TokenKind::Number(_)) | (Morpheme::Str, TokenKind::Str(_))
        )
    }
}

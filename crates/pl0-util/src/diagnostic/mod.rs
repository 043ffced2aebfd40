//! Diagnostic module - error and warning reporting infrastructure.
//!
//! # Examples
//!
//! ```
//! use pl0_util::diagnostic::{DiagnosticBuilder, Span, DiagnosticCode};
//!
//! let diag = DiagnosticBuilder::error("duplicate identifier")
//!     .code(DiagnosticCode::E_SEM_DUPLICATE_IDENT)
//!     .span(Span::DUMMY)
//!     .help("pick a different name")
//!     .build();
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Note,
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity, location, and optional extra context.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
    pub code: Option<DiagnosticCode>,
    pub notes: Vec<String>,
    pub helps: Vec<String>,
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = self.code {
            write!(f, "{}[{}]: {}", self.level, code.as_str(), self.message)?;
        } else {
            write!(f, "{}: {}", self.level, self.message)?;
        }
        if !self.span.is_empty() || self.span.line != 0 {
            write!(f, " (line {}, column {})", self.span.line, self.span.column)?;
        }
        Ok(())
    }
}

/// Collects diagnostics emitted over the course of a compilation.
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.emit(diagnostic);
    }

    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level == Level::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().iter().filter(|d| d.level == Level::Error).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.borrow().iter().filter(|d| d.level == Level::Warning).count()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Note), "note");
    }

    #[test]
    fn diagnostic_error_constructor() {
        let diag = Diagnostic::error("bad token", Span::DUMMY);
        assert_eq!(diag.level, Level::Error);
    }

    #[test]
    fn handler_tracks_error_and_warning_counts() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("e1", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::warning("w1", Span::DUMMY));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.warning_count(), 1);
    }

    #[test]
    fn handler_build_error_with_code() {
        let handler = Handler::new();
        handler
            .build_error(Span::DUMMY, "duplicate ident")
            .code(DiagnosticCode::E_SEM_DUPLICATE_IDENT)
            .emit(&handler);

        let diags = handler.diagnostics();
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_SEM_DUPLICATE_IDENT));
    }

    #[test]
    fn handler_clear() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("e", Span::DUMMY));
        handler.clear();
        assert!(!handler.has_errors());
    }

    #[test]
    fn diagnostic_display_includes_code_and_location() {
        let diag = Diagnostic::error("bad", Span::new(0, 1, 3, 7)).with_code(DiagnosticCode::E_PARSE_UNEXPECTED_TOKEN);
        let text = format!("{diag}");
        assert!(text.contains("E2001"));
        assert!(text.contains("line 3"));
    }
}

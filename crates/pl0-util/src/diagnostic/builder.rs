//! Fluent builder for constructing [`Diagnostic`]s.

use super::{Diagnostic, DiagnosticCode, Level, Span};

/// A source code snippet for display under a diagnostic.
#[derive(Clone, Debug)]
pub struct SourceSnippet {
    pub line: String,
    pub line_number: usize,
    pub start_column: usize,
    pub end_column: usize,
    pub label: Option<String>,
}

impl SourceSnippet {
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    pub fn point(line: impl Into<String>, line_number: usize, column: usize) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column: column,
            end_column: column,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Render the line with a caret underline beneath the flagged range.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let mut out = String::new();
        out.push_str(&format!("{:>width$} | {}\n", self.line_number, self.line, width = width));
        out.push_str(&format!("{:>width$} | ", "", width = width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = (self.end_column - self.start_column).max(1);
        out.push_str(&" ".repeat(underline_start));
        out.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            out.push_str(&format!(" {label}"));
        }
        out
    }
}

/// Builds a [`Diagnostic`] through a chain of fluent calls.
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build and immediately emit to a [`super::Handler`].
    pub fn emit(self, handler: &super::Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_format_contains_caret_and_label() {
        let snippet = SourceSnippet::new("const a = 1.", 1, 7, 8, Some("duplicate"));
        let formatted = snippet.format();
        assert!(formatted.contains("const a = 1."));
        assert!(formatted.contains('^'));
        assert!(formatted.contains("duplicate"));
    }

    #[test]
    fn builder_error_basic() {
        let diag = DiagnosticBuilder::error("unexpected token").span(Span::DUMMY).build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "unexpected token");
    }

    #[test]
    fn builder_fluent_chain() {
        let diag = DiagnosticBuilder::error("duplicate ident `a`")
            .code(DiagnosticCode::E_SEM_DUPLICATE_IDENT)
            .span(Span::new(0, 1, 3, 7))
            .note("already declared in this procedure")
            .help("rename one of the declarations")
            .build();

        assert_eq!(diag.code, Some(DiagnosticCode::E_SEM_DUPLICATE_IDENT));
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.helps.len(), 1);
    }

    #[test]
    fn builder_emit_to_handler() {
        use super::super::Handler;

        let handler = Handler::new();
        DiagnosticBuilder::error("bad").span(Span::DUMMY).emit(&handler);
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
    }
}

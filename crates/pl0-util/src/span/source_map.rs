//! Source map for managing source files and computing line/column snippets.

use std::sync::Arc;

use super::{FileId, Span};

/// A source file with its content and precomputed line starts.
#[derive(Clone)]
pub struct SourceFile {
    id: FileId,
    name: String,
    content: Arc<str>,
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::compute_line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn compute_line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        for (i, ch) in content.char_indices() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }
        line_starts.into()
    }

    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to (line, column), both 1-indexed.
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => (line + 1, 1),
            Err(insert_point) => {
                let line = insert_point - 1;
                let line_start = self.line_starts.get(line).copied().unwrap_or(0);
                (line + 1, offset - line_start + 1)
            }
        }
    }

    /// Get a specific source line (1-indexed), with trailing newline stripped.
    pub fn line_at(&self, line: usize) -> Option<&str> {
        let start = self.line_start(line.checked_sub(1)?)?;
        let end = self.line_start(line).unwrap_or(self.content.len());
        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// A source map managing the source files loaded during a compilation.
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    #[inline]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let id = self.files.len();
        let file = SourceFile::new(id, name, content);
        let file_id = file.id();
        self.files.push(Arc::new(file));
        file_id
    }

    #[inline]
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.get(id.0).cloned()
    }

    /// Render a span as a `--> file:line:col` header plus the underlined
    /// source line, for display alongside a [`crate::diagnostic::Diagnostic`].
    pub fn format_span(&self, span: Span) -> Option<String> {
        let file = self.get(span.file_id)?;
        let line = file.line_at(span.line as usize)?;
        let line_num_width = file.line_count().to_string().len().max(3);

        let mut result = String::new();
        result.push_str(&format!("--> {}:{}:{}\n", file.name(), span.line, span.column));
        result.push_str(&format!("{:>width$} | {}\n", span.line, line, width = line_num_width));
        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = (span.column as usize).saturating_sub(1);
        let underline_len = if span.start == span.end { 1 } else { (span.end - span.start).max(1) };
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_count_and_starts() {
        let file = SourceFile::new(0, "test.pl0", "line1\nline2\nline3");
        assert_eq!(file.line_count(), 3);
        assert_eq!(file.line_start(1), Some(6));
    }

    #[test]
    fn offset_to_line_col() {
        let file = SourceFile::new(0, "test.pl0", "fn main() {}");
        assert_eq!(file.offset_to_line_col(3), (1, 4));
    }

    #[test]
    fn line_at_strips_newline() {
        let file = SourceFile::new(0, "test.pl0", "line1\nline2\nline3");
        assert_eq!(file.line_at(2), Some("line2"));
    }

    #[test]
    fn source_map_round_trip() {
        let mut map = SourceMap::new();
        let id = map.add_file("main.pl0", "const a = 1.");
        let file = map.get(id).unwrap();
        assert_eq!(file.name(), "main.pl0");
    }

    #[test]
    fn format_span_contains_file_name_and_caret() {
        let mut map = SourceMap::new();
        let id = map.add_file("main.pl0", "const a = 1.");
        let span = Span::with_file(6, 7, id, 1, 7);
        let formatted = map.format_span(span).unwrap();
        assert!(formatted.contains("main.pl0"));
        assert!(formatted.contains('^'));
    }
}

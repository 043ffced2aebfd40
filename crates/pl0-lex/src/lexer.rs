//! The PL/0 lexer: turns source text into a stream of [`Token`]s.

use pl0_util::diagnostic::DiagnosticCode;
use pl0_util::{Handler, Span};

use crate::cursor::Cursor;
use crate::token::{Sym, Token, TokenKind};

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Scans PL/0 source text into tokens, reporting lexical errors to a shared
/// [`Handler`] rather than failing outright. Implements [`Iterator`], ending
/// at (and including) the first [`TokenKind::Eof`].
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    handler: &'a Handler,
    token_start: usize,
    token_start_line: u32,
    token_start_column: u32,
    emitted_eof: bool,
    tokens_emitted: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        tracing::debug!(bytes = source.len(), "lexer starting");
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            emitted_eof: false,
            tokens_emitted: 0,
        }
    }

    fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    fn span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    fn token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.span())
    }

    fn report_error(&mut self, code: DiagnosticCode, message: impl Into<String>) {
        self.handler.build_error(self.span(), message).code(code).emit(self.handler);
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current_char() {
                c if c.is_whitespace() => {
                    self.cursor.advance();
                }
                '/' if self.cursor.peek_char(1) == '*' => {
                    self.skip_block_comment();
                }
                _ => return,
            }
        }
    }

    fn skip_block_comment(&mut self) {
        let start_line = self.cursor.line();
        let start_column = self.cursor.column();
        self.cursor.advance(); // '/'
        self.cursor.advance(); // '*'
        loop {
            if self.cursor.is_at_end() {
                self.report_error(
                    DiagnosticCode::E_LEX_UNTERMINATED_COMMENT,
                    format!("unterminated comment starting at line {start_line}, column {start_column}"),
                );
                return;
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return;
            }
            self.cursor.advance();
        }
    }

    /// Scans and returns the next token, or `None` once `Eof` has already
    /// been produced.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.emitted_eof {
            return None;
        }

        self.skip_whitespace_and_comments();
        self.mark_token_start();

        let c = self.cursor.current_char();
        let tok = match c {
            '\0' => {
                self.emitted_eof = true;
                tracing::debug!(tokens = self.tokens_emitted, "lexer reached end of source");
                self.token(TokenKind::Eof)
            }
            '+' => self.lex_single(Sym::Plus),
            '-' => self.lex_single(Sym::Minus),
            '*' => self.lex_single(Sym::Star),
            '/' => self.lex_single(Sym::Slash),
            '(' => self.lex_single(Sym::LParen),
            ')' => self.lex_single(Sym::RParen),
            '[' => self.lex_single(Sym::LBracket),
            ']' => self.lex_single(Sym::RBracket),
            ',' => self.lex_single(Sym::Comma),
            ';' => self.lex_single(Sym::Semicolon),
            '.' => self.lex_single(Sym::Period),
            '=' => self.lex_single(Sym::Equal),
            '#' => self.lex_single(Sym::Hash),
            '?' => self.lex_single(Sym::Question),
            '!' => self.lex_single(Sym::Bang),
            ':' => self.lex_colon(),
            '<' => self.lex_angle('<', Sym::Less, Sym::LessEqual),
            '>' => self.lex_angle('>', Sym::Greater, Sym::GreaterEqual),
            '"' => self.lex_string(),
            c if is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            c => {
                self.cursor.advance();
                self.report_error(
                    DiagnosticCode::E_LEX_UNEXPECTED_CHAR,
                    format!("unexpected character {c:?}"),
                );
                return self.next_token();
            }
        };
        self.tokens_emitted += 1;
        tracing::trace!(kind = ?tok.kind, "token");
        Some(tok)
    }

    fn lex_single(&mut self, sym: Sym) -> Token {
        self.cursor.advance();
        self.token(TokenKind::Symbol(sym))
    }

    /// `:` only ever appears as the first half of `:=` in PL/0; a bare `:`
    /// is reported and consumed so the parser sees a clean token stream.
    fn lex_colon(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.current_char() == '=' {
            self.cursor.advance();
            return self.token(TokenKind::Symbol(Sym::Assign));
        }
        self.report_error(DiagnosticCode::E_LEX_UNEXPECTED_CHAR, "expected `:=`, found a bare `:`");
        self.token(TokenKind::Symbol(Sym::Assign))
    }

    fn lex_angle(&mut self, c: char, plain: Sym, with_equal: Sym) -> Token {
        debug_assert_eq!(self.cursor.current_char(), c);
        self.cursor.advance();
        if self.cursor.current_char() == '=' {
            self.cursor.advance();
            return self.token(TokenKind::Symbol(with_equal));
        }
        self.token(TokenKind::Symbol(plain))
    }

    fn lex_identifier(&mut self) -> Token {
        let mut buf = String::new();
        while is_ident_continue(self.cursor.current_char()) {
            buf.push(self.cursor.current_char().to_ascii_uppercase());
            self.cursor.advance();
        }
        match Sym::keyword(&buf) {
            Some(sym) => self.token(TokenKind::Symbol(sym)),
            None => self.token(TokenKind::Ident(buf)),
        }
    }

    fn lex_number(&mut self) -> Token {
        let mut buf = String::new();
        while self.cursor.current_char().is_ascii_digit() {
            buf.push(self.cursor.current_char());
            self.cursor.advance();
        }
        match buf.parse::<i64>() {
            Ok(value) => self.token(TokenKind::Number(value as i32)),
            Err(_) => {
                self.report_error(DiagnosticCode::E_LEX_UNEXPECTED_CHAR, format!("invalid numeric literal `{buf}`"));
                self.token(TokenKind::Number(0))
            }
        }
    }

    /// Strings are delimited by `"` with Pascal-style `""` as an escaped
    /// literal quote; there is no other escape processing.
    fn lex_string(&mut self) -> Token {
        let start_line = self.cursor.line();
        let start_column = self.cursor.column();
        self.cursor.advance(); // opening quote

        let mut buf = String::new();
        loop {
            match self.cursor.current_char() {
                '\0' | '\n' => {
                    self.report_error(
                        DiagnosticCode::E_LEX_UNTERMINATED_STRING,
                        format!("unterminated string literal starting at line {start_line}, column {start_column}"),
                    );
                    return self.token(TokenKind::Str(buf));
                }
                '"' => {
                    self.cursor.advance();
                    if self.cursor.current_char() == '"' {
                        buf.push('"');
                        self.cursor.advance();
                        continue;
                    }
                    return self.token(TokenKind::Str(buf));
                }
                c => {
                    buf.push(c);
                    self.cursor.advance();
                }
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(src: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        let lexer = Lexer::new(src, &handler);
        lexer.map(|t| t.kind).collect()
    }

    #[test]
    fn lexes_keyword_case_insensitively() {
        let kinds = lex_all("begin BEGIN Begin end");
        assert_eq!(
            kinds,
            vec![
                TokenKind::Symbol(Sym::Begin),
                TokenKind::Symbol(Sym::Begin),
                TokenKind::Symbol(Sym::Begin),
                TokenKind::Symbol(Sym::End),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lexes_two_char_operators() {
        let kinds = lex_all(":= <= >= < >");
        assert_eq!(
            kinds,
            vec![
                TokenKind::Symbol(Sym::Assign),
                TokenKind::Symbol(Sym::LessEqual),
                TokenKind::Symbol(Sym::GreaterEqual),
                TokenKind::Symbol(Sym::Less),
                TokenKind::Symbol(Sym::Greater),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lexes_identifier_uppercased() {
        let kinds = lex_all("myVar");
        assert_eq!(kinds, vec![TokenKind::Ident("MYVAR".to_string()), TokenKind::Eof]);
    }

    #[test]
    fn lexes_number() {
        let kinds = lex_all("42");
        assert_eq!(kinds, vec![TokenKind::Number(42), TokenKind::Eof]);
    }

    #[test]
    fn lexes_string_with_doubled_quote_escape() {
        let kinds = lex_all("\"say \"\"hi\"\"\"");
        assert_eq!(kinds, vec![TokenKind::Str("say \"hi\"".to_string()), TokenKind::Eof]);
    }

    #[test]
    fn skips_block_comments() {
        let kinds = lex_all("begin /* a comment */ end");
        assert_eq!(
            kinds,
            vec![TokenKind::Symbol(Sym::Begin), TokenKind::Symbol(Sym::End), TokenKind::Eof]
        );
    }

    #[test]
    fn reports_unterminated_comment() {
        let handler = Handler::new();
        let lexer = Lexer::new("begin /* never closes", &handler);
        let _: Vec<_> = lexer.collect();
        assert!(handler.has_errors());
    }

    #[test]
    fn column_tracks_token_start_not_end() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("  abc", &handler);
        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.span.column, 3);
    }

    #[test]
    fn reports_unexpected_char_and_continues() {
        let handler = Handler::new();
        let lexer = Lexer::new("begin @ end", &handler);
        let kinds: Vec<_> = lexer.map(|t| t.kind).collect();
        assert!(handler.has_errors());
        assert_eq!(
            kinds,
            vec![TokenKind::Symbol(Sym::Begin), TokenKind::Symbol(Sym::End), TokenKind::Eof]
        );
    }
}

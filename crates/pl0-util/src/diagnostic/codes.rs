//! Diagnostic codes for categorizing compiler errors and warnings.

/// A unique code identifying a diagnostic message, in the form `{prefix}{number}`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DiagnosticCode {
    pub prefix: &'static str,
    pub number: u32,
}

impl DiagnosticCode {
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // Lexer
    pub const E_LEX_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    pub const E_LEX_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    pub const E_LEX_UNTERMINATED_COMMENT: Self = Self::new("E", 1003);

    // Parser (syntax)
    pub const E_PARSE_UNEXPECTED_TOKEN: Self = Self::new("E", 2001);
    pub const E_PARSE_EXPECTED_TOKEN: Self = Self::new("E", 2002);
    pub const E_PARSE_UNEXPECTED_EOF: Self = Self::new("E", 2003);

    // Semantic (name list)
    pub const E_SEM_DUPLICATE_IDENT: Self = Self::new("E", 3001);
    pub const E_SEM_UNDECLARED_IDENT: Self = Self::new("E", 3002);
    pub const E_SEM_WRONG_KIND: Self = Self::new("E", 3003);
    pub const E_SEM_END_PROC_NO_PARENT: Self = Self::new("E", 3004);
}

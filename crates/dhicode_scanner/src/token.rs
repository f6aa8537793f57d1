//! Tokens produced by the lexer.

use crate::char_codes::DOUBLE_QUOTE;
use crate::keywords::Keyword;
use dhicode_core::text::TextRange;
use std::fmt;

/// The closed set of token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A character (or unterminated string) the lexer does not recognize.
    Illegal,
    EndOfInput,
    Identifier,
    Number,
    String,
    Keyword,
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `>`
    GreaterThan,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl TokenKind {
    /// The name used when printing a token stream.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::GreaterThan => ">",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
        }
    }

    /// Whether tokens of this kind can join two expressions.
    pub const fn is_infix_operator(self) -> bool {
        matches!(self, TokenKind::Plus | TokenKind::GreaterThan)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A scanned token: its kind and the exact text it was scanned from.
///
/// String tokens carry the text between the quotes; every other kind carries
/// its source text verbatim. `EndOfInput` carries the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    #[inline]
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// The keyword this token spells, if it is a keyword token.
    pub fn keyword(&self) -> Option<Keyword> {
        if self.kind == TokenKind::Keyword {
            Keyword::from_str_exact(&self.literal)
        } else {
            None
        }
    }

    /// Whether this is the error token for a string missing its closing quote.
    ///
    /// A `"` always starts string scanning, so an illegal token can only begin
    /// with one when the string ran into the end of input.
    pub fn is_unterminated_string(&self) -> bool {
        self.kind == TokenKind::Illegal && self.literal.starts_with(DOUBLE_QUOTE)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, '{}')", self.kind, self.literal)
    }
}

/// A token together with the byte range it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub token: Token,
    /// Start of the token through the end of the consumed text; quotes
    /// included for strings.
    pub range: TextRange,
}

impl TokenInfo {
    pub fn new(token: Token, range: TextRange) -> Self {
        Self { token, range }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.token.kind
    }

    #[inline]
    pub fn literal(&self) -> &str {
        &self.token.literal
    }
}

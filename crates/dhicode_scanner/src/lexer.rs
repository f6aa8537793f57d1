//! The DhiCode lexer.
//!
//! A single-pass, pull-based scanner: each call to [`Lexer::next_token`]
//! skips whitespace and returns exactly one token. Malformed input never
//! produces an error value; it comes back as an `Illegal` token and the caller
//! decides what to do with it.

use crate::char_codes::*;
use crate::keywords::Keyword;
use crate::token::{Token, TokenKind};
use dhicode_core::text::TextRange;
use std::iter::FusedIterator;

/// Cursor state over an in-memory source text.
///
/// The source is borrowed and walked by byte offset, decoding one code point
/// at a time, so scanning needs no buffer proportional to the input.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    /// Byte offset of `ch`.
    pos: usize,
    /// Byte offset just past `ch`.
    read_pos: usize,
    /// The code point under examination; `None` once the end has been passed.
    ch: Option<char>,
    /// Byte offset where the most recent token began.
    token_start: usize,
}

impl<'src> Lexer<'src> {
    /// Create a lexer positioned on the first code point of `source`.
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Self {
            source,
            pos: 0,
            read_pos: 0,
            ch: None,
            token_start: 0,
        };
        lexer.advance();
        lexer
    }

    /// Byte offset where the most recently returned token began.
    #[inline]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Byte offset just past the most recently returned token.
    #[inline]
    pub fn token_end(&self) -> usize {
        self.pos
    }

    /// Byte range of the most recently returned token.
    pub fn token_range(&self) -> TextRange {
        TextRange::from_offsets(self.token_start, self.pos)
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    /// Move forward by exactly one code point.
    fn advance(&mut self) {
        self.pos = self.read_pos;
        self.ch = self.source[self.read_pos..].chars().next();
        if let Some(ch) = self.ch {
            self.read_pos += ch.len_utf8();
        }
    }

    /// The code point under examination, `None` past the end of input.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.ch
    }

    /// Inspect the code point after the current one without consuming it.
    ///
    /// No current token needs two characters of context; this is the hook
    /// for two-character operators such as `==` or `>=`.
    pub fn peek(&self) -> Option<char> {
        self.source[self.read_pos..].chars().next()
    }

    /// Reposition the cursor onto the code point starting at byte `offset`.
    fn jump_to(&mut self, offset: usize) {
        self.read_pos = offset;
        self.advance();
    }

    fn skip_whitespace(&mut self) {
        while self.ch.is_some_and(is_white_space) {
            self.advance();
        }
    }

    // ========================================================================
    // Scanning
    // ========================================================================

    /// Scan the next token.
    ///
    /// Once the end of the input is reached every further call returns
    /// `EndOfInput` again.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.token_start = self.pos;

        let Some(ch) = self.ch else {
            return Token::end_of_input();
        };

        match ch {
            EQUALS => self.single_char_token(TokenKind::Assign, ch),
            PLUS => self.single_char_token(TokenKind::Plus, ch),
            GREATER_THAN => self.single_char_token(TokenKind::GreaterThan, ch),
            OPEN_PAREN => self.single_char_token(TokenKind::LParen, ch),
            CLOSE_PAREN => self.single_char_token(TokenKind::RParen, ch),
            DOUBLE_QUOTE => self.scan_string(),
            _ if is_thaana_letter(ch) => self.scan_identifier_or_keyword(),
            _ if is_digit(ch) => self.scan_number(),
            _ => self.single_char_token(TokenKind::Illegal, ch),
        }
    }

    fn single_char_token(&mut self, kind: TokenKind, ch: char) -> Token {
        self.advance();
        Token::new(kind, ch)
    }

    fn scan_identifier_or_keyword(&mut self) -> Token {
        let start = self.pos;
        while self.ch.is_some_and(is_thaana_letter) {
            self.advance();
        }
        let text = &self.source[start..self.pos];

        let kind = match Keyword::from_str_exact(text) {
            Some(_) => TokenKind::Keyword,
            None => TokenKind::Identifier,
        };
        Token::new(kind, text)
    }

    fn scan_number(&mut self) -> Token {
        let start = self.pos;
        while self.ch.is_some_and(is_digit) {
            self.advance();
        }
        Token::new(TokenKind::Number, &self.source[start..self.pos])
    }

    /// Scan a string literal; the cursor is on the opening quote.
    ///
    /// No escape processing: the literal ends at the very next `"`.
    fn scan_string(&mut self) -> Token {
        let start = self.pos;
        let body_start = self.read_pos;

        // A '"' byte never occurs inside a multi-byte UTF-8 sequence, so a raw
        // byte search lands on a char boundary.
        match memchr::memchr(DOUBLE_QUOTE as u8, &self.source.as_bytes()[body_start..]) {
            Some(len) => {
                let close = body_start + len;
                self.jump_to(close);
                self.advance();
                Token::new(TokenKind::String, &self.source[body_start..close])
            }
            None => {
                self.jump_to(self.source.len());
                Token::new(TokenKind::Illegal, &self.source[start..])
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token before `EndOfInput`, then `None` forever.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_end_of_input() {
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Lexer<'_> {}

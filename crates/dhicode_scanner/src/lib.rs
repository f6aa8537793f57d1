//! dhicode_scanner: Lexer/tokenizer for DhiCode source text.
//!
//! Identifiers and keywords are written in Thaana; numbers are ASCII digit
//! runs; strings are double-quoted with no escapes. The lexer reports
//! malformed input as `Illegal` tokens, and [`tokenize`] turns those into
//! diagnostics.

mod char_codes;
mod keywords;
mod lexer;
mod token;

pub use char_codes::{is_thaana_letter, THAANA_FIRST, THAANA_LAST};
pub use keywords::Keyword;
pub use lexer::Lexer;
pub use token::{Token, TokenInfo, TokenKind};

use dhicode_core::TextRange;
use dhicode_diagnostics::{messages, Diagnostic, DiagnosticCollection};

/// Scan `source` to the end.
///
/// The returned tokens always end with exactly one `EndOfInput`. Each
/// `Illegal` token contributes one diagnostic located at its range.
pub fn tokenize(source: &str) -> (Vec<TokenInfo>, DiagnosticCollection) {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    let mut diagnostics = DiagnosticCollection::new();

    loop {
        let token = lexer.next_token();
        let range = lexer.token_range();

        if let Some(diagnostic) = diagnose(&token, range) {
            diagnostics.add(diagnostic);
        }

        let done = token.is_end_of_input();
        tokens.push(TokenInfo::new(token, range));
        if done {
            break;
        }
    }

    (tokens, diagnostics)
}

/// Derive the diagnostic an `Illegal` token stands for.
pub fn diagnose(token: &Token, range: TextRange) -> Option<Diagnostic> {
    if token.kind != TokenKind::Illegal {
        return None;
    }
    let diagnostic = if token.is_unterminated_string() {
        Diagnostic::at(range.to_span(), &messages::UNTERMINATED_STRING_LITERAL, &[])
    } else {
        Diagnostic::at(range.to_span(), &messages::INVALID_CHARACTER, &[token.literal.as_str()])
    };
    Some(diagnostic)
}

//! Character code constants and classes used by the lexer.

pub const DOUBLE_QUOTE: char = '"';
pub const OPEN_PAREN: char = '(';
pub const CLOSE_PAREN: char = ')';
pub const PLUS: char = '+';
pub const EQUALS: char = '=';
pub const GREATER_THAN: char = '>';

/// First code point of the Thaana letter range (HAA).
pub const THAANA_FIRST: char = '\u{0780}';
/// Last code point of the Thaana letter range (SUKUN).
pub const THAANA_LAST: char = '\u{07B1}';

/// Check if a character belongs to the identifier script.
///
/// Vowel signs and the sukun sit inside the same block, so a word is one
/// contiguous run of this range.
#[inline]
pub fn is_thaana_letter(ch: char) -> bool {
    (THAANA_FIRST..=THAANA_LAST).contains(&ch)
}

/// Check if a character is an ASCII decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if a character is whitespace (Unicode `White_Space`, line breaks included).
#[inline]
pub fn is_white_space(ch: char) -> bool {
    ch.is_whitespace()
}

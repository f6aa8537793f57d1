//! The reserved words of DhiCode.
//!
//! Lookup is exact and whole-string: no case folding, no normalization, no
//! prefix matching. The table is built once per process and only read after.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use std::fmt;

/// A reserved word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// Variable declaration ("let").
    Declare,
    If,
    Else,
    While,
    Function,
    Return,
    Print,
    /// Closes a block.
    End,
    True,
    False,
    And,
    Or,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 12] = [
        Keyword::Declare,
        Keyword::If,
        Keyword::Else,
        Keyword::While,
        Keyword::Function,
        Keyword::Return,
        Keyword::Print,
        Keyword::End,
        Keyword::True,
        Keyword::False,
        Keyword::And,
        Keyword::Or,
    ];

    /// The exact source spelling of this keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Declare => "ކަނޑައަޅާ",
            Keyword::If => "ނަމަ",
            Keyword::Else => "ނޫންނަމަ",
            Keyword::While => "ހިނދު",
            Keyword::Function => "ވަޒީފާ",
            Keyword::Return => "ފޮނުވާ",
            Keyword::Print => "ދައްކާ",
            Keyword::End => "ނިމުނީ",
            Keyword::True => "އާން",
            Keyword::False => "ނޫން",
            Keyword::And => "އަދި",
            Keyword::Or => "ނުވަތަ",
        }
    }

    /// Look up a scanned word in the keyword table.
    pub fn from_str_exact(text: &str) -> Option<Keyword> {
        KEYWORDS.get(text).copied()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

lazy_static! {
    static ref KEYWORDS: FxHashMap<&'static str, Keyword> =
        Keyword::ALL.iter().map(|&kw| (kw.as_str(), kw)).collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_spelling_round_trips() {
        for kw in Keyword::ALL {
            assert_eq!(Keyword::from_str_exact(kw.as_str()), Some(kw));
        }
    }

    #[test]
    fn test_spellings_are_distinct() {
        assert_eq!(KEYWORDS.len(), Keyword::ALL.len());
    }

    #[test]
    fn test_no_partial_match() {
        // "false" is a prefix of "else"
        assert_eq!(Keyword::from_str_exact("ނޫން"), Some(Keyword::False));
        assert_eq!(Keyword::from_str_exact("ނޫންނަމަ"), Some(Keyword::Else));
        assert_eq!(Keyword::from_str_exact("ނޫންނ"), None);
        assert_eq!(Keyword::from_str_exact("ނަމަނަމަ"), None);
        assert_eq!(Keyword::from_str_exact(""), None);
    }
}

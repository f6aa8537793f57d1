//! Scanner integration tests.
//!
//! Verifies that the lexer tokenizes DhiCode programs correctly.

use dhicode_diagnostics::messages;
use dhicode_scanner::{tokenize, Keyword, Lexer, Token, TokenKind};

/// Helper: scan all tokens up to and including EndOfInput.
fn scan_all(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_end_of_input();
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

fn scan_kinds(source: &str) -> Vec<TokenKind> {
    scan_all(source).into_iter().map(|t| t.kind).collect()
}

fn tok(kind: TokenKind, literal: &str) -> Token {
    Token::new(kind, literal)
}

#[test]
fn test_empty_source() {
    assert_eq!(scan_all(""), vec![Token::end_of_input()]);
}

#[test]
fn test_whitespace_only() {
    for source in ["   ", "\n\t \r\n", "\u{00A0}\u{3000}\u{2028}"] {
        assert_eq!(scan_all(source), vec![Token::end_of_input()], "{:?}", source);
    }
}

#[test]
fn test_every_keyword_alone() {
    for kw in Keyword::ALL {
        let tokens = scan_all(kw.as_str());
        assert_eq!(tokens, vec![tok(TokenKind::Keyword, kw.as_str()), Token::end_of_input()]);
        assert_eq!(tokens[0].keyword(), Some(kw));
    }
}

#[test]
fn test_every_keyword_followed_by_non_script_char() {
    for kw in Keyword::ALL {
        let source = format!("{}(", kw.as_str());
        assert_eq!(
            scan_all(&source),
            vec![
                tok(TokenKind::Keyword, kw.as_str()),
                tok(TokenKind::LParen, "("),
                Token::end_of_input(),
            ]
        );
    }
}

#[test]
fn test_maximal_munch_over_keyword_prefix() {
    // "false" is a prefix of "else"; the whole run is scanned first.
    assert_eq!(
        scan_all("ނޫންނަމަ"),
        vec![tok(TokenKind::Keyword, "ނޫންނަމަ"), Token::end_of_input()]
    );
    assert_eq!(scan_all("ނޫން")[0].keyword(), Some(Keyword::False));

    // A keyword with trailing script letters is an identifier.
    assert_eq!(
        scan_all("ނަމަތައް"),
        vec![tok(TokenKind::Identifier, "ނަމަތައް"), Token::end_of_input()]
    );
}

#[test]
fn test_identifiers() {
    let tokens = scan_all("ނަން އުމުރު");
    assert_eq!(
        tokens,
        vec![
            tok(TokenKind::Identifier, "ނަން"),
            tok(TokenKind::Identifier, "އުމުރު"),
            Token::end_of_input(),
        ]
    );
}

#[test]
fn test_latin_letters_are_illegal() {
    assert_eq!(
        scan_kinds("abc"),
        vec![TokenKind::Illegal, TokenKind::Illegal, TokenKind::Illegal, TokenKind::EndOfInput]
    );
}

#[test]
fn test_number_followed_by_letters() {
    let tokens = scan_all("123ނަން");
    assert_eq!(
        tokens,
        vec![
            tok(TokenKind::Number, "123"),
            tok(TokenKind::Identifier, "ނަން"),
            Token::end_of_input(),
        ]
    );

    let tokens = scan_all("123abc");
    assert_eq!(tokens[0], tok(TokenKind::Number, "123"));
    assert_eq!(tokens[1], tok(TokenKind::Illegal, "a"));
}

#[test]
fn test_number_keeps_leading_zeros() {
    assert_eq!(scan_all("007")[0], tok(TokenKind::Number, "007"));
}

#[test]
fn test_string_literals() {
    assert_eq!(
        scan_all(r#""ހެލޯ" "world""#),
        vec![
            tok(TokenKind::String, "ހެލޯ"),
            tok(TokenKind::String, "world"),
            Token::end_of_input(),
        ]
    );
}

#[test]
fn test_unterminated_string_consumes_rest_of_input() {
    let tokens = scan_all("ދައްކާ(\"ހެލޯ )");
    assert_eq!(
        tokens,
        vec![
            tok(TokenKind::Keyword, "ދައްކާ"),
            tok(TokenKind::LParen, "("),
            tok(TokenKind::Illegal, "\"ހެލޯ )"),
            Token::end_of_input(),
        ]
    );
    assert!(tokens[2].is_unterminated_string());
}

#[test]
fn test_unrecognized_characters() {
    assert_eq!(
        scan_all("@ ; -"),
        vec![
            tok(TokenKind::Illegal, "@"),
            tok(TokenKind::Illegal, ";"),
            tok(TokenKind::Illegal, "-"),
            Token::end_of_input(),
        ]
    );
}

#[test]
fn test_non_ascii_illegal_character_is_one_code_point() {
    assert_eq!(
        scan_all("€1"),
        vec![tok(TokenKind::Illegal, "€"), tok(TokenKind::Number, "1"), Token::end_of_input()]
    );
}

#[test]
fn test_repeated_calls_after_end() {
    let mut lexer = Lexer::new("ނަން");
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..10 {
        assert_eq!(lexer.next_token(), Token::end_of_input());
    }
}

#[test]
fn test_declaration_end_to_end() {
    assert_eq!(
        scan_all("ކަނޑައަޅާ އުމުރު = 25"),
        vec![
            tok(TokenKind::Keyword, "ކަނޑައަޅާ"),
            tok(TokenKind::Identifier, "އުމުރު"),
            tok(TokenKind::Assign, "="),
            tok(TokenKind::Number, "25"),
            Token::end_of_input(),
        ]
    );
}

#[test]
fn test_program_with_control_flow() {
    let source = "\
ކަނޑައަޅާ އުމުރު = 25
ނަމަ (އުމުރު > 18)
    ދައްކާ(\"ބޮޑު\")
ނިމުނީ
";
    assert_eq!(
        scan_kinds(source),
        vec![
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Number,
            TokenKind::Keyword,
            TokenKind::LParen,
            TokenKind::Identifier,
            TokenKind::GreaterThan,
            TokenKind::Number,
            TokenKind::RParen,
            TokenKind::Keyword,
            TokenKind::LParen,
            TokenKind::String,
            TokenKind::RParen,
            TokenKind::Keyword,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_tokenize_ranges_and_diagnostics() {
    let source = "ނަން @ \"ބޮޑު";
    let (tokens, diagnostics) = tokenize(source);

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind()).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Identifier, TokenKind::Illegal, TokenKind::Illegal, TokenKind::EndOfInput]
    );
    assert_eq!(tokens[0].range.text(source), "ނަން");
    assert_eq!(tokens[1].range.text(source), "@");
    assert_eq!(tokens[2].range.text(source), "\"ބޮޑު");
    assert!(tokens[3].range.is_empty());

    assert_eq!(diagnostics.len(), 2);
    let codes: Vec<u32> = diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![messages::INVALID_CHARACTER.code, messages::UNTERMINATED_STRING_LITERAL.code]
    );
    assert_eq!(diagnostics.diagnostics()[0].message_text, "Invalid character '@'.");
    assert_eq!(diagnostics.diagnostics()[1].span.map(|s| s.start), Some(tokens[2].range.pos));
}

#[test]
fn test_tokenize_clean_source_has_no_diagnostics() {
    let (tokens, diagnostics) = tokenize("ދައްކާ(1 + 2)");
    assert_eq!(tokens.len(), 7);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_independent_lexers_on_threads() {
    let first = "ކަނޑައަޅާ ނަން = \"ޢަލީ\"";
    let second = "ނަމަ (1 > 2) ދައްކާ(3) ނިމުނީ";

    let (a, b) = std::thread::scope(|scope| {
        let a = scope.spawn(|| scan_all(first));
        let b = scope.spawn(|| scan_all(second));
        (a.join().unwrap(), b.join().unwrap())
    });

    assert_eq!(a, scan_all(first));
    assert_eq!(b, scan_all(second));
    assert_eq!(a.len(), 5);
    assert_eq!(b.len(), 12);
}

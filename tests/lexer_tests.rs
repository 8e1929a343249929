// Integration tests for the lexer

use kaleido::{Lexer, TokenKind};

fn lex(source: &str) -> Vec<(TokenKind, String)> {
    Lexer::new(source)
        .tokenize()
        .into_iter()
        .map(|t| (t.kind, t.literal))
        .collect()
}

#[test]
fn test_single_character_punctuation() {
    let cases = [
        ('(', TokenKind::LeftParen),
        (')', TokenKind::RightParen),
        ('{', TokenKind::LeftCurlyBracket),
        ('}', TokenKind::RightCurlyBracket),
        ('[', TokenKind::LeftSquareBracket),
        (']', TokenKind::RightSquareBracket),
        (';', TokenKind::Semicolon),
        (',', TokenKind::Comma),
        (':', TokenKind::Colon),
        ('.', TokenKind::Dot),
        ('+', TokenKind::Plus),
        ('-', TokenKind::Minus),
        ('*', TokenKind::Star),
        ('/', TokenKind::Slash),
        ('%', TokenKind::Modulo),
    ];

    for (ch, kind) in cases {
        let tokens = lex(&ch.to_string());
        assert_eq!(
            tokens,
            vec![(kind, ch.to_string()), (TokenKind::Eof, String::new())],
            "lexing {ch:?}"
        );
    }
}

#[test]
fn test_two_character_operators() {
    let cases = [
        ("==", TokenKind::EqualTo),
        ("!=", TokenKind::NotEqualTo),
        (">=", TokenKind::GreaterThanEqualTo),
        ("<=", TokenKind::LessThanEqualTo),
        ("&&", TokenKind::And),
        ("||", TokenKind::Or),
    ];

    for (source, kind) in cases {
        let tokens = lex(source);
        assert_eq!(tokens.len(), 2, "lexing {source:?}");
        assert_eq!(tokens[0], (kind, source.to_string()));
        assert_eq!(tokens[1].0, TokenKind::Eof);
    }
}

#[test]
fn test_single_character_fallbacks() {
    assert_eq!(lex("=")[0], (TokenKind::Assign, "=".to_string()));
    assert_eq!(lex(">")[0], (TokenKind::GreaterThan, ">".to_string()));
    assert_eq!(lex("<")[0], (TokenKind::LessThan, "<".to_string()));
    assert_eq!(lex("!")[0], (TokenKind::Bang, "!".to_string()));
}

#[test]
fn test_lone_ampersand_and_pipe_are_illegal() {
    assert_eq!(
        lex("&"),
        vec![(TokenKind::Illegal, "&".to_string()), (TokenKind::Eof, String::new())]
    );
    assert_eq!(
        lex("|"),
        vec![(TokenKind::Illegal, "|".to_string()), (TokenKind::Eof, String::new())]
    );
    assert_eq!(lex("a & b")[1], (TokenKind::Illegal, "&".to_string()));
}

#[test]
fn test_keywords_and_identifiers() {
    assert_eq!(lex("def")[0], (TokenKind::Def, "def".to_string()));
    assert_eq!(lex("extern")[0], (TokenKind::Extern, "extern".to_string()));
    assert_eq!(lex("define")[0], (TokenKind::Identifier, "define".to_string()));
    assert_eq!(lex("_private")[0], (TokenKind::Identifier, "_private".to_string()));
}

#[test]
fn test_function_definition() {
    let kinds: Vec<TokenKind> = lex("def add(a, b) a + b;\nextern sin(x);")
        .into_iter()
        .map(|(kind, _)| kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Def,
            TokenKind::Identifier,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::RightParen,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::Extern,
            TokenKind::Identifier,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::RightParen,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_numbers() {
    assert_eq!(lex("42")[0], (TokenKind::Number, "42".to_string()));
    assert_eq!(lex("3.14")[0], (TokenKind::Number, "3.14".to_string()));
    // Not validated by the lexer
    assert_eq!(lex("1..2")[0], (TokenKind::Number, "1..2".to_string()));
    // A leading dot is punctuation
    assert_eq!(
        lex(".5"),
        vec![
            (TokenKind::Dot, ".".to_string()),
            (TokenKind::Number, "5".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn test_strings() {
    assert_eq!(lex(r#""""#)[0], (TokenKind::String, String::new()));
    assert_eq!(
        lex(r#""a" + "b""#),
        vec![
            (TokenKind::String, "a".to_string()),
            (TokenKind::Plus, "+".to_string()),
            (TokenKind::String, "b".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn test_unterminated_string() {
    assert_eq!(
        lex("\"never closed"),
        vec![
            (TokenKind::String, "never closed".to_string()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn test_whitespace_is_skipped() {
    assert_eq!(
        lex(" \t\r\n x \n"),
        vec![(TokenKind::Identifier, "x".to_string()), (TokenKind::Eof, String::new())]
    );
    assert_eq!(lex(""), vec![(TokenKind::Eof, String::new())]);
    assert_eq!(lex("   \n\t"), vec![(TokenKind::Eof, String::new())]);
}

#[test]
fn test_end_of_input_is_idempotent() {
    let mut lexer = Lexer::new("a + b");
    for _ in 0..3 {
        assert_ne!(lexer.next_token().kind, TokenKind::Eof);
    }
    for _ in 0..10 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Eof);
        assert!(token.literal.is_empty());
    }
}

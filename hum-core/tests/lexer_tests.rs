//! Lexer integration tests

mod common;

use common::lex;
use hum_core::TokenKind;

#[test]
fn statement_with_comment_tokenizes_fully() {
    let tokens = lex("x := 1.5 # comment");

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.0).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::ColonEquals,
            TokenKind::Number,
            TokenKind::Comment,
            TokenKind::Eof,
        ]
    );

    assert_eq!(tokens[0].1, "x");
    assert_eq!(tokens[1].1, ":=");
    assert_eq!(tokens[2].1, "1.5");
    assert_eq!(tokens[3].1, "# comment");

    // everything sits on line 1, including the trailing Eof
    assert!(tokens.iter().all(|t| t.2 == 1));
}

#[test]
fn empty_source_yields_single_eof() {
    let tokens = lex("");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].0, TokenKind::Eof);
    assert_eq!(tokens[0].2, 1);
}

#[test]
fn whitespace_only_source_yields_single_eof() {
    let tokens = lex("  \t\r\n\n  ");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].0, TokenKind::Eof);
    assert_eq!(tokens[0].2, 3);
}

#[test]
fn unterminated_string_reports_line_at_failure() {
    // two newlines, then a string that never closes
    let tokens = lex("\n\n\"abc");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].0, TokenKind::Error);
    assert_eq!(tokens[0].1, "Unterminated string.");
    assert_eq!(tokens[0].2, 3);
    assert_eq!(tokens[1].0, TokenKind::Eof);
}

#[test]
fn fully_unterminated_string_counts_embedded_newlines() {
    let mut tokens = lex("\"ab\nc\nd");
    let last = tokens.pop().unwrap();
    assert_eq!(last.0, TokenKind::Eof);

    let err = tokens.pop().unwrap();
    assert_eq!(err.0, TokenKind::Error);
    assert_eq!(err.1, "Unterminated string.");
    assert_eq!(err.2, 3);
}

#[test]
fn compound_operators_take_precedence() {
    let tokens = lex("a -> b => c :: d := e");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.0).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Arrow,
            TokenKind::Identifier,
            TokenKind::FatArrow,
            TokenKind::Identifier,
            TokenKind::ColonColon,
            TokenKind::Identifier,
            TokenKind::ColonEquals,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn adjacent_colons_resolve_greedily() {
    // ":=:" is colon_equals then colon, not colon then "=:"
    let kinds: Vec<TokenKind> = lex(":=:").iter().map(|t| t.0).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::ColonEquals, TokenKind::Colon, TokenKind::Eof]
    );
}

#[test]
fn error_token_does_not_stop_scanning() {
    let tokens = lex("a @ b");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.0).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Error,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[1].1, "Unexpected character.");
}

#[test]
fn brackets_pair_up() {
    let kinds: Vec<TokenKind> = lex("[]").iter().map(|t| t.0).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftBracket,
            TokenKind::RightBracket,
            TokenKind::Eof
        ]
    );
}

#[test]
fn lone_minus_is_a_token() {
    let tokens = lex("a - b");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.0).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Minus,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn numbers_do_not_consume_trailing_dot() {
    let tokens = lex("1.foo");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.0).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Number,
            TokenKind::Dot,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[0].1, "1");
}

#[test]
fn multiline_program_assigns_lines() {
    let tokens = lex("a\nbb\n\nccc");
    assert_eq!(tokens[0].2, 1);
    assert_eq!(tokens[1].2, 2);
    assert_eq!(tokens[2].2, 4);
    assert_eq!(tokens[3].0, TokenKind::Eof);
    assert_eq!(tokens[3].2, 4);
}

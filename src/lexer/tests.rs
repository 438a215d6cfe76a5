//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers, floats, exponents)
//! - String literals and unterminated strings
//! - Operators, punctuation and longest-match selection
//! - Comments and whitespace
//! - Line/column tracking and recovery from unknown input

use super::{
    lexer::{tokenize, tokenize_all, tokenize_with},
    rules::{RuleSpec, RuleTable, DEFAULT_RULES},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|token| token.kind).collect()
}

fn lexemes(source: &str) -> Vec<String> {
    tokenize(source).into_iter().map(|token| token.lexeme).collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("if else while for return int float string bool true false void");

    assert_eq!(tokens.len(), 12);
    for token in &tokens {
        assert_eq!(token.kind, TokenKind::Keyword, "{}", token);
    }
    assert_eq!(tokens[4].lexeme, "return");
}

#[test]
fn test_keyword_precedence() {
    assert_eq!(kinds("if"), vec![TokenKind::Keyword]);
    assert_eq!(kinds("ifx"), vec![TokenKind::Identifier]);
    assert_eq!(kinds("If"), vec![TokenKind::Identifier]);
    assert_eq!(kinds("integer"), vec![TokenKind::Identifier]);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase");

    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "foo");
    assert_eq!(tokens[2].lexeme, "baz_123");
    assert_eq!(tokens[3].lexeme, "_underscore");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].lexeme, "CamelCase");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5 1e10 2.5E-3");

    assert_eq!(
        tokens.iter().map(|token| token.lexeme.as_str()).collect::<Vec<_>>(),
        vec!["42", "3.14", "0", "100.5", "1e10", "2.5E-3"]
    );
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Number));
}

#[test]
fn test_number_followed_by_dot() {
    assert_eq!(lexemes("3."), vec!["3", "."]);
    assert_eq!(kinds("3."), vec![TokenKind::Number, TokenKind::Punctuation]);
    assert_eq!(lexemes("1e"), vec!["1", "e"]);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "multiple words" """#);

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].lexeme, "\"hello\"");
    assert_eq!(tokens[1].lexeme, "\"multiple words\"");
    assert_eq!(tokens[2].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[2].lexeme, "\"\"");
}

#[test]
fn test_string_escapes_kept_verbatim() {
    let tokens = tokenize(r#""quote\"test\n""#);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].lexeme, r#""quote\"test\n""#);
}

#[test]
fn test_unterminated_string() {
    let tokens = tokenize("x = \"abc\ny");

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[2].kind, TokenKind::Unknown);
    assert_eq!(tokens[2].lexeme, "\"abc");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!((tokens[3].line(), tokens[3].column()), (2, 1));
}

#[test]
fn test_unterminated_string_escaped_quote() {
    let tokens = tokenize(r#""ab\""#);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Unknown);
    assert_eq!(tokens[0].lexeme, r#""ab\""#);
}

#[test]
fn test_tokenize_operators() {
    let source = "++ -- += -= *= /= == != <= >= && || + - * / % = < > & | !";
    let tokens = tokenize(source);

    assert_eq!(tokens.len(), 23);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Operator));
    assert_eq!(
        tokens.iter().map(|token| token.lexeme.as_str()).collect::<Vec<_>>(),
        source.split(' ').collect::<Vec<_>>()
    );
}

#[test]
fn test_longest_match_equals() {
    let tokens = tokenize("===");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].lexeme, "==");
    assert_eq!(tokens[1].lexeme, "=");
    assert_eq!(tokens[1].column(), 3);
}

#[test]
fn test_adjacent_operators() {
    assert_eq!(lexemes("a+++b"), vec!["a", "++", "+", "b"]);
    assert_eq!(lexemes("x<=-1"), vec!["x", "<=", "-", "1"]);
    assert_eq!(lexemes("!==="), vec!["!=", "=="]);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("( ) { } [ ] , ; .");

    assert_eq!(tokens.len(), 9);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Punctuation));
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("int x = 5; // this is a comment\nint y = 10 /* block\ncomment */ ;");

    assert_eq!(
        lexemes("int x = 5; // this is a comment\nint y = 10 /* block\ncomment */ ;"),
        vec!["int", "x", "=", "5", ";", "int", "y", "=", "10", ";"]
    );
    let last = tokens.last().unwrap();
    assert_eq!((last.line(), last.column()), (3, 12));
}

#[test]
fn test_block_comment_variants() {
    assert!(tokenize("/**/").is_empty());
    assert!(tokenize("/***/").is_empty());
    assert!(tokenize("/* a **/").is_empty());
    assert!(tokenize("/* a / b * c */").is_empty());
    assert_eq!(lexemes("/* a */ b /* c */"), vec!["b"]);
}

#[test]
fn test_unterminated_block_comment() {
    let tokens = tokenize("a /* never\nclosed *");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].kind, TokenKind::Unknown);
    assert_eq!(tokens[1].lexeme, "/* never\nclosed *");
    assert_eq!((tokens[1].line(), tokens[1].column()), (1, 3));
}

#[test]
fn test_slash_is_not_comment() {
    assert_eq!(
        kinds("a / b"),
        vec![TokenKind::Identifier, TokenKind::Operator, TokenKind::Identifier]
    );
    assert_eq!(lexemes("a/=b"), vec!["a", "/=", "b"]);
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = tokenize("int x = 42;");

    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "x");
    assert_eq!(tokens[2].kind, TokenKind::Operator);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].lexeme, "42");
    assert_eq!(tokens[4].kind, TokenKind::Punctuation);
}

#[test]
fn test_tokenize_unrecognized_token() {
    let tokens = tokenize("a @ b");

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Unknown);
    assert_eq!(tokens[1].lexeme, "@");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(
        tokens.iter().map(|token| (token.line(), token.column())).collect::<Vec<_>>(),
        vec![(1, 1), (1, 3), (1, 5)]
    );
}

#[test]
fn test_unknown_runs_are_single_characters() {
    let tokens = tokenize("#$é");

    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Unknown));
    assert_eq!(tokens[2].lexeme, "é");
    assert_eq!(tokens[2].column(), 3);
    assert_eq!(tokens[2].span.start.offset, 2);
    assert_eq!(tokens[2].span.end.offset, 4);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let tokens = tokenize("  x \t  =   42  ");

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].column(), 3);
    assert_eq!(tokens[1].column(), 8);
    assert_eq!(tokens[2].column(), 12);
}

#[test]
fn test_tokenize_newlines() {
    let tokens = tokenize("a\nbb");

    assert_eq!(tokens.len(), 2);
    assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
    assert_eq!((tokens[1].line(), tokens[1].column()), (2, 1));
}

#[test]
fn test_crlf_line_endings() {
    let tokens = tokenize("a\r\n  b");

    assert_eq!((tokens[1].line(), tokens[1].column()), (2, 3));
}

#[test]
fn test_empty_and_trivia_only_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \n\t ").is_empty());
    assert!(tokenize("// only a comment\n/* and another */").is_empty());
}

#[test]
fn test_tokenize_all_keeps_trivia() {
    let source = "int a; // note\n";
    let tokens = tokenize_all(source, &DEFAULT_RULES);

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Keyword,
            TokenKind::Whitespace,
            TokenKind::Identifier,
            TokenKind::Punctuation,
            TokenKind::Whitespace,
            TokenKind::Comment,
            TokenKind::Whitespace,
        ]
    );
    assert_eq!(tokens.iter().map(|token| token.lexeme.as_str()).collect::<String>(), source);
}

#[test]
fn test_spans_are_contiguous() {
    let source = "x = \"s\" /* c */ @\n  y";
    let tokens = tokenize_all(source, &DEFAULT_RULES);

    for pair in tokens.windows(2) {
        assert_eq!(pair[0].span.end, pair[1].span.start);
    }
    assert_eq!(tokens.last().unwrap().span.end.offset, source.len());
}

#[test]
fn test_custom_rule_table() {
    let rules = RuleTable::new(
        vec![
            RuleSpec {
                pattern: r"\s+".to_string(),
                kind: TokenKind::Whitespace,
            },
            RuleSpec {
                pattern: "=".to_string(),
                kind: TokenKind::Operator,
            },
            RuleSpec {
                pattern: "==".to_string(),
                kind: TokenKind::Operator,
            },
            RuleSpec {
                pattern: "[a-z]+".to_string(),
                kind: TokenKind::Identifier,
            },
        ],
        ["let"],
    )
    .unwrap();

    let tokens = tokenize_with("let a === b1", &rules);
    assert_eq!(
        tokens.iter().map(|token| (token.kind, token.lexeme.as_str())).collect::<Vec<_>>(),
        vec![
            (TokenKind::Keyword, "let"),
            (TokenKind::Identifier, "a"),
            (TokenKind::Operator, "=="),
            (TokenKind::Operator, "="),
            (TokenKind::Identifier, "b"),
            (TokenKind::Unknown, "1"),
        ]
    );
}

#[test]
fn test_empty_rule_table_reports_everything_unknown() {
    let rules = RuleTable::new(vec![], Vec::<String>::new()).unwrap();
    let tokens = tokenize_with("a b", &rules);

    assert!(rules.is_empty());
    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Unknown));
    assert_eq!(tokens[1].lexeme, " ");
}

#[test]
fn test_rescan_is_identical() {
    let source = "while (i < 10) { i += 1; } // loop";
    assert_eq!(tokenize(source), tokenize(source));
}

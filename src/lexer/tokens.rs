use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("for");
        set.insert("return");
        set.insert("int");
        set.insert("float");
        set.insert("string");
        set.insert("bool");
        set.insert("true");
        set.insert("false");
        set.insert("void");
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Identifier,
    Keyword,
    Number,
    StringLiteral,
    Operator,
    Punctuation,

    // Trivia, consumed but never emitted
    Comment,
    Whitespace,

    Unknown,
}

impl TokenKind {
    /// Whether tokens of this kind end up in the scanner's output.
    pub fn is_emitting(&self) -> bool {
        !matches!(self, TokenKind::Comment | TokenKind::Whitespace)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Number => "NUMBER",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Comment => "COMMENT",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({:?}) at {}:{}",
            self.kind,
            self.lexeme,
            self.line(),
            self.column()
        )
    }
}

impl Token {
    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    pub fn column(&self) -> u32 {
        self.span.start.column
    }
}

/// Flat row form of a token, as written by the JSON output. `id` is the
/// 1-based row number, matching the table output.
#[derive(Debug, Serialize)]
pub struct TokenRecord<'a> {
    pub id: usize,
    pub kind: TokenKind,
    pub lexeme: &'a str,
    pub line: u32,
    pub column: u32,
}

impl<'a> TokenRecord<'a> {
    pub fn new(id: usize, token: &'a Token) -> Self {
        TokenRecord {
            id,
            kind: token.kind,
            lexeme: &token.lexeme,
            line: token.line(),
            column: token.column(),
        }
    }
}

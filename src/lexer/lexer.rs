use log::{debug, trace};

use crate::{Span, MK_TOKEN};

use super::{
    cursor::Cursor,
    rules::{MatchCache, RuleTable, DEFAULT_RULES},
    tokens::{Token, TokenKind},
};

/// One scan over one source buffer. Never shared between scans.
pub struct Lexer<'src, 'rules> {
    cursor: Cursor<'src>,
    rules: &'rules RuleTable,
    cache: MatchCache,
    tokens: Vec<Token>,
}

impl<'src, 'rules> Lexer<'src, 'rules> {
    pub fn new(source: &'src str, rules: &'rules RuleTable) -> Lexer<'src, 'rules> {
        Lexer {
            cursor: Cursor::new(source),
            rules,
            cache: rules.create_cache(),
            tokens: vec![],
        }
    }

    pub fn push(&mut self, token: Token) {
        trace!("{}", token);
        self.tokens.push(token);
    }

    /// Consumes the whole input. With `keep_trivia` the whitespace and
    /// comment lexemes are kept too, so the output covers every character.
    pub fn scan(mut self, keep_trivia: bool) -> Vec<Token> {
        while !self.cursor.at_eof() {
            let start = self.cursor.position();
            let remaining = self.cursor.remainder();

            let kind = match self.rules.longest_match(&mut self.cache, remaining) {
                Some(found) => {
                    self.cursor.advance_to(start.offset + found.len);
                    found.kind
                }
                None => {
                    self.cursor.advance();
                    TokenKind::Unknown
                }
            };

            let end = self.cursor.position();
            let lexeme = &remaining[..end.offset - start.offset];

            if !kind.is_emitting() && !keep_trivia {
                continue;
            }

            let kind = self.rules.classify(kind, lexeme);
            self.push(MK_TOKEN!(kind, lexeme.to_string(), Span { start, end }));
        }

        debug!(
            "scanned {} bytes into {} tokens",
            self.cursor.offset(),
            self.tokens.len()
        );
        self.tokens
    }
}

/// Emitted tokens of `source` under the built-in rule table.
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with(source, &DEFAULT_RULES)
}

/// Emitted tokens of `source` under `rules`.
pub fn tokenize_with(source: &str, rules: &RuleTable) -> Vec<Token> {
    Lexer::new(source, rules).scan(false)
}

/// Every consumed lexeme of `source` in order, comments and whitespace included.
pub fn tokenize_all(source: &str, rules: &RuleTable) -> Vec<Token> {
    Lexer::new(source, rules).scan(true)
}

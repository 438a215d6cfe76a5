use std::collections::HashSet;

use lazy_static::lazy_static;
use log::debug;
use regex_automata::{
    nfa::thompson::pikevm::{Cache, PikeVM},
    Anchored, Input, MatchKind,
};
use serde::Deserialize;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_LITERAL_RULE, MK_RULE,
};

use super::tokens::{TokenKind, RESERVED_WORDS};

lazy_static! {
    /// The built-in table, compiled once and shared read-only by every scan.
    pub static ref DEFAULT_RULES: RuleTable =
        RuleTable::new(default_specs(), RESERVED_WORDS.iter().copied())
            .expect("built-in rule table is valid");
}

/// An uncompiled rule: a regex and the category its matches get.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    pub pattern: String,
    pub kind: TokenKind,
}

/// A compiled rule. Matching keeps going past the first accepting state, so
/// a search anchored at the current offset reports the longest prefix the
/// pattern accepts rather than the first alternative that matched.
#[derive(Debug, Clone)]
pub struct RegexPattern {
    vm: PikeVM,
    source: String,
    kind: TokenKind,
}

impl RegexPattern {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}

/// Per-scan search state, one slot per rule. Tables are shared read-only,
/// so each scan brings its own.
#[derive(Debug, Clone)]
pub struct MatchCache {
    caches: Vec<Cache>,
}

/// The winning rule at some offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    pub rule: usize,
    pub len: usize,
    pub kind: TokenKind,
}

/// Ordered, validated rule list. Earlier rules win ties on match length.
#[derive(Debug, Clone)]
pub struct RuleTable {
    patterns: Vec<RegexPattern>,
    reserved: HashSet<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleTableConfig {
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    rules: Vec<RuleSpec>,
}

impl RuleTable {
    pub fn new<I, S>(specs: Vec<RuleSpec>, reserved: I) -> Result<RuleTable, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut patterns = Vec::with_capacity(specs.len());

        for (index, spec) in specs.into_iter().enumerate() {
            let vm = PikeVM::builder()
                .configure(PikeVM::config().match_kind(MatchKind::All))
                .build(&spec.pattern)
                .map_err(|err| {
                    Error::new(
                        ErrorImpl::InvalidPattern {
                            pattern: spec.pattern.clone(),
                            message: err.to_string(),
                        },
                        Some(index),
                    )
                })?;

            let mut cache = vm.create_cache();
            if vm.is_match(&mut cache, Input::new("").anchored(Anchored::Yes)) {
                return Err(Error::new(
                    ErrorImpl::EmptyMatch {
                        pattern: spec.pattern,
                    },
                    Some(index),
                ));
            }

            patterns.push(RegexPattern {
                vm,
                source: spec.pattern,
                kind: spec.kind,
            });
        }

        let reserved: HashSet<String> = reserved.into_iter().map(Into::into).collect();
        debug!(
            "compiled rule table: {} rules, {} reserved words",
            patterns.len(),
            reserved.len()
        );

        Ok(RuleTable { patterns, reserved })
    }

    /// Builds a table from TOML text:
    ///
    /// ```toml
    /// keywords = ["let"]
    ///
    /// [[rules]]
    /// kind = "WHITESPACE"
    /// pattern = '\s+'
    /// ```
    pub fn from_toml(text: &str) -> Result<RuleTable, Error> {
        let config: RuleTableConfig = toml::from_str(text).map_err(|err| {
            Error::new(
                ErrorImpl::InvalidConfig {
                    message: err.message().to_string(),
                },
                None,
            )
        })?;

        RuleTable::new(config.rules, config.keywords)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> &[RegexPattern] {
        &self.patterns
    }

    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved.contains(word)
    }

    pub fn create_cache(&self) -> MatchCache {
        MatchCache {
            caches: self
                .patterns
                .iter()
                .map(|pattern| pattern.vm.create_cache())
                .collect(),
        }
    }

    /// Longest non-empty prefix of `remainder` accepted by any rule.
    ///
    /// `cache` must come from `create_cache` on this table.
    pub fn longest_match(&self, cache: &mut MatchCache, remainder: &str) -> Option<RuleMatch> {
        let mut best: Option<RuleMatch> = None;
        let input = Input::new(remainder).anchored(Anchored::Yes);

        for (index, (pattern, cache)) in self.patterns.iter().zip(&mut cache.caches).enumerate() {
            let Some(found) = pattern.vm.find(cache, input.clone()) else {
                continue;
            };

            let len = found.end();
            if len > best.map_or(0, |current| current.len) {
                best = Some(RuleMatch {
                    rule: index,
                    len,
                    kind: pattern.kind,
                });
            }
        }

        best
    }

    /// Final category for a lexeme matched by a rule of `kind`.
    pub fn classify(&self, kind: TokenKind, lexeme: &str) -> TokenKind {
        if kind == TokenKind::Identifier && self.is_reserved(lexeme) {
            TokenKind::Keyword
        } else {
            kind
        }
    }
}

/// Rules for the built-in C-like language, in priority order.
pub fn default_specs() -> Vec<RuleSpec> {
    vec![
        MK_RULE!(TokenKind::Whitespace, r"\s+"),
        MK_RULE!(TokenKind::Comment, r"//[^\n]*"),
        MK_RULE!(TokenKind::Comment, r"/\*([^*]|\*+[^*/])*\*+/"),
        // Block comment still open at end of input
        MK_RULE!(TokenKind::Unknown, r"/\*([^*]|\*+[^*/])*\**\z"),
        MK_RULE!(TokenKind::Number, r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?"),
        MK_RULE!(TokenKind::Identifier, r"[A-Za-z_][A-Za-z0-9_]*"),
        MK_RULE!(TokenKind::StringLiteral, r#""([^"\\\n]|\\.)*""#),
        // String with no closing quote on its line
        MK_RULE!(TokenKind::Unknown, r#""([^"\\\n]|\\.)*\\?"#),
        MK_LITERAL_RULE!(TokenKind::Operator, "++"),
        MK_LITERAL_RULE!(TokenKind::Operator, "--"),
        MK_LITERAL_RULE!(TokenKind::Operator, "+="),
        MK_LITERAL_RULE!(TokenKind::Operator, "-="),
        MK_LITERAL_RULE!(TokenKind::Operator, "*="),
        MK_LITERAL_RULE!(TokenKind::Operator, "/="),
        MK_LITERAL_RULE!(TokenKind::Operator, "=="),
        MK_LITERAL_RULE!(TokenKind::Operator, "!="),
        MK_LITERAL_RULE!(TokenKind::Operator, "<="),
        MK_LITERAL_RULE!(TokenKind::Operator, ">="),
        MK_LITERAL_RULE!(TokenKind::Operator, "&&"),
        MK_LITERAL_RULE!(TokenKind::Operator, "||"),
        MK_LITERAL_RULE!(TokenKind::Operator, "+"),
        MK_LITERAL_RULE!(TokenKind::Operator, "-"),
        MK_LITERAL_RULE!(TokenKind::Operator, "*"),
        MK_LITERAL_RULE!(TokenKind::Operator, "/"),
        MK_LITERAL_RULE!(TokenKind::Operator, "%"),
        MK_LITERAL_RULE!(TokenKind::Operator, "="),
        MK_LITERAL_RULE!(TokenKind::Operator, "<"),
        MK_LITERAL_RULE!(TokenKind::Operator, ">"),
        MK_LITERAL_RULE!(TokenKind::Operator, "&"),
        MK_LITERAL_RULE!(TokenKind::Operator, "|"),
        MK_LITERAL_RULE!(TokenKind::Operator, "!"),
        MK_LITERAL_RULE!(TokenKind::Punctuation, "("),
        MK_LITERAL_RULE!(TokenKind::Punctuation, ")"),
        MK_LITERAL_RULE!(TokenKind::Punctuation, "{"),
        MK_LITERAL_RULE!(TokenKind::Punctuation, "}"),
        MK_LITERAL_RULE!(TokenKind::Punctuation, "["),
        MK_LITERAL_RULE!(TokenKind::Punctuation, "]"),
        MK_LITERAL_RULE!(TokenKind::Punctuation, ","),
        MK_LITERAL_RULE!(TokenKind::Punctuation, ";"),
        MK_LITERAL_RULE!(TokenKind::Punctuation, "."),
    ]
}

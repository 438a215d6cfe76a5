//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates a rule table entry from a regex pattern
//! - `MK_LITERAL_RULE!` - Creates a rule table entry matching literal text
//!
//! These macros keep the built-in rule table readable.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            span: $span,
        }
    };
}

/// Creates a `RuleSpec` from a regex pattern.
///
/// The pattern is matched at the current offset only; it does not need a
/// leading `^`.
///
/// # Example
///
/// ```ignore
/// MK_RULE!(TokenKind::Whitespace, r"\s+")
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($kind:expr, $pattern:expr) => {
        $crate::lexer::rules::RuleSpec {
            pattern: String::from($pattern),
            kind: $kind,
        }
    };
}

/// Creates a `RuleSpec` that matches `$value` literally.
///
/// # Example
///
/// ```ignore
/// MK_LITERAL_RULE!(TokenKind::Operator, "+=")
/// ```
#[macro_export]
macro_rules! MK_LITERAL_RULE {
    ($kind:expr, $value:literal) => {
        $crate::lexer::rules::RuleSpec {
            pattern: regex::escape($value),
            kind: $kind,
        }
    };
}

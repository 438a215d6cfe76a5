//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into an
//! ordered sequence of classified tokens. It handles:
//!
//! - Position tracking (line and column) through the `cursor`
//! - An ordered regex rule table with longest-match selection
//! - Reserved-word classification of identifiers
//! - Skipping whitespace and comments without losing position accounting
//! - Reporting malformed input as `UNKNOWN` tokens instead of failing

pub mod cursor;
pub mod lexer;
pub mod rules;
pub mod tokens;

#[cfg(test)]
mod tests;

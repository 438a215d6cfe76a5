//! Error types for rule table setup.
//!
//! Malformed source text is never an error: the scanner reports it as
//! `UNKNOWN` tokens. The only failures are configuration faults found
//! while building a rule table:
//!
//! - Patterns that are not valid regular expressions
//! - Patterns that accept the empty string
//! - Rule table files that cannot be parsed

pub mod errors;

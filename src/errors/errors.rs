use std::fmt::Display;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    rule: Option<usize>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, rule: Option<usize>) -> Self {
        Error {
            internal_error: error_impl,
            rule,
        }
    }

    /// Index of the offending rule in table order, when the fault belongs to one.
    pub fn get_rule(&self) -> Option<usize> {
        self.rule
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
            ErrorImpl::EmptyMatch { .. } => "EmptyMatch",
            ErrorImpl::InvalidConfig { .. } => "InvalidConfig",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidPattern { .. } => ErrorTip::None,
            ErrorImpl::EmptyMatch { pattern } => ErrorTip::Suggestion(format!(
                "Pattern `{}` accepts the empty string, make it consume at least one character",
                pattern
            )),
            ErrorImpl::InvalidConfig { .. } => ErrorTip::Suggestion(String::from(
                "Each rule needs a `pattern` and a `kind` such as \"OPERATOR\"",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("pattern {pattern:?} matches the empty string")]
    EmptyMatch { pattern: String },
    #[error("invalid rule table: {message}")]
    InvalidConfig { message: String },
}

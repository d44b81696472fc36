use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A recoverable lexical error, tied to the position where it was detected.
///
/// Every variant of [`ErrorImpl`] is non-fatal: the lexer records the error
/// and keeps scanning, so a single scan can accumulate any number of these.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IntegerOverflow { .. } => "IntegerOverflow",
            ErrorImpl::BadEscape { .. } => "BadEscape",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IntegerOverflow { literal } => ErrorTip::Suggestion(format!(
                "Integer literal too large: `{}`, using the max value instead",
                literal
            )),
            ErrorImpl::BadEscape { literal } => ErrorTip::Suggestion(format!(
                "String literal with bad escaped character: {}",
                literal
            )),
            ErrorImpl::UnterminatedString { literal } => {
                ErrorTip::Suggestion(format!("Unterminated string literal: {}", literal))
            }
            ErrorImpl::IllegalCharacter { .. } => ErrorTip::None,
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

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("integer literal too large: {literal:?}")]
    IntegerOverflow { literal: String },
    #[error("string literal with bad escaped character: {literal:?}")]
    BadEscape { literal: String },
    #[error("unterminated string literal: {literal:?}")]
    UnterminatedString { literal: String },
    #[error("illegal character: {character:?}")]
    IllegalCharacter { character: char },
}

//! Lexical analysis for the C-- language.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens. It handles:
//!
//! - Pull-based tokenization using prioritized regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line/column position tracking for error reporting
//! - Comments and whitespace handling
//! - Recovery from malformed literals and illegal characters
//!   without aborting the scan

pub mod lexer;
pub mod tokens;

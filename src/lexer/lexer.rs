use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type PatternHandler = fn(&mut Lexer, &Regex) -> Option<Token>;

pub struct TokenPattern {
    regex: Regex,
    handler: PatternHandler,
}

lazy_static! {
    /// Token patterns in priority order. Two-character operators come before
    /// their one-character prefixes so the longest match always wins, and
    /// comment patterns come before `/`. Lone `&` and `|` have no pattern:
    /// they fall through to the illegal-character path.
    static ref TOKEN_PATTERNS: Vec<TokenPattern> = vec![
        TokenPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        TokenPattern { regex: Regex::new("[0-9]+").unwrap(), handler: number_handler },
        TokenPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
        TokenPattern { regex: Regex::new("\\/\\/.*").unwrap(), handler: skip_handler },
        TokenPattern { regex: Regex::new("##.*").unwrap(), handler: skip_handler },
        TokenPattern { regex: Regex::new("\"").unwrap(), handler: string_handler },
        TokenPattern { regex: Regex::new("\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")},
        TokenPattern { regex: Regex::new("\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")},
        TokenPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")},
        TokenPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")},
        TokenPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")},
        TokenPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")},
        TokenPattern { regex: Regex::new("\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".")},
        TokenPattern { regex: Regex::new("<<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Write, "<<")},
        TokenPattern { regex: Regex::new(">>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Read, ">>")},
        TokenPattern { regex: Regex::new("\\+\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusPlus, "++")},
        TokenPattern { regex: Regex::new("--").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusMinus, "--")},
        TokenPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")},
        TokenPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")},
        TokenPattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")},
        TokenPattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")},
        TokenPattern { regex: Regex::new("&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&")},
        TokenPattern { regex: Regex::new("\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||")},
        TokenPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")},
        TokenPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")},
        TokenPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*")},
        TokenPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")},
        TokenPattern { regex: Regex::new("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!")},
        TokenPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<")},
        TokenPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")},
        TokenPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")},
    ];
}

/// A pull-based lexer over a single finite source. Call [`Lexer::next_token`]
/// repeatedly until it returns an `EOF` token; recoverable errors accumulate
/// in the diagnostic sink instead of aborting the scan.
pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    errors: Vec<Error>,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            line: 1,
            column: 1,
            errors: vec![],
            file: file_name,
        }
    }

    /// Produces the next token, skipping whitespace, comments and illegal
    /// characters. Always terminates; after the end of input every call
    /// returns an `EOF` token.
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                let position = self.position();
                return MK_TOKEN!(
                    TokenKind::EOF,
                    String::from("EOF"),
                    Span {
                        start: position.clone(),
                        end: position,
                    }
                );
            }

            let mut matched = false;
            let mut token = None;

            for pattern in TOKEN_PATTERNS.iter() {
                let match_here = pattern.regex.find(self.remainder());

                if let Some(found) = match_here {
                    if found.start() == 0 {
                        matched = true;
                        token = (pattern.handler)(self, &pattern.regex);
                        break;
                    }
                }
            }

            if let Some(token) = token {
                return token;
            }

            if !matched {
                let character = self.at();
                let position = self.position();
                self.report(ErrorImpl::IllegalCharacter { character }, position);
                self.advance_over(&character.to_string());
            }

            // A match without a token was whitespace or a comment; rescan.
        }
    }

    /// The current source location.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, Rc::clone(&self.file))
    }

    /// Resets the line/column counters for an independent scan of the same
    /// instance's remaining input.
    pub fn reset_position(&mut self) {
        self.line = 1;
        self.column = 1;
    }

    /// Errors recorded so far, in detection order.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    /// Drains the diagnostic sink.
    pub fn take_diagnostics(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.errors)
    }

    pub fn report(&mut self, error: ErrorImpl, position: Position) {
        self.errors.push(Error::new(error, position));
    }

    /// Advances the cursor past `text`, keeping the line/column counters in
    /// step. `text` must equal the upcoming source characters.
    pub fn advance_over(&mut self, text: &str) {
        for character in text.chars() {
            self.pos += character.len_utf8();
            if character == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    let start = lexer.position();

    let kind = match RESERVED_LOOKUP.get(matched.as_str()) {
        Some(kind) => kind.clone(),
        None => TokenKind::Identifier(matched.clone()),
    };

    lexer.advance_over(&matched);

    Some(MK_TOKEN!(
        kind,
        matched,
        Span {
            start,
            end: lexer.position(),
        }
    ))
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    let start = lexer.position();

    // An overflowing literal is clamped to the max value and flagged; the
    // token itself is still produced.
    let value = match matched.parse::<i32>() {
        Ok(value) => value,
        Err(_) => {
            lexer.report(
                ErrorImpl::IntegerOverflow {
                    literal: matched.clone(),
                },
                start.clone(),
            );
            i32::MAX
        }
    };

    lexer.advance_over(&matched);

    Some(MK_TOKEN!(
        TokenKind::IntLiteral(value),
        matched,
        Span {
            start,
            end: lexer.position(),
        }
    ))
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    lexer.advance_over(&matched);
    None
}

/// Scans a string literal starting at the opening quote. The token's text is
/// the raw literal including the delimiting quotes; escape sequences are kept
/// unprocessed. A literal can be flagged as having a bad escape, as
/// unterminated, or both, and is produced either way.
fn string_handler(lexer: &mut Lexer, _regex: &Regex) -> Option<Token> {
    let start = lexer.position();

    let mut text = String::from('"');
    // What actually gets consumed; differs from `text` only by a terminating
    // newline, which ends the literal but is not part of it.
    let mut consumed = String::from('"');

    let mut bad_escape = false;
    let mut terminated = false;

    let mut chars = lexer.remainder().chars().skip(1).peekable();

    loop {
        match chars.next() {
            None => break,
            Some('\n') => {
                consumed.push('\n');
                break;
            }
            Some('"') => {
                text.push('"');
                consumed.push('"');
                terminated = true;
                break;
            }
            Some('\\') => match chars.peek().copied() {
                // A backslash at the very end of the literal is both a bad
                // escape and unterminated.
                None => {
                    text.push('\\');
                    consumed.push('\\');
                    bad_escape = true;
                }
                Some('\n') => {
                    text.push('\\');
                    consumed.push('\\');
                    bad_escape = true;
                }
                Some(escaped) => {
                    chars.next();
                    if !matches!(escaped, 'n' | 't' | '\'' | '"' | '?' | '\\') {
                        bad_escape = true;
                    }
                    text.push('\\');
                    text.push(escaped);
                    consumed.push('\\');
                    consumed.push(escaped);
                }
            },
            Some(character) => {
                text.push(character);
                consumed.push(character);
            }
        }
    }

    lexer.advance_over(&consumed);

    if bad_escape {
        lexer.report(
            ErrorImpl::BadEscape {
                literal: text.clone(),
            },
            start.clone(),
        );
    }

    if !terminated {
        lexer.report(
            ErrorImpl::UnterminatedString {
                literal: text.clone(),
            },
            start.clone(),
        );
    }

    Some(MK_TOKEN!(
        TokenKind::StringLiteral(text.clone()),
        text,
        Span {
            start,
            end: lexer.position(),
        }
    ))
}

/// Scans `source` to completion, returning every token up to and including
/// `EOF` alongside the errors recorded during the scan. Lexical errors never
/// abort the scan.
pub fn tokenize(source: String, file: Option<String>) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let is_eof = token.is_eof();
        tokens.push(token);

        if is_eof {
            break;
        }
    }

    (tokens, lex.take_diagnostics())
}

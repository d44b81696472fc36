use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("bool", TokenKind::Bool);
        map.insert("int", TokenKind::Int);
        map.insert("void", TokenKind::Void);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("struct", TokenKind::Struct);
        map.insert("cin", TokenKind::Cin);
        map.insert("cout", TokenKind::Cout);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum TokenKind {
    EOF,

    /// Identifier, carrying its text.
    Identifier(String),
    /// Integer literal, carrying the parsed value. Overflowing literals are
    /// clamped to `i32::MAX` and flagged with an `IntegerOverflow` error.
    IntLiteral(i32),
    /// String literal, carrying the raw text including the delimiting
    /// quotes. Unterminated literals lack the closing quote.
    StringLiteral(String),

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Semicolon,
    Comma,
    Dot,

    Write, // <<
    Read,  // >>

    PlusPlus,
    MinusMinus,

    Plus,
    Dash,
    Star,
    Slash,

    Not,       // !
    And,       // &&
    Or,        // ||
    Equals,    // ==
    NotEquals, // !=

    Less,
    Greater,
    LessEquals,
    GreaterEquals,

    Assignment, // =

    // Reserved
    Bool,
    Int,
    Void,
    True,
    False,
    Struct,
    Cin,
    Cout,
    If,
    Else,
    While,
    Return,
}

impl TokenKind {
    /// The category name without any payload, e.g. `Identifier` for
    /// `Identifier("foo")`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Identifier(_) => "Identifier",
            TokenKind::IntLiteral(_) => "IntLiteral",
            TokenKind::StringLiteral(_) => "StringLiteral",
            TokenKind::OpenCurly => "OpenCurly",
            TokenKind::CloseCurly => "CloseCurly",
            TokenKind::OpenParen => "OpenParen",
            TokenKind::CloseParen => "CloseParen",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Comma => "Comma",
            TokenKind::Dot => "Dot",
            TokenKind::Write => "Write",
            TokenKind::Read => "Read",
            TokenKind::PlusPlus => "PlusPlus",
            TokenKind::MinusMinus => "MinusMinus",
            TokenKind::Plus => "Plus",
            TokenKind::Dash => "Dash",
            TokenKind::Star => "Star",
            TokenKind::Slash => "Slash",
            TokenKind::Not => "Not",
            TokenKind::And => "And",
            TokenKind::Or => "Or",
            TokenKind::Equals => "Equals",
            TokenKind::NotEquals => "NotEquals",
            TokenKind::Less => "Less",
            TokenKind::Greater => "Greater",
            TokenKind::LessEquals => "LessEquals",
            TokenKind::GreaterEquals => "GreaterEquals",
            TokenKind::Assignment => "Assignment",
            TokenKind::Bool => "Bool",
            TokenKind::Int => "Int",
            TokenKind::Void => "Void",
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::Struct => "Struct",
            TokenKind::Cin => "Cin",
            TokenKind::Cout => "Cout",
            TokenKind::If => "If",
            TokenKind::Else => "Else",
            TokenKind::While => "While",
            TokenKind::Return => "Return",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    pub fn debug(&self) {
        match &self.kind {
            TokenKind::Identifier(name) => println!("{} ({})", self.kind, name),
            TokenKind::IntLiteral(value) => println!("{} ({})", self.kind, value),
            TokenKind::StringLiteral(text) => println!("{} ({})", self.kind, text),
            _ => println!("{} ()", self.kind),
        }
    }
}

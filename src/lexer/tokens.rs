use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("def", TokenKind::Def);
        map.insert("extern", TokenKind::Extern);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Identifier,
    Number,
    Comment,

    // Reserved
    Def,
    Extern,

    /// Any other single character: operators, parentheses, commas and
    /// anything the tokenizer does not otherwise recognise.
    Char(char),
}

impl TokenKind {
    pub fn is_char(&self, c: char) -> bool {
        *self == TokenKind::Char(c)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Char(c) => write!(f, "{}", c),
            _ => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    Text(String),
    Number(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Token {
    /// Identifier, keyword or comment text.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn number(&self) -> Option<f64> {
        match self.value {
            TokenValue::Number(value) => Some(value),
            _ => None,
        }
    }

    /// Source-ish rendering used when a token shows up in a diagnostic.
    pub fn lexeme(&self) -> String {
        match (&self.kind, &self.value) {
            (TokenKind::Eof, _) => String::from("<eof>"),
            (TokenKind::Char(c), _) => c.to_string(),
            (TokenKind::Comment, TokenValue::Text(text)) => format!("#{}", text),
            (_, TokenValue::Text(text)) => text.clone(),
            (_, TokenValue::Number(value)) => value.to_string(),
            (_, TokenValue::None) => self.kind.to_string(),
        }
    }
}

/// Token dump line, e.g. `[0, 3] variable foo`.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.span.start.0, self.span.end.0)?;
        match (&self.kind, &self.value) {
            (TokenKind::Number, TokenValue::Number(value)) => write!(f, " number {}", value),
            (TokenKind::Comment, TokenValue::Text(text)) => write!(f, " comment {}", text),
            (TokenKind::Eof, _) => write!(f, " eof"),
            (TokenKind::Char(c), _) => write!(f, " char{}", c),
            (_, TokenValue::Text(text)) => write!(f, " variable {}", text),
            (kind, _) => write!(f, " {}", kind),
        }
    }
}

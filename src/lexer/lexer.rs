use lazy_static::lazy_static;
use regex::Regex;

use crate::{Span, MK_TOKEN};

use super::{
    cursor::SourceCursor,
    tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP},
};

pub const COMMENT_CHAR: char = '#';

lazy_static! {
    // Longest prefix a decimal float parser accepts out of a `[0-9.]+` run.
    static ref NUMBER_PREFIX: Regex = Regex::new(r"^(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)").unwrap();
}

/// Streaming tokenizer over one line of input.
///
/// `last_char` is the character that terminated the previous token. It is
/// kept between calls because it may begin the next token.
#[derive(Debug, Clone)]
pub struct Lexer {
    cursor: SourceCursor,
    last_char: Option<char>,
    token_start: u32,
}

impl Lexer {
    pub fn new(line: &str) -> Lexer {
        Lexer {
            cursor: SourceCursor::new(line),
            last_char: Some(' '),
            token_start: 0,
        }
    }

    /// Offset of the retained lookahead character, or the line length once
    /// the end of input has been reached.
    pub fn offset(&self) -> u32 {
        self.cursor.position().saturating_sub(1)
    }

    fn advance(&mut self) -> Option<char> {
        self.last_char = self.cursor.next_char();
        self.last_char
    }

    fn mark_as_start(&mut self) {
        self.token_start = self.offset();
    }

    fn span(&self) -> Span {
        Span::new(self.token_start, self.offset())
    }

    pub fn next_token(&mut self) -> Token {
        while matches!(self.last_char, Some(c) if c.is_ascii_whitespace()) {
            self.advance();
        }
        self.mark_as_start();

        let token = match self.last_char {
            Some(c) if c.is_ascii_alphabetic() => self.lex_identifier(c),
            Some(c) if c.is_ascii_digit() || c == '.' => self.lex_number(c),
            Some(COMMENT_CHAR) => self.lex_comment(),
            None => {
                // Reset so the next line starts from a clean lookahead
                self.last_char = Some(' ');
                MK_TOKEN!(TokenKind::Eof, self.span())
            }
            Some(c) => {
                self.advance();
                MK_TOKEN!(TokenKind::Char(c), self.span())
            }
        };

        log::trace!("token {}", token);
        token
    }

    fn lex_identifier(&mut self, first: char) -> Token {
        let mut identifier = String::from(first);
        while let Some(c) = self.advance() {
            if !c.is_ascii_alphanumeric() {
                break;
            }
            identifier.push(c);
        }

        let kind = RESERVED_LOOKUP
            .get(identifier.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);

        MK_TOKEN!(kind, TokenValue::Text(identifier), self.span())
    }

    fn lex_number(&mut self, first: char) -> Token {
        let mut number_string = String::from(first);
        while let Some(c) = self.advance() {
            if !(c.is_ascii_digit() || c == '.') {
                break;
            }
            number_string.push(c);
        }

        MK_TOKEN!(
            TokenKind::Number,
            TokenValue::Number(parse_number(&number_string)),
            self.span()
        )
    }

    fn lex_comment(&mut self) -> Token {
        let mut comment = String::new();
        while let Some(c) = self.advance() {
            if c == '\n' || c == '\r' {
                break;
            }
            comment.push(c);
        }

        MK_TOKEN!(TokenKind::Comment, TokenValue::Text(comment), self.span())
    }
}

/// Permissive decimal conversion: `"1.2.3"` reads as `1.2`, and text with no
/// numeric prefix at all (such as `"."`) reads as `0`.
pub fn parse_number(text: &str) -> f64 {
    NUMBER_PREFIX
        .find(text)
        .and_then(|prefix| prefix.as_str().parse().ok())
        .unwrap_or(0.0)
}

/// Tokenizes a whole line, up to and including the `Eof` token.
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(line);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}

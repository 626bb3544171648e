//! Parser state and the per-line entry point.
//!
//! A `Parser` owns the lexer for exactly one line and the single token of
//! lookahead. Nothing survives from one `parse` call to the next except the
//! shared precedence table.

use std::mem;

use crate::{
    ast::declarations::Item,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    decl::{parse_extern, parse_function_definition, parse_top_level_expr},
    lookups::{PrecedenceTable, PRECEDENCE_TABLE},
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Token source for the current line
    lexer: Lexer,
    /// The single token of lookahead
    current: Token,
    /// Binary operator precedences, shared by every parse
    precedence: &'static PrecedenceTable,
}

impl Parser {
    /// Creates a parser over one line of source and primes the lookahead token.
    pub fn new(line: &str) -> Self {
        let mut lexer = Lexer::new(line);
        let current = lexer.next_token();

        Parser {
            lexer,
            current,
            precedence: &PRECEDENCE_TABLE,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Pulls the next token from the lexer and returns the one it replaces.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        mem::replace(&mut self.current, next)
    }

    /// Consumes the current token if it is the character `c`, otherwise fails with `error`.
    pub fn expect_char(&mut self, c: char, error: ErrorImpl) -> Result<Token, Error> {
        if self.current.kind.is_char(c) {
            Ok(self.advance())
        } else {
            Err(self.error(error))
        }
    }

    /// Precedence of the current token, or `NOT_A_BINARY_OPERATOR`.
    pub fn get_token_precedence(&self) -> i32 {
        self.precedence.get_token_precedence(self.current.kind)
    }

    /// Where the lexer's lookahead currently stands in the line.
    pub fn get_position(&self) -> Position {
        Position(self.lexer.offset())
    }

    /// Builds a syntax error at the current position.
    pub fn error(&self, error_impl: ErrorImpl) -> Error {
        let error = Error::new(error_impl, self.get_position());
        log::debug!("{} (current token {:?})", error, self.current.kind);
        error
    }
}

/// Parses one line of input into a single top-level item.
///
/// Returns `Ok(None)` when the line holds no tokens at all. Anything after a
/// complete item is left unread.
pub fn parse(line: &str) -> Result<Option<Item>, Error> {
    let mut parser = Parser::new(line);

    let item = match parser.current_token_kind() {
        TokenKind::Eof => return Ok(None),
        TokenKind::Def => Item::Function(parse_function_definition(&mut parser)?),
        TokenKind::Extern => Item::Extern(parse_extern(&mut parser)?),
        _ => Item::Function(parse_top_level_expr(&mut parser)?),
    };

    log::debug!("parsed {}", item);
    Ok(Some(item))
}

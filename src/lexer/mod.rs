//! Lexical analysis module.
//!
//! This module turns one line of source text into a stream of tokens,
//! pulled on demand by the parser:
//!
//! - `cursor` yields one character at a time with an explicit end of input
//! - `lexer` classifies characters into tokens, keeping one character of
//!   lookahead between calls
//! - `tokens` defines the token model and the reserved words

pub mod cursor;
pub mod lexer;
pub mod tokens;

//! Error types and error handling for the front end.
//!
//! Lexing never fails: any unrecognised character becomes a one-character
//! token. Every error reported here is a syntax error raised by the parser,
//! carrying the offset at which the tokenizer's lookahead stood.

pub mod errors;

//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains a recursive descent parser that pulls tokens from the
//! lexer one at a time, holding a single token of lookahead. Binary operators
//! are resolved by precedence climbing against a fixed precedence table.
//!
//! - `parser` - parser state and the per-line entry point
//! - `lookups` - the binary operator precedence table
//! - `expr` - primary, call, parenthesised and binary expressions
//! - `decl` - prototypes, definitions, externs and top-level expressions
//!
//! Any syntax error aborts the whole top-level construct; no partial tree is
//! ever returned and there is no resynchronisation.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::lexer::tokens::TokenKind;

/// Precedence reported for anything that is not a binary operator. Lower
/// than any minimum precedence the parser asks for.
pub const NOT_A_BINARY_OPERATOR: i32 = -1;

lazy_static! {
    pub static ref PRECEDENCE_TABLE: PrecedenceTable = PrecedenceTable::new();
}

/// Fixed mapping from single-character binary operator to precedence.
/// Higher binds tighter. Read-only once built.
#[derive(Debug, Clone)]
pub struct PrecedenceTable {
    binary_ops: HashMap<char, i32>,
}

impl PrecedenceTable {
    pub fn new() -> Self {
        let mut binary_ops = HashMap::new();
        binary_ops.insert('<', 10);
        binary_ops.insert('+', 20);
        binary_ops.insert('-', 20);
        binary_ops.insert('*', 30);

        PrecedenceTable { binary_ops }
    }

    pub fn get(&self, operator: char) -> i32 {
        match self.binary_ops.get(&operator) {
            Some(&precedence) if precedence > 0 => precedence,
            _ => NOT_A_BINARY_OPERATOR,
        }
    }

    pub fn get_token_precedence(&self, kind: TokenKind) -> i32 {
        match kind {
            TokenKind::Char(c) => self.get(c),
            _ => NOT_A_BINARY_OPERATOR,
        }
    }
}

impl Default for PrecedenceTable {
    fn default() -> Self {
        Self::new()
    }
}

use std::fmt::Display;

use crate::Span;

use super::ast::ExprVisitor;

/// Expression
///
/// Each composite node owns its children outright; the tree has no sharing
/// and no parent links. Parentheses are never represented.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    Variable(VariableExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(expr) => &expr.span,
            Expr::Variable(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
        }
    }

    /// Dispatches to the visitor method for this variant.
    pub fn accept<V: ExprVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Number(expr) => visitor.visit_number(expr),
            Expr::Variable(expr) => visitor.visit_variable(expr),
            Expr::Binary(expr) => visitor.visit_binary(expr),
            Expr::Call(expr) => visitor.visit_call(expr),
        }
    }

    /// Direct children, left to right.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Number(_) | Expr::Variable(_) => vec![],
            Expr::Binary(expr) => vec![&expr.left, &expr.right],
            Expr::Call(expr) => expr.arguments.iter().collect(),
        }
    }
}

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
    pub span: Span,
}

/// Variable Expression
/// A bare name. Resolution is left to whoever consumes the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: String,
    pub span: Span,
}

/// Binary Expression
/// `operator` is always one of the characters in the precedence table.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: char,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(expr) => write!(f, "Number:{:.6}", expr.value),
            Expr::Variable(expr) => write!(f, "Variable:{}", expr.name),
            Expr::Binary(expr) => {
                write!(f, "[{}: {}, {}]", expr.operator, expr.left, expr.right)
            }
            Expr::Call(expr) => {
                write!(f, "[Call:{}", expr.callee)?;
                for argument in &expr.arguments {
                    write!(f, "[{}]", argument)?;
                }
                write!(f, "]")
            }
        }
    }
}

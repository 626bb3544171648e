use std::fmt::Display;

use crate::Span;

use super::{ast::ItemVisitor, expressions::Expr};

/// Prototype
/// A function's name and parameter names, in declaration order.
/// Duplicate parameter names are not rejected here.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub params: Vec<String>,
    pub span: Span,
}

impl Prototype {
    /// The nameless, parameterless prototype that wraps a bare top-level expression.
    pub fn anonymous(span: Span) -> Self {
        Prototype {
            name: String::new(),
            params: vec![],
            span,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

/// Function Definition
/// The body is a single expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub proto: Prototype,
    pub body: Expr,
    pub span: Span,
}

impl FunctionDef {
    pub fn is_anonymous(&self) -> bool {
        self.proto.is_anonymous()
    }
}

/// Root of a single top-level parse.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// `def ...` or a bare top-level expression.
    Function(FunctionDef),
    /// `extern ...`
    Extern(Prototype),
}

impl Item {
    pub fn get_span(&self) -> &Span {
        match self {
            Item::Function(function) => &function.span,
            Item::Extern(proto) => &proto.span,
        }
    }

    pub fn accept<V: ItemVisitor + ?Sized>(&self, visitor: &mut V) -> V::ItemOutput {
        match self {
            Item::Function(function) => visitor.visit_function(function),
            Item::Extern(proto) => visitor.visit_prototype(proto),
        }
    }
}

impl Display for Prototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.name)?;
        for param in &self.params {
            write!(f, "[{}]", param)?;
        }
        write!(f, ")")
    }
}

impl Display for FunctionDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.proto, self.body)
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Item::Function(function) => write!(f, "{}", function),
            Item::Extern(proto) => write!(f, "{}", proto),
        }
    }
}

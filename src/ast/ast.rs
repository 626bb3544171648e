use super::{
    declarations::{FunctionDef, Prototype},
    expressions::{BinaryExpr, CallExpr, NumberExpr, VariableExpr},
};

/// Expression Visitor
///
/// Read-only traversal over every expression kind. Implementors decide
/// whether and in which order to descend into children, usually by calling
/// `accept` on them from `visit_binary` and `visit_call`.
pub trait ExprVisitor {
    type Output;

    fn visit_number(&mut self, expr: &NumberExpr) -> Self::Output;
    fn visit_variable(&mut self, expr: &VariableExpr) -> Self::Output;
    fn visit_binary(&mut self, expr: &BinaryExpr) -> Self::Output;
    fn visit_call(&mut self, expr: &CallExpr) -> Self::Output;
}

/// Item Visitor
///
/// Extends expression traversal to the top-level declarations.
pub trait ItemVisitor: ExprVisitor {
    type ItemOutput;

    fn visit_prototype(&mut self, proto: &Prototype) -> Self::ItemOutput;
    fn visit_function(&mut self, function: &FunctionDef) -> Self::ItemOutput;
}

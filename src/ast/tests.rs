use std::collections::BTreeSet;

use crate::{parser::parser::parse, Span};

use super::{
    ast::{ExprVisitor, ItemVisitor},
    declarations::{FunctionDef, Item, Prototype},
    expressions::{BinaryExpr, CallExpr, Expr, NumberExpr, VariableExpr},
};

/// Collects every free name and counts nodes by walking the whole tree.
#[derive(Default)]
struct NameCollector {
    variables: BTreeSet<String>,
    callees: Vec<String>,
    nodes: usize,
}

impl ExprVisitor for NameCollector {
    type Output = ();

    fn visit_number(&mut self, _expr: &NumberExpr) {
        self.nodes += 1;
    }

    fn visit_variable(&mut self, expr: &VariableExpr) {
        self.nodes += 1;
        self.variables.insert(expr.name.clone());
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) {
        self.nodes += 1;
        expr.left.accept(self);
        expr.right.accept(self);
    }

    fn visit_call(&mut self, expr: &CallExpr) {
        self.nodes += 1;
        self.callees.push(expr.callee.clone());
        for argument in &expr.arguments {
            argument.accept(self);
        }
    }
}

impl ItemVisitor for NameCollector {
    type ItemOutput = String;

    fn visit_prototype(&mut self, proto: &Prototype) -> String {
        proto.name.clone()
    }

    fn visit_function(&mut self, function: &FunctionDef) -> String {
        function.body.accept(self);
        self.visit_prototype(&function.proto)
    }
}

/// Evaluates closed arithmetic, the way a downstream interpreter might.
struct Evaluator;

impl ExprVisitor for Evaluator {
    type Output = Option<f64>;

    fn visit_number(&mut self, expr: &NumberExpr) -> Option<f64> {
        Some(expr.value)
    }

    fn visit_variable(&mut self, _expr: &VariableExpr) -> Option<f64> {
        None
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> Option<f64> {
        let left = expr.left.accept(self)?;
        let right = expr.right.accept(self)?;
        match expr.operator {
            '+' => Some(left + right),
            '-' => Some(left - right),
            '*' => Some(left * right),
            '<' => Some(if left < right { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    fn visit_call(&mut self, _expr: &CallExpr) -> Option<f64> {
        None
    }
}

fn body_of(source: &str) -> Expr {
    match parse(source) {
        Ok(Some(Item::Function(function))) => function.body,
        other => panic!("expected a function for {:?}, got {:?}", source, other),
    }
}

#[test]
fn test_visitor_walks_every_node() {
    let item = parse("def f(x y) g(x, 1) * y + h()").unwrap().unwrap();

    let mut collector = NameCollector::default();
    let name = item.accept(&mut collector);

    assert_eq!(name, "f");
    assert_eq!(
        collector.variables.into_iter().collect::<Vec<_>>(),
        vec!["x", "y"]
    );
    assert_eq!(collector.callees, vec!["g", "h"]);
    // +, *, g(..), x, 1, y, h()
    assert_eq!(collector.nodes, 7);
}

#[test]
fn test_visitor_on_extern() {
    let item = parse("extern cos(theta)").unwrap().unwrap();

    let mut collector = NameCollector::default();
    assert_eq!(item.accept(&mut collector), "cos");
    assert_eq!(collector.nodes, 0);
}

#[test]
fn test_evaluator_respects_tree_shape() {
    assert_eq!(body_of("1 - 2 - 3").accept(&mut Evaluator), Some(-4.0));
    assert_eq!(body_of("1 + 2 * 3").accept(&mut Evaluator), Some(7.0));
    assert_eq!(body_of("(1 + 2) * 3").accept(&mut Evaluator), Some(9.0));
    assert_eq!(body_of("2 < 1 + 3").accept(&mut Evaluator), Some(1.0));
    assert_eq!(body_of("x + 1").accept(&mut Evaluator), None);
}

#[test]
fn test_children() {
    let body = body_of("f(1, a + b)");

    let children = body.children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[1].children().len(), 2);
    assert!(children[0].children().is_empty());
}

#[test]
fn test_render_hand_built_tree() {
    let span = Span::default();
    let tree = Expr::Binary(BinaryExpr {
        operator: '+',
        left: Box::new(Expr::Variable(VariableExpr {
            name: String::from("x"),
            span,
        })),
        right: Box::new(Expr::Call(CallExpr {
            callee: String::from("sin"),
            arguments: vec![Expr::Number(NumberExpr { value: 2.5, span })],
            span,
        })),
        span,
    });

    assert_eq!(
        tree.to_string(),
        "[+: Variable:x, [Call:sin[Number:2.500000]]]"
    );

    let function = FunctionDef {
        proto: Prototype::anonymous(span),
        body: tree,
        span,
    };
    assert!(function.is_anonymous());
    assert_eq!(
        Item::Function(function).to_string(),
        "()([+: Variable:x, [Call:sin[Number:2.500000]]])"
    );
}

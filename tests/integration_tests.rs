//! Integration tests for the front end.
//!
//! These tests go from raw lines of text to syntax trees through the public
//! API, and drive the `kaleido` binary the way a user at a terminal would.

use std::{
    io::Write,
    process::{Command, Stdio},
};

use kaleido::{
    ast::{declarations::Item, expressions::Expr},
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
    render_diagnostic,
};

fn run_driver(args: &[&str], input: &str) -> (String, String) {
    run_driver_bytes(args, input.as_bytes())
}

fn run_driver_bytes(args: &[&str], input: &[u8]) -> (String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_kaleido"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start driver");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input)
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    (
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

#[test]
fn test_session_of_lines() {
    let lines = [
        "extern sin(x)",
        "def twice(x) x * 2",
        "twice(sin(1)) - 1 - 2",
        "",
    ];

    let items: Vec<Option<Item>> = lines.iter().map(|line| parse(line).unwrap()).collect();

    assert!(matches!(&items[0], Some(Item::Extern(proto)) if proto.name == "sin"));
    assert!(matches!(&items[1], Some(Item::Function(f)) if f.proto.name == "twice"));
    assert!(items[3].is_none());

    match &items[2] {
        Some(Item::Function(function)) => {
            assert!(function.is_anonymous());
            match &function.body {
                Expr::Binary(outer) => {
                    assert_eq!(outer.operator, '-');
                    assert!(matches!(&*outer.left, Expr::Binary(inner) if inner.operator == '-'));
                }
                other => panic!("expected subtraction, got {:?}", other),
            }
        }
        other => panic!("expected anonymous function, got {:?}", other),
    }
}

#[test]
fn test_error_then_recovery_on_next_line() {
    let error = parse("def f(x) (x + 1").unwrap_err();
    assert_eq!(error.to_string(), "error expected ')' at 15");

    let item = parse("def f(x) (x + 1)").unwrap().unwrap();
    assert_eq!(
        item.to_string(),
        "f([x])([+: Variable:x, Number:1.000000])"
    );
}

#[test]
fn test_tokens_cover_line() {
    let tokens = tokenize("def f(a) a # done");

    assert_eq!(tokens.first().unwrap().kind, TokenKind::Def);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    assert!(tokens.iter().all(|t| t.span.start <= t.span.end));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Comment));
}

#[test]
fn test_render_diagnostic_for_parse_error() {
    let line = "foo(1 2)";
    let error = parse(line).unwrap_err();

    let rendered = render_diagnostic(&error, line);
    assert!(rendered.starts_with("error expected ')' or ',' in argument list at 7"));
    assert!(rendered.ends_with("-------^"));
}

#[test]
fn test_driver_prints_trees_and_survives_errors() {
    let (stdout, stderr) = run_driver(
        &[],
        "3+4\n\nfoo(1,\ndef add(a b) a+b\nextern sin(x)\n",
    );

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "read: 3+4",
            "()([+: Number:3.000000, Number:4.000000])",
            "read: ",
            "empty input!",
            "read: foo(1,",
            "empty expr!",
            "read: def add(a b) a+b",
            "add([a][b])([+: Variable:a, Variable:b])",
            "read: extern sin(x)",
            "sin([x])",
        ]
    );
    assert!(stderr.contains("error unexpected token in expression position at 6"));
}

#[test]
fn test_driver_token_dump() {
    let (stdout, _) = run_driver(&["--tokens"], "x+1\n");

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "[0, 1] variable x",
            "[1, 2] char+",
            "[2, 3] number 1",
            "[3, 3] eof",
        ]
    );
}

#[test]
fn test_driver_pretty_errors() {
    let (_, stderr) = run_driver(&["--pretty-errors"], "(1 + 2\n");

    assert!(stderr.contains("error expected ')' at 6"));
    assert!(stderr.contains("1 | (1 + 2"));
    assert!(stderr.contains("------^"));
}

#[test]
fn test_driver_continues_after_invalid_utf8_line() {
    let (stdout, stderr) = run_driver_bytes(&[], b"foo(\xff)\n1+2\n");

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "read: foo(\u{FFFD})",
            "empty expr!",
            "read: 1+2",
            "()([+: Number:1.000000, Number:2.000000])",
        ]
    );
    assert!(stderr.contains("error unexpected token in expression position"));
}

use crate::{
    ast::expressions::{BinaryExpr, CallExpr, Expr, NumberExpr, VariableExpr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// expression ::= primary (binop primary)*
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_primary_expr(parser)?;
    parse_binary_expr_rhs(parser, 0, left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    log::trace!(
        "primary at {} ({})",
        parser.get_position().0,
        parser.current_token_kind()
    );

    match parser.current_token_kind() {
        TokenKind::Number => parse_number_expr(parser),
        TokenKind::Identifier => parse_identifier_expr(parser),
        TokenKind::Char('(') => parse_paren_expr(parser),
        _ => Err(parser.error(ErrorImpl::UnexpectedToken {
            token: parser.current_token().lexeme(),
        })),
    }
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance();

    Ok(Expr::Number(NumberExpr {
        value: token.number().unwrap_or_default(),
        span: token.span,
    }))
}

/// identifier ::= name | name '(' (expression (',' expression)*)? ')'
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name_token = parser.advance();
    let name = name_token.text().unwrap_or_default().to_string();

    if !parser.current_token_kind().is_char('(') {
        return Ok(Expr::Variable(VariableExpr {
            name,
            span: name_token.span,
        }));
    }

    parser.advance();

    let mut arguments = vec![];
    if !parser.current_token_kind().is_char(')') {
        loop {
            arguments.push(parse_expr(parser)?);

            if parser.current_token_kind().is_char(')') {
                break;
            }

            if !parser.current_token_kind().is_char(',') {
                return Err(parser.error(ErrorImpl::ExpectedArgumentSeparator {
                    token: parser.current_token().lexeme(),
                }));
            }

            parser.advance();
        }
    }

    let close = parser.advance();

    Ok(Expr::Call(CallExpr {
        callee: name,
        arguments,
        span: name_token.span.to(&close.span),
    }))
}

/// paren ::= '(' expression ')'
///
/// The parentheses only shape the tree; the inner expression is returned as is.
pub fn parse_paren_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser)?;
    parser.expect_char(')', ErrorImpl::ExpectedCloseParen)?;

    Ok(expr)
}

/// Precedence climbing over `(binop primary)*`.
///
/// Only operators binding at least as tightly as `min_precedence` are
/// consumed here. Equal precedence loops rather than recursing, which makes
/// every operator left associative. A tighter operator following the right
/// operand is resolved at its own precedence, so in `1 < 2 * 3 + 4` only the
/// `*` folds into the right side of `<`.
pub fn parse_binary_expr_rhs(
    parser: &mut Parser,
    min_precedence: i32,
    mut left: Expr,
) -> Result<Expr, Error> {
    loop {
        let precedence = parser.get_token_precedence();
        if precedence < min_precedence {
            return Ok(left);
        }

        let TokenKind::Char(operator) = parser.advance().kind else {
            return Ok(left);
        };

        let mut right = parse_primary_expr(parser)?;

        // A tighter operator after the operand takes it as its left side
        let next_precedence = parser.get_token_precedence();
        if precedence < next_precedence {
            right = parse_binary_expr_rhs(parser, next_precedence, right)?;
        }

        left = Expr::Binary(BinaryExpr {
            span: left.get_span().to(right.get_span()),
            operator,
            left: Box::new(left),
            right: Box::new(right),
        });
    }
}

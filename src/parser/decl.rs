use crate::{
    ast::declarations::{FunctionDef, Prototype},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// prototype ::= name '(' name* ')'
pub fn parse_prototype(parser: &mut Parser) -> Result<Prototype, Error> {
    if parser.current_token_kind() != TokenKind::Identifier {
        return Err(parser.error(ErrorImpl::ExpectedFunctionName));
    }

    let name_token = parser.advance();
    let name = name_token.text().unwrap_or_default().to_string();

    parser.expect_char('(', ErrorImpl::ExpectedPrototypeOpenParen)?;

    let mut params = vec![];
    while parser.current_token_kind() == TokenKind::Identifier {
        let param = parser.advance();
        params.push(param.text().unwrap_or_default().to_string());
    }

    let close = parser.expect_char(')', ErrorImpl::ExpectedPrototypeCloseParen)?;

    Ok(Prototype {
        name,
        params,
        span: name_token.span.to(&close.span),
    })
}

/// definition ::= 'def' prototype expression
pub fn parse_function_definition(parser: &mut Parser) -> Result<FunctionDef, Error> {
    let def_token = parser.advance();
    let proto = parse_prototype(parser)?;
    let body = parse_expr(parser)?;

    Ok(FunctionDef {
        span: def_token.span.to(body.get_span()),
        proto,
        body,
    })
}

/// external ::= 'extern' prototype
pub fn parse_extern(parser: &mut Parser) -> Result<Prototype, Error> {
    parser.advance();
    parse_prototype(parser)
}

/// A bare expression, wrapped in an anonymous parameterless definition.
pub fn parse_top_level_expr(parser: &mut Parser) -> Result<FunctionDef, Error> {
    let body = parse_expr(parser)?;
    let span = *body.get_span();

    Ok(FunctionDef {
        proto: Prototype::anonymous(span),
        body,
        span,
    })
}

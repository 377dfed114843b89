use crate::{
    ast::{
        ast::Node,
        expressions::{ArithOp, BinaryCondition, BinaryExpr, Condition, Expr, Ident, NumberExpr, OddCondition, RelOp},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::expected_kinds, parser::Parser};

fn additive_op(kind: TokenKind) -> Option<ArithOp> {
    match kind {
        TokenKind::Plus | TokenKind::Dash => ArithOp::from_token(kind),
        _ => None,
    }
}

fn multiplicative_op(kind: TokenKind) -> Option<ArithOp> {
    match kind {
        TokenKind::Star | TokenKind::Slash => ArithOp::from_token(kind),
        _ => None,
    }
}

/// `expr ::= term { ('+' | '-') term }`, left-associative.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_term(parser)?;

    while let Some(op) = additive_op(parser.current_token_kind()) {
        parser.advance()?;
        let right = parse_term(parser)?;
        left = make_binary(left, op, right);
    }

    Ok(left)
}

/// `term ::= factor { ('*' | '/') factor }`, left-associative.
pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_factor(parser)?;

    while let Some(op) = multiplicative_op(parser.current_token_kind()) {
        parser.advance()?;
        let right = parse_factor(parser)?;
        left = make_binary(left, op, right);
    }

    Ok(left)
}

// A binary expression sits where its left operand starts
fn make_binary(left: Expr, op: ArithOp, right: Expr) -> Expr {
    let position = left.get_position().clone();

    Expr::Binary(BinaryExpr {
        left: Box::new(left),
        op,
        right: Box::new(right),
        position,
    })
}

pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    let kind = parser.current_token_kind();

    match parser.get_factor_lookup().get(&kind).copied() {
        Some(factor_fn) => factor_fn(parser),
        None => Err(parser.unexpected(&expected_kinds(parser.get_factor_lookup()))),
    }
}

pub fn parse_ident_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let identifier = parser.expect(TokenKind::Identifier)?;

    Ok(Expr::Ident(Ident {
        name: identifier.text.unwrap_or_default(),
        position: identifier.position,
    }))
}

/// A number with an optional sign, folded into the literal's value. The
/// literal sits where its sign (if any) starts.
pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let position = parser.get_position();

    let negate = match parser.current_token_kind() {
        TokenKind::Plus => {
            parser.advance()?;
            false
        }
        TokenKind::Dash => {
            parser.advance()?;
            true
        }
        _ => false,
    };

    let number = parser.expect(TokenKind::Number)?;
    let magnitude = number.value.unwrap_or_default();

    Ok(Expr::Number(NumberExpr {
        value: if negate { -magnitude } else { magnitude },
        position,
    }))
}

/// `'(' expr ')'`; the inner expression takes the position of the `(`.
pub fn parse_paren_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.expect(TokenKind::OpenParen)?.position;
    let mut expr = parse_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    expr.set_position(start);
    Ok(expr)
}

/// `condition ::= 'odd' expr | expr relop expr`
pub fn parse_condition(parser: &mut Parser) -> Result<Condition, Error> {
    let kind = parser.current_token_kind();

    if kind == TokenKind::Odd {
        let start = parser.advance()?.position;
        let expr = parse_expr(parser)?;

        return Ok(Condition::Odd(OddCondition {
            expr,
            position: start,
        }));
    }

    if !parser.get_factor_lookup().contains_key(&kind) {
        let mut expected = vec![TokenKind::Odd];
        expected.extend(expected_kinds(parser.get_factor_lookup()));
        expected.sort();

        return Err(parser.unexpected(&expected));
    }

    let left = parse_expr(parser)?;

    let op = match RelOp::from_token(parser.current_token_kind()) {
        Some(op) => op,
        None => {
            let found = parser.current_token();
            return Err(Error::new(
                ErrorImpl::ExpectedRelationalOperator {
                    found: found.kind,
                    text: found.text.clone(),
                },
                found.position.clone(),
            ));
        }
    };
    parser.advance()?;

    let right = parse_expr(parser)?;
    let position = left.get_position().clone();

    Ok(Condition::Binary(BinaryCondition {
        left,
        op,
        right,
        position,
    }))
}

use log::trace;

use crate::{
    ast::{
        list::AstList,
        statements::{AssignStmt, BeginStmt, IfStmt, ReadStmt, SkipStmt, Stmt, WhileStmt, WriteStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_condition, parse_expr},
    lookups::expected_kinds,
    parser::Parser,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let kind = parser.current_token_kind();
    trace!("parsing statement starting with {:?} at {}", kind, parser.get_position());

    match parser.get_stmt_lookup().get(&kind).copied() {
        Some(stmt_fn) => stmt_fn(parser),
        None => Err(parser.unexpected(&expected_kinds(parser.get_stmt_lookup()))),
    }
}

pub fn parse_assign_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let identifier = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Becomes)?;
    let expr = parse_expr(parser)?;

    Ok(Stmt::Assign(AssignStmt {
        name: identifier.text.unwrap_or_default(),
        expr,
        position: identifier.position,
    }))
}

pub fn parse_begin_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Begin)?.position;

    let mut stmts = AstList::singleton(parse_stmt(parser)?);
    while parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance()?;
        stmts.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::End)?;

    Ok(Stmt::Begin(BeginStmt {
        stmts,
        position: start,
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::If)?.position;
    let condition = parse_condition(parser)?;

    parser.expect(TokenKind::Then)?;
    let then_stmt = parse_stmt(parser)?;

    parser.expect(TokenKind::Else)?;
    let else_stmt = parse_stmt(parser)?;

    Ok(Stmt::If(IfStmt {
        condition,
        then_stmt: Box::new(then_stmt),
        else_stmt: Box::new(else_stmt),
        position: start,
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::While)?.position;
    let condition = parse_condition(parser)?;

    parser.expect(TokenKind::Do)?;
    let body = parse_stmt(parser)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        body: Box::new(body),
        position: start,
    }))
}

pub fn parse_read_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Read)?.position;
    let identifier = parser.expect(TokenKind::Identifier)?;

    Ok(Stmt::Read(ReadStmt {
        name: identifier.text.unwrap_or_default(),
        position: start,
    }))
}

pub fn parse_write_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Write)?.position;
    let expr = parse_expr(parser)?;

    Ok(Stmt::Write(WriteStmt {
        expr,
        position: start,
    }))
}

pub fn parse_skip_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Skip)?.position;

    Ok(Stmt::Skip(SkipStmt { position: start }))
}

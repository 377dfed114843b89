use std::collections::HashMap;

use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type FactorHandler = fn(&mut Parser) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Factors
    parser.factor(TokenKind::Identifier, parse_ident_expr);
    parser.factor(TokenKind::Number, parse_number_expr);
    parser.factor(TokenKind::Plus, parse_number_expr);
    parser.factor(TokenKind::Dash, parse_number_expr);
    parser.factor(TokenKind::OpenParen, parse_paren_expr);

    // Statements
    parser.stmt(TokenKind::Identifier, parse_assign_stmt);
    parser.stmt(TokenKind::Begin, parse_begin_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::Read, parse_read_stmt);
    parser.stmt(TokenKind::Write, parse_write_stmt);
    parser.stmt(TokenKind::Skip, parse_skip_stmt);
}

/// The token kinds a lookup table can start with, in a stable order for
/// error messages.
pub fn expected_kinds<V>(lookup: &HashMap<TokenKind, V>) -> Vec<TokenKind> {
    let mut kinds: Vec<TokenKind> = lookup.keys().copied().collect();
    kinds.sort();
    kinds
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type FactorLookup = HashMap<TokenKind, FactorHandler>;

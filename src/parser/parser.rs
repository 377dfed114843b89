//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program entry points.
//! The parser is a predictive recursive-descent parser with exactly one token
//! of lookahead: each nonterminal is a function, and the alternatives of a
//! statement or factor are chosen by looking the current token's kind up in
//! a handler table.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - Factor handlers (the operands of arithmetic expressions)

use std::{collections::HashMap, path::Path};

use log::debug;

use crate::{
    ast::{ast::{Node, Program}, statements::Stmt},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    decl::{parse_const_decls, parse_var_decls},
    lookups::{create_token_lookups, FactorHandler, FactorLookup, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct owns the lexer and the single token of lookahead, and holds
/// the lookup tables used to dispatch on the current token.
pub struct Parser {
    /// Source of further tokens
    lexer: Lexer,
    /// The lookahead token
    tok: Token,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for factor parsing handlers
    factor_lookup: FactorLookup,
}

impl Parser {
    /// Creates a new Parser, reading the first token from `lexer`.
    ///
    /// # Arguments
    ///
    /// * `lexer` - The lexer to take tokens from
    ///
    /// # Returns
    ///
    /// A parser positioned on the first token, or the lexical error that
    /// token produced.
    pub fn new(mut lexer: Lexer) -> Result<Self, Error> {
        let tok = lexer.next_token()?;

        let mut parser = Parser {
            lexer,
            tok,
            stmt_lookup: HashMap::new(),
            factor_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        Ok(parser)
    }

    /// Opens the file at `path` and creates a parser over it.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Parser::new(Lexer::open(path)?)
    }

    /// Finishes parsing and releases the lexer.
    pub fn close(self) {
        self.lexer.close();
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tok
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tok.kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// Once the end of file has been reached the lookahead stays on EOF.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = if self.lexer.done() {
            self.tok.clone()
        } else {
            self.lexer.next_token()?
        };

        Ok(std::mem::replace(&mut self.tok, next))
    }

    /// Consumes a token of the specified kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an
    /// unexpected token error naming `expected_kind`.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.tok.kind == expected_kind {
            self.advance()
        } else {
            Err(self.unexpected(&[expected_kind]))
        }
    }

    /// Builds the error for finding the current token where one of
    /// `expected` was required.
    pub fn unexpected(&self, expected: &[TokenKind]) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected.to_vec(),
                found: self.tok.kind,
                text: self.tok.text.clone(),
            },
            self.tok.position.clone(),
        )
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the factor lookup table.
    pub fn get_factor_lookup(&self) -> &FactorLookup {
        &self.factor_lookup
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind that starts the statement
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a factor handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind that starts the factor
    /// * `factor_fn` - The handler function for this factor
    pub fn factor(&mut self, kind: TokenKind, factor_fn: FactorHandler) {
        self.factor_lookup.insert(kind, factor_fn);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.tok.position.clone()
    }
}

/// Parses a whole program:
///
/// ```text
/// program ::= const-decls var-decls stmt '.' EOF
/// ```
///
/// The program's position is that of its first variable declaration, or of
/// its statement when there are no variables.
pub fn parse_program(parser: &mut Parser) -> Result<Program, Error> {
    let const_decls = parse_const_decls(parser)?;
    let var_decls = parse_var_decls(parser)?;
    let stmt: Stmt = parse_stmt(parser)?;

    parser.expect(TokenKind::Dot)?;
    parser.expect(TokenKind::EOF)?;

    let position = match var_decls.first() {
        Some(var_decl) => var_decl.position.clone(),
        None => stmt.get_position().clone(),
    };

    debug!(
        "parsed program at {} ({} constants, {} variables)",
        position,
        const_decls.len(),
        var_decls.len()
    );

    Ok(Program {
        const_decls,
        var_decls,
        stmt,
        position,
    })
}

/// Parses everything `lexer` produces into a [`Program`].
///
/// This is the main entry point for parsing. It creates a parser instance,
/// parses the program and closes the parser again, whether or not parsing
/// succeeded.
pub fn parse(lexer: Lexer) -> Result<Program, Error> {
    let mut parser = Parser::new(lexer)?;
    let program = parse_program(&mut parser);
    parser.close();

    program
}

/// Parses source text held in memory.
pub fn parse_source(source: String, file: Option<String>) -> Result<Program, Error> {
    parse(Lexer::new(source, file))
}

/// Parses the file at `path`.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Program, Error> {
    parse(Lexer::open(path)?)
}

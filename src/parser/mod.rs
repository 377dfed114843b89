//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It is a predictive recursive-descent
//! parser with one token of lookahead and handles:
//!
//! - Declaration parsing (`const` and `var` blocks)
//! - Statement parsing (assignment, blocks, control flow, I/O)
//! - Expression and condition parsing with left-associative operators
//!
//! Statements and factors are dispatched through lookup tables keyed by the
//! kind of the token that starts them. Parsing stops at the first error.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

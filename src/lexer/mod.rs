//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts PL/0 source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, numeric literals, and operators
//! - Line and column tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

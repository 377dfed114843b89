//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorCategory, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::scope_checker::symbol_table::IdKind;
use crate::Position;
use std::rc::Rc;

fn position(line: u32, column: u32) -> Position {
    Position::new(Rc::new("test.pl0".to_string()), line, column)
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::IllegalCharacter { character: '@', code: 64 },
        position(1, 3),
    );

    assert_eq!(error.get_error_name(), "IllegalCharacter");
    assert_eq!(error.get_category(), ErrorCategory::Lexical);
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnterminatedComment, position(42, 7));

    assert_eq!(error.get_position().line, 42);
    assert_eq!(error.get_position().column, 7);
    assert_eq!(*error.get_position().file, "test.pl0");
}

#[test]
fn test_error_categories() {
    let cases = [
        (ErrorImpl::NumberOutOfRange { literal: "99999".to_string() }, ErrorCategory::Lexical),
        (ErrorImpl::MalformedBecomes { found: "' '".to_string() }, ErrorCategory::Lexical),
        (
            ErrorImpl::IdentifierTooLong { prefix: "aaaa".to_string(), max: 255 },
            ErrorCategory::Lexical,
        ),
        (
            ErrorImpl::UnexpectedToken { expected: vec![TokenKind::Dot], found: TokenKind::EOF, text: None },
            ErrorCategory::Syntax,
        ),
        (
            ErrorImpl::ExpectedRelationalOperator { found: TokenKind::Then, text: Some("then".to_string()) },
            ErrorCategory::Syntax,
        ),
        (ErrorImpl::UndeclaredIdentifier { name: "x".to_string() }, ErrorCategory::Declaration),
        (
            ErrorImpl::Io { path: "a.pl0".to_string(), message: "not found".to_string() },
            ErrorCategory::Io,
        ),
    ];

    for (error_impl, category) in cases {
        assert_eq!(Error::new(error_impl, position(1, 1)).get_category(), category);
    }
}

#[test]
fn test_illegal_character_message() {
    let error = ErrorImpl::IllegalCharacter { character: '$', code: '$' as u32 };

    assert_eq!(error.to_string(), "Illegal character '$' (044)");
}

#[test]
fn test_number_out_of_range_message() {
    let error = ErrorImpl::NumberOutOfRange { literal: "32768".to_string() };

    assert_eq!(error.to_string(), "The value of 32768 is too large for a short");
}

#[test]
fn test_unexpected_token_message() {
    let single = ErrorImpl::UnexpectedToken {
        expected: vec![TokenKind::Becomes],
        found: TokenKind::Equals,
        text: Some("=".to_string()),
    };
    assert_eq!(single.to_string(), "expected `:=`, but found `=`");

    let several = ErrorImpl::UnexpectedToken {
        expected: vec![TokenKind::Identifier, TokenKind::Begin, TokenKind::Skip],
        found: TokenKind::Number,
        text: Some("12".to_string()),
    };
    assert_eq!(
        several.to_string(),
        "expected one of identifier, `begin` or `skip`, but found number `12`"
    );
}

#[test]
fn test_relational_operator_message() {
    let error = ErrorImpl::ExpectedRelationalOperator { found: TokenKind::Do, text: Some("do".to_string()) };

    assert_eq!(
        error.to_string(),
        "expected a relational operator (one of `=`, `<>`, `<`, `<=`, `>` or `>=`), but found `do`"
    );
}

#[test]
fn test_declaration_messages() {
    let duplicate = ErrorImpl::DuplicateDeclaration {
        name: "n".to_string(),
        kind: IdKind::Constant,
        existing_kind: IdKind::Variable,
    };
    assert_eq!(duplicate.to_string(), "constant \"n\" is already declared as a variable");

    let undeclared = ErrorImpl::UndeclaredIdentifier { name: "n".to_string() };
    assert_eq!(undeclared.to_string(), "identifier \"n\" is not declared");
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::UndeclaredIdentifier { name: "y".to_string() }, position(3, 9));

    assert_eq!(error.to_string(), "test.pl0:3:9: Declaration error: identifier \"y\" is not declared");
}

#[test]
fn test_error_tip() {
    let missing_dot = Error::new(
        ErrorImpl::UnexpectedToken { expected: vec![TokenKind::Dot], found: TokenKind::EOF, text: None },
        position(1, 5),
    );
    match missing_dot.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`.`")),
        ErrorTip::None => panic!("expected a tip"),
    }

    let illegal = Error::new(ErrorImpl::IllegalCharacter { character: '!', code: 33 }, position(1, 1));
    assert!(matches!(illegal.get_tip(), ErrorTip::None));
}

#[test]
fn test_io_category_display() {
    let error = Error::new(
        ErrorImpl::Io { path: "gone.pl0".to_string(), message: "No such file".to_string() },
        position(0, 0),
    );

    assert_eq!(error.to_string(), "test.pl0:0:0: I/O error: could not read gone.pl0: No such file");
}

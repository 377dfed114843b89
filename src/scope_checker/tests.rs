//! Unit tests for the scope checker and its symbol table.

use std::rc::Rc;

use super::{
    scope_checker::{scope_check, scope_check_program, ScopeChecker},
    symbol_table::{IdKind, SymbolTable},
};
use crate::{
    errors::errors::{Error, ErrorCategory, ErrorImpl},
    parser::parser::parse_source,
    Position,
};

fn check_test(source: &str) -> Result<SymbolTable, Error> {
    let program = parse_source(source.to_string(), Some("test.pl0".to_string())).unwrap();
    scope_check(&program)
}

fn position(line: u32, column: u32) -> Position {
    Position::new(Rc::new(String::from("test.pl0")), line, column)
}

#[test]
fn test_symbol_table_offsets_follow_insertion_order() {
    let mut table = SymbolTable::new();
    assert_eq!(table.size(), 0);

    table.insert("a", IdKind::Constant, position(1, 1)).unwrap();
    table.insert("b", IdKind::Variable, position(2, 1)).unwrap();

    assert_eq!(table.size(), 2);
    assert_eq!(table.lookup("a").unwrap().offset, 0);
    assert_eq!(table.lookup("b").unwrap().offset, 1);
    assert_eq!(table.lookup("b").unwrap().kind, IdKind::Variable);
    assert_eq!(table.names(), vec!["a", "b"]);
}

#[test]
fn test_symbol_table_rejects_duplicates() {
    let mut table = SymbolTable::new();
    table.insert("a", IdKind::Constant, position(1, 7)).unwrap();

    let error = table.insert("a", IdKind::Variable, position(2, 5)).unwrap_err();

    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::DuplicateDeclaration {
            name: String::from("a"),
            kind: IdKind::Variable,
            existing_kind: IdKind::Constant,
        }
    );
    assert_eq!(error.get_position(), &position(2, 5));

    // The first declaration is kept
    let attrs = table.lookup("a").unwrap();
    assert_eq!(attrs.kind, IdKind::Constant);
    assert_eq!(attrs.position, position(1, 7));
    assert_eq!(table.size(), 1);
}

#[test]
fn test_symbol_table_is_case_sensitive() {
    let mut table = SymbolTable::new();
    table.insert("x", IdKind::Variable, position(1, 1)).unwrap();

    assert!(table.is_defined("x"));
    assert!(!table.is_defined("X"));
    assert!(table.lookup("X").is_none());
}

#[test]
fn test_scope_check_valid_program() {
    let table = check_test(
        "const limit = 10;\nvar i, total;\nbegin read i; total := 0; while i < limit do begin total := total + i; i := i + 1 end; write total end.",
    )
    .unwrap();

    assert_eq!(table.size(), 3);
    assert_eq!(table.lookup("limit").unwrap().kind, IdKind::Constant);
    assert_eq!(table.lookup("limit").unwrap().offset, 0);
    assert_eq!(table.lookup("i").unwrap().offset, 1);
    assert_eq!(table.lookup("total").unwrap().offset, 2);
}

#[test]
fn test_scope_check_records_declaration_positions() {
    let table = check_test("const k = 1;\nvar v;\nv := k.").unwrap();

    assert_eq!(table.lookup("k").unwrap().position, position(1, 7));
    assert_eq!(table.lookup("v").unwrap().position, position(2, 5));
}

#[test]
fn test_scope_check_duplicate_variable_of_constant() {
    let error = check_test("const a = 1;\nvar a;\nskip.").unwrap_err();

    assert_eq!(error.get_category(), ErrorCategory::Declaration);
    assert_eq!(error.get_error_impl().to_string(), "variable \"a\" is already declared as a constant");
    assert_eq!(error.get_position(), &position(2, 5));
}

#[test]
fn test_scope_check_duplicate_within_block() {
    let error = check_test("var x, y, x;\nskip.").unwrap_err();

    assert!(matches!(
        error.get_error_impl(),
        ErrorImpl::DuplicateDeclaration { kind: IdKind::Variable, existing_kind: IdKind::Variable, .. }
    ));
    assert_eq!(error.get_position().column, 11);
}

#[test]
fn test_scope_check_undeclared_assignment_target() {
    let error = check_test("var x; y := 1.").unwrap_err();

    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::UndeclaredIdentifier { name: String::from("y") }
    );
    assert_eq!(error.get_position(), &position(1, 8));
}

#[test]
fn test_scope_check_undeclared_read_target() {
    let error = check_test("read z.").unwrap_err();

    assert_eq!(error.get_error_impl(), &ErrorImpl::UndeclaredIdentifier { name: String::from("z") });
    assert_eq!(error.get_position(), &position(1, 1));
}

#[test]
fn test_scope_check_undeclared_in_expression() {
    let error = check_test("var x;\nx := 2 * (x + w).").unwrap_err();

    assert_eq!(error.get_error_impl(), &ErrorImpl::UndeclaredIdentifier { name: String::from("w") });
    assert_eq!(error.get_position(), &position(2, 15));
}

#[test]
fn test_scope_check_undeclared_in_condition() {
    let error = check_test("var x; if odd q then skip else skip.").unwrap_err();
    assert_eq!(error.get_error_impl(), &ErrorImpl::UndeclaredIdentifier { name: String::from("q") });

    let error = check_test("var x; while x < q do skip.").unwrap_err();
    assert_eq!(error.get_error_impl(), &ErrorImpl::UndeclaredIdentifier { name: String::from("q") });
}

#[test]
fn test_scope_check_reports_first_error() {
    let error = check_test("begin write a; write b end.").unwrap_err();

    assert_eq!(error.get_error_impl(), &ErrorImpl::UndeclaredIdentifier { name: String::from("a") });
}

#[test]
fn test_scope_check_declarations_come_before_body() {
    let program = parse_source(String::from("var x; begin skip; x := x end."), None).unwrap();

    let mut scope_checker = ScopeChecker::new();
    scope_check_program(&mut scope_checker, &program).unwrap();

    assert!(scope_checker.get_symbol_table().is_defined("x"));
    assert_eq!(scope_checker.into_symbol_table().size(), 1);
}

#[test]
fn test_scope_check_numbers_need_no_declarations() {
    let table = check_test("write 1 + 2 * -3.").unwrap();

    assert_eq!(table.size(), 0);
}

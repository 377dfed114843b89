use log::{debug, trace};

use crate::{
    ast::{
        ast::Program,
        declarations::{ConstDecl, VarDecl},
        expressions::{Condition, Expr, Ident},
        statements::Stmt,
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::symbol_table::{IdKind, SymbolTable};

/// Walks a program, declaring every constant and variable and checking that
/// each name used has been declared.
#[derive(Debug, Default)]
pub struct ScopeChecker {
    symbol_table: SymbolTable,
}

impl ScopeChecker {
    pub fn new() -> Self {
        ScopeChecker {
            symbol_table: SymbolTable::new(),
        }
    }

    pub fn get_symbol_table(&self) -> &SymbolTable {
        &self.symbol_table
    }

    pub fn into_symbol_table(self) -> SymbolTable {
        self.symbol_table
    }

    fn declare(&mut self, name: &str, kind: IdKind, position: &Position) -> Result<(), Error> {
        let attrs = self.symbol_table.insert(name, kind, position.clone())?;
        trace!("declared {} {} at offset {}", kind, name, attrs.offset);

        Ok(())
    }
}

pub fn scope_check_program(scope_checker: &mut ScopeChecker, program: &Program) -> Result<(), Error> {
    for const_decl in program.const_decls.iter() {
        scope_check_const_decl(scope_checker, const_decl)?;
    }

    for var_decl in program.var_decls.iter() {
        scope_check_var_decl(scope_checker, var_decl)?;
    }

    scope_check_stmt(scope_checker, &program.stmt)
}

pub fn scope_check_const_decl(scope_checker: &mut ScopeChecker, const_decl: &ConstDecl) -> Result<(), Error> {
    scope_checker.declare(&const_decl.name, IdKind::Constant, &const_decl.position)
}

pub fn scope_check_var_decl(scope_checker: &mut ScopeChecker, var_decl: &VarDecl) -> Result<(), Error> {
    scope_checker.declare(&var_decl.name, IdKind::Variable, &var_decl.position)
}

pub fn scope_check_stmt(scope_checker: &mut ScopeChecker, stmt: &Stmt) -> Result<(), Error> {
    match stmt {
        Stmt::Assign(assign) => {
            scope_check_name(scope_checker, &assign.name, &assign.position)?;
            scope_check_expr(scope_checker, &assign.expr)
        }
        Stmt::Begin(begin) => {
            for stmt in begin.stmts.iter() {
                scope_check_stmt(scope_checker, stmt)?;
            }
            Ok(())
        }
        Stmt::If(if_stmt) => {
            scope_check_condition(scope_checker, &if_stmt.condition)?;
            scope_check_stmt(scope_checker, &if_stmt.then_stmt)?;
            scope_check_stmt(scope_checker, &if_stmt.else_stmt)
        }
        Stmt::While(while_stmt) => {
            scope_check_condition(scope_checker, &while_stmt.condition)?;
            scope_check_stmt(scope_checker, &while_stmt.body)
        }
        Stmt::Read(read) => scope_check_name(scope_checker, &read.name, &read.position),
        Stmt::Write(write) => scope_check_expr(scope_checker, &write.expr),
        Stmt::Skip(_) => Ok(()),
    }
}

pub fn scope_check_condition(scope_checker: &mut ScopeChecker, condition: &Condition) -> Result<(), Error> {
    match condition {
        Condition::Odd(odd) => scope_check_expr(scope_checker, &odd.expr),
        Condition::Binary(binary) => {
            scope_check_expr(scope_checker, &binary.left)?;
            scope_check_expr(scope_checker, &binary.right)
        }
    }
}

pub fn scope_check_expr(scope_checker: &mut ScopeChecker, expr: &Expr) -> Result<(), Error> {
    match expr {
        Expr::Ident(ident) => scope_check_ident(scope_checker, ident),
        Expr::Number(_) => Ok(()),
        Expr::Binary(binary) => {
            scope_check_expr(scope_checker, &binary.left)?;
            scope_check_expr(scope_checker, &binary.right)
        }
    }
}

pub fn scope_check_ident(scope_checker: &mut ScopeChecker, ident: &Ident) -> Result<(), Error> {
    scope_check_name(scope_checker, &ident.name, &ident.position)
}

fn scope_check_name(scope_checker: &ScopeChecker, name: &str, position: &Position) -> Result<(), Error> {
    if scope_checker.symbol_table.is_defined(name) {
        Ok(())
    } else {
        Err(Error::new(
            ErrorImpl::UndeclaredIdentifier {
                name: name.to_string(),
            },
            position.clone(),
        ))
    }
}

/// Checks a whole program in a fresh scope, returning the filled symbol
/// table.
pub fn scope_check(program: &Program) -> Result<SymbolTable, Error> {
    let mut scope_checker = ScopeChecker::new();
    scope_check_program(&mut scope_checker, program)?;

    debug!(
        "scope check of {} passed with {} names declared",
        program.position,
        scope_checker.get_symbol_table().size()
    );

    Ok(scope_checker.into_symbol_table())
}

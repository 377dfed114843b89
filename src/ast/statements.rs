use std::fmt::Display;

use crate::Position;

use super::{
    ast::{write_indent, Node},
    expressions::{Condition, Expr},
    list::AstList,
};

/// `name := expr`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub name: String,
    pub expr: Expr,
    pub position: Position,
}

/// `begin stmt; ...; stmt end`
#[derive(Debug, Clone, PartialEq)]
pub struct BeginStmt {
    pub stmts: AstList<Stmt>,
    pub position: Position,
}

/// `if condition then stmt else stmt`
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Condition,
    pub then_stmt: Box<Stmt>,
    pub else_stmt: Box<Stmt>,
    pub position: Position,
}

/// `while condition do stmt`
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Condition,
    pub body: Box<Stmt>,
    pub position: Position,
}

/// `read name`
#[derive(Debug, Clone, PartialEq)]
pub struct ReadStmt {
    pub name: String,
    pub position: Position,
}

/// `write expr`
#[derive(Debug, Clone, PartialEq)]
pub struct WriteStmt {
    pub expr: Expr,
    pub position: Position,
}

/// `skip`
#[derive(Debug, Clone, PartialEq)]
pub struct SkipStmt {
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign(AssignStmt),
    Begin(BeginStmt),
    If(IfStmt),
    While(WhileStmt),
    Read(ReadStmt),
    Write(WriteStmt),
    Skip(SkipStmt),
}

impl Stmt {
    pub(crate) fn write_indented(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        write_indent(f, level)?;

        match self {
            Stmt::Assign(assign) => write!(f, "{} := {}", assign.name, assign.expr),
            Stmt::Begin(begin) => {
                writeln!(f, "begin")?;
                for (index, stmt) in begin.stmts.iter().enumerate() {
                    if index > 0 {
                        writeln!(f, ";")?;
                    }
                    stmt.write_indented(f, level + 1)?;
                }
                writeln!(f)?;
                write_indent(f, level)?;
                write!(f, "end")
            }
            Stmt::If(if_stmt) => {
                writeln!(f, "if {}", if_stmt.condition)?;
                write_indent(f, level)?;
                writeln!(f, "then")?;
                if_stmt.then_stmt.write_indented(f, level + 1)?;
                writeln!(f)?;
                write_indent(f, level)?;
                writeln!(f, "else")?;
                if_stmt.else_stmt.write_indented(f, level + 1)
            }
            Stmt::While(while_stmt) => {
                writeln!(f, "while {}", while_stmt.condition)?;
                write_indent(f, level)?;
                writeln!(f, "do")?;
                while_stmt.body.write_indented(f, level + 1)
            }
            Stmt::Read(read) => write!(f, "read {}", read.name),
            Stmt::Write(write) => write!(f, "write {}", write.expr),
            Stmt::Skip(_) => write!(f, "skip"),
        }
    }
}

impl Node for Stmt {
    fn get_position(&self) -> &Position {
        match self {
            Stmt::Assign(assign) => &assign.position,
            Stmt::Begin(begin) => &begin.position,
            Stmt::If(if_stmt) => &if_stmt.position,
            Stmt::While(while_stmt) => &while_stmt.position,
            Stmt::Read(read) => &read.position,
            Stmt::Write(write) => &write.position,
            Stmt::Skip(skip) => &skip.position,
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_indented(f, 0)
    }
}

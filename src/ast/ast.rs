use std::fmt::{Debug, Display};

use crate::Position;

use super::{
    declarations::{ConstDecl, VarDecl},
    list::AstList,
    statements::Stmt,
};

/// Node Trait
///
/// Every AST node records where it came from, for diagnostics only.
pub trait Node: Debug {
    /// Returns the position of the node.
    fn get_position(&self) -> &Position;
}

/// Program
///
/// The root of the tree: constant declarations, then variable declarations,
/// then the single body statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub const_decls: AstList<ConstDecl>,
    pub var_decls: AstList<VarDecl>,
    pub stmt: Stmt,
    pub position: Position,
}

impl Node for Program {
    fn get_position(&self) -> &Position {
        &self.position
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for const_decl in self.const_decls.iter() {
            writeln!(f, "{}", const_decl)?;
        }
        for var_decl in self.var_decls.iter() {
            writeln!(f, "{}", var_decl)?;
        }

        self.stmt.write_indented(f, 0)?;
        writeln!(f, ".")
    }
}

/// Writes the leading whitespace for the given nesting level.
pub(crate) fn write_indent(f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
    write!(f, "{:width$}", "", width = level * 2)
}

use std::fmt::Display;

use crate::Position;

use super::ast::Node;

/// Constant Declaration
/// `name = value` inside a `const` block.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstDecl {
    pub name: String,
    pub value: i16,
    pub position: Position,
}

impl Node for ConstDecl {
    fn get_position(&self) -> &Position {
        &self.position
    }
}

impl Display for ConstDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "const {} = {};", self.name, self.value)
    }
}

/// Variable Declaration
/// One name inside a `var` block.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: String,
    pub position: Position,
}

impl Node for VarDecl {
    fn get_position(&self) -> &Position {
        &self.position
    }
}

impl Display for VarDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "var {};", self.name)
    }
}

use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Position};

use super::ast::Node;

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    pub fn from_token(kind: TokenKind) -> Option<ArithOp> {
        match kind {
            TokenKind::Plus => Some(ArithOp::Add),
            TokenKind::Dash => Some(ArithOp::Sub),
            TokenKind::Star => Some(ArithOp::Mul),
            TokenKind::Slash => Some(ArithOp::Div),
            _ => None,
        }
    }
}

impl Display for ArithOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithOp::Add => write!(f, "+"),
            ArithOp::Sub => write!(f, "-"),
            ArithOp::Mul => write!(f, "*"),
            ArithOp::Div => write!(f, "/"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl RelOp {
    pub const ALL_TOKENS: [TokenKind; 6] = [
        TokenKind::Equals,
        TokenKind::NotEquals,
        TokenKind::Less,
        TokenKind::LessEquals,
        TokenKind::Greater,
        TokenKind::GreaterEquals,
    ];

    pub fn from_token(kind: TokenKind) -> Option<RelOp> {
        match kind {
            TokenKind::Equals => Some(RelOp::Eq),
            TokenKind::NotEquals => Some(RelOp::Ne),
            TokenKind::Less => Some(RelOp::Lt),
            TokenKind::LessEquals => Some(RelOp::Le),
            TokenKind::Greater => Some(RelOp::Gt),
            TokenKind::GreaterEquals => Some(RelOp::Ge),
            _ => None,
        }
    }
}

impl Display for RelOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            RelOp::Eq => "=",
            RelOp::Ne => "<>",
            RelOp::Lt => "<",
            RelOp::Le => "<=",
            RelOp::Gt => ">",
            RelOp::Ge => ">=",
        };

        write!(f, "{}", text)
    }
}

// LITERALS

/// Identifier Expression
/// A reference to a declared constant or variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub position: Position,
}

/// Number Expression
/// A numeric literal, with any leading sign already folded in.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: i16,
    pub position: Position,
}

// EXPRESSIONS

/// Binary Expression
/// `left op right`; chains of the same precedence nest to the left.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub op: ArithOp,
    pub right: Box<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(Ident),
    Number(NumberExpr),
    Binary(BinaryExpr),
}

impl Expr {
    /// Replaces the recorded position, used for parenthesised expressions.
    pub fn set_position(&mut self, position: Position) {
        match self {
            Expr::Ident(ident) => ident.position = position,
            Expr::Number(number) => number.position = position,
            Expr::Binary(binary) => binary.position = position,
        }
    }
}

impl Node for Expr {
    fn get_position(&self) -> &Position {
        match self {
            Expr::Ident(ident) => &ident.position,
            Expr::Number(number) => &number.position,
            Expr::Binary(binary) => &binary.position,
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Ident(ident) => write!(f, "{}", ident.name),
            Expr::Number(number) => write!(f, "{}", number.value),
            Expr::Binary(binary) => write!(f, "({} {} {})", binary.left, binary.op, binary.right),
        }
    }
}

// CONDITIONS

/// Odd Condition
/// `odd expr`
#[derive(Debug, Clone, PartialEq)]
pub struct OddCondition {
    pub expr: Expr,
    pub position: Position,
}

/// Binary Condition
/// `left relop right`
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryCondition {
    pub left: Expr,
    pub op: RelOp,
    pub right: Expr,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Odd(OddCondition),
    Binary(BinaryCondition),
}

impl Node for Condition {
    fn get_position(&self) -> &Position {
        match self {
            Condition::Odd(odd) => &odd.position,
            Condition::Binary(binary) => &binary.position,
        }
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Odd(odd) => write!(f, "odd {}", odd.expr),
            Condition::Binary(binary) => write!(f, "{} {} {}", binary.left, binary.op, binary.right),
        }
    }
}

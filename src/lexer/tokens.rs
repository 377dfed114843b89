use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

/// Longest identifier the lexer accepts.
pub const MAX_IDENT_LENGTH: usize = 255;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("var", TokenKind::Var);
        map.insert("const", TokenKind::Const);
        map.insert("begin", TokenKind::Begin);
        map.insert("end", TokenKind::End);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("odd", TokenKind::Odd);
        map.insert("read", TokenKind::Read);
        map.insert("write", TokenKind::Write);
        map.insert("skip", TokenKind::Skip);
        // Lexed for compatibility; no grammar rule consumes them.
        map.insert("call", TokenKind::Call);
        map.insert("procedure", TokenKind::Procedure);
        map
    };
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    OpenParen,
    CloseParen,

    Becomes, // :=
    Equals,
    NotEquals, // <>
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Dot,
    Semicolon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Var,
    Const,
    Begin,
    End,
    If,
    Then,
    Else,
    While,
    Do,
    Odd,
    Read,
    Write,
    Skip,
    Call,
    Procedure,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            TokenKind::EOF => "end of file",
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Becomes => "`:=`",
            TokenKind::Equals => "`=`",
            TokenKind::NotEquals => "`<>`",
            TokenKind::Less => "`<`",
            TokenKind::LessEquals => "`<=`",
            TokenKind::Greater => "`>`",
            TokenKind::GreaterEquals => "`>=`",
            TokenKind::Dot => "`.`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Comma => "`,`",
            TokenKind::Plus => "`+`",
            TokenKind::Dash => "`-`",
            TokenKind::Slash => "`/`",
            TokenKind::Star => "`*`",
            TokenKind::Var => "`var`",
            TokenKind::Const => "`const`",
            TokenKind::Begin => "`begin`",
            TokenKind::End => "`end`",
            TokenKind::If => "`if`",
            TokenKind::Then => "`then`",
            TokenKind::Else => "`else`",
            TokenKind::While => "`while`",
            TokenKind::Do => "`do`",
            TokenKind::Odd => "`odd`",
            TokenKind::Read => "`read`",
            TokenKind::Write => "`write`",
            TokenKind::Skip => "`skip`",
            TokenKind::Call => "`call`",
            TokenKind::Procedure => "`procedure`",
        };

        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text; `None` only for [`TokenKind::EOF`].
    pub text: Option<String>,
    /// The literal's value; only set for [`TokenKind::Number`].
    pub value: Option<i16>,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{:?} {:?} {}:{}", self.kind, text, self.position.line, self.position.column),
            None => write!(f, "{:?} {}:{}", self.kind, self.position.line, self.position.column),
        }
    }
}

impl Token {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

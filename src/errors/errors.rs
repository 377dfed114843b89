use std::fmt::Display;

use thiserror::Error;

use crate::{
    ast::expressions::RelOp, lexer::tokens::TokenKind, scope_checker::symbol_table::IdKind, Position,
};

/// The phase of the front end an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lexical,
    Syntax,
    Declaration,
    Io,
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Lexical => write!(f, "Lexical"),
            ErrorCategory::Syntax => write!(f, "Syntax"),
            ErrorCategory::Declaration => write!(f, "Declaration"),
            ErrorCategory::Io => write!(f, "I/O"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. }
            | ErrorImpl::IdentifierTooLong { .. }
            | ErrorImpl::NumberOutOfRange { .. }
            | ErrorImpl::MalformedBecomes { .. }
            | ErrorImpl::UnterminatedComment => ErrorCategory::Lexical,
            ErrorImpl::UnexpectedToken { .. } | ErrorImpl::ExpectedRelationalOperator { .. } => {
                ErrorCategory::Syntax
            }
            ErrorImpl::DuplicateDeclaration { .. } | ErrorImpl::UndeclaredIdentifier { .. } => {
                ErrorCategory::Declaration
            }
            ErrorImpl::Io { .. } => ErrorCategory::Io,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::IdentifierTooLong { .. } => "IdentifierTooLong",
            ErrorImpl::NumberOutOfRange { .. } => "NumberOutOfRange",
            ErrorImpl::MalformedBecomes { .. } => "MalformedBecomes",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedRelationalOperator { .. } => "ExpectedRelationalOperator",
            ErrorImpl::DuplicateDeclaration { .. } => "DuplicateDeclaration",
            ErrorImpl::UndeclaredIdentifier { .. } => "UndeclaredIdentifier",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => ErrorTip::None,
            ErrorImpl::IdentifierTooLong { max, .. } => ErrorTip::Suggestion(format!(
                "identifiers may be at most {} characters long",
                max
            )),
            ErrorImpl::NumberOutOfRange { .. } => ErrorTip::Suggestion(format!(
                "numeric literals must lie between {} and {}",
                i16::MIN,
                i16::MAX
            )),
            ErrorImpl::MalformedBecomes { .. } => {
                ErrorTip::Suggestion(String::from("assignment is written `:=`"))
            }
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("end the comment with a newline"))
            }
            ErrorImpl::UnexpectedToken { expected, found, .. } => {
                if *found == TokenKind::EOF && expected.contains(&TokenKind::Dot) {
                    ErrorTip::Suggestion(String::from("did you forget the final `.`?"))
                } else if expected.contains(&TokenKind::Semicolon) {
                    ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
                } else {
                    ErrorTip::None
                }
            }
            ErrorImpl::ExpectedRelationalOperator { .. } => ErrorTip::Suggestion(String::from(
                "conditions compare two expressions or start with `odd`",
            )),
            ErrorImpl::DuplicateDeclaration { name, .. } => {
                ErrorTip::Suggestion(format!("`{}` may only be declared once", name))
            }
            ErrorImpl::UndeclaredIdentifier { name } => ErrorTip::Suggestion(format!(
                "declare `{}` with `const` or `var` before using it",
                name
            )),
            ErrorImpl::Io { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} error: {}",
            self.position,
            self.get_category(),
            self.internal_error
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Illegal character '{character}' ({code:03o})")]
    IllegalCharacter { character: char, code: u32 },
    #[error("Identifier starting \"{prefix}\" is too long")]
    IdentifierTooLong { prefix: String, max: usize },
    #[error("The value of {literal} is too large for a short")]
    NumberOutOfRange { literal: String },
    #[error("Expecting '=' after a colon, not {found}")]
    MalformedBecomes { found: String },
    #[error("File ended while reading a comment")]
    UnterminatedComment,
    #[error("expected {}, but found {}", one_of(.expected), describe_found(.found, .text))]
    UnexpectedToken {
        expected: Vec<TokenKind>,
        found: TokenKind,
        text: Option<String>,
    },
    #[error("expected a relational operator ({}), but found {}", one_of(&RelOp::ALL_TOKENS), describe_found(.found, .text))]
    ExpectedRelationalOperator { found: TokenKind, text: Option<String> },
    #[error("{kind} \"{name}\" is already declared as a {existing_kind}")]
    DuplicateDeclaration {
        name: String,
        kind: IdKind,
        existing_kind: IdKind,
    },
    #[error("identifier \"{name}\" is not declared")]
    UndeclaredIdentifier { name: String },
    #[error("could not read {path}: {message}")]
    Io { path: String, message: String },
}

fn one_of(expected: &[TokenKind]) -> String {
    let names: Vec<String> = expected.iter().map(|kind| kind.to_string()).collect();

    match names.as_slice() {
        [] => String::from("nothing"),
        [single] => single.clone(),
        [init @ .., last] => format!("one of {} or {}", init.join(", "), last),
    }
}

fn describe_found(found: &TokenKind, text: &Option<String>) -> String {
    match (found, text) {
        (TokenKind::Identifier, Some(text)) | (TokenKind::Number, Some(text)) => {
            format!("{} `{}`", found, text)
        }
        _ => found.to_string(),
    }
}

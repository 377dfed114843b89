//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-text tokens
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's source text (`None` for EOF)
/// * `$value` - The numeric value (`Some` only for numbers)
/// * `$position` - Where the token's first character is
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, Some("42".to_string()), Some(42), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $value:expr, $position:expr) => {
        Token {
            kind: $kind,
            text: $text,
            value: $value,
            position: $position,
        }
    };
}

/// Creates a default lexer handler for operators and punctuation.
///
/// Generates a handler function that records the current position, advances
/// the lexer over the token's text and returns the token.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal string value
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            let position = lexer.current_position();
            lexer.advance_over($value);
            Ok(Some(MK_TOKEN!(
                $kind,
                Some(String::from($value)),
                None,
                position
            )))
        }
    };
}

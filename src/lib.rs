#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod scope_checker;

/// A location in a source file. Lines and columns both start at 1; a column
/// of 0 marks the position just before the first character of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub file: Rc<String>,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(file: Rc<String>, line: u32, column: u32) -> Self {
        Position { file, line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.trim_end_matches('\r'))
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "var x;\n  x := 1\n.";
        assert_eq!(super::get_line_at_position(source, 1), Some("var x;"));
        assert_eq!(super::get_line_at_position(source, 2), Some("  x := 1"));
        assert_eq!(super::get_line_at_position(source, 3), Some("."));
        assert_eq!(super::get_line_at_position(source, 4), None);
        assert_eq!(super::get_line_at_position(source, 0), None);
    }

    #[test]
    fn test_render_error_points_at_column() {
        let source = "var x;\n  x := @\n.";
        let error = Error::new(
            ErrorImpl::IllegalCharacter { character: '@', code: '@' as u32 },
            Position::new(Rc::new(String::from("bad.pl0")), 2, 8),
        );

        let rendered = super::render_error(&error, Some(source));
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: bad.pl0:2:8: Lexical error: Illegal character '@' (100)");
        assert_eq!(lines[1], "-> bad.pl0");
        assert_eq!(lines[3], "2 | x := @");
        assert_eq!(lines[4], "  | -----^");
    }

    #[test]
    fn test_render_error_without_source_line() {
        let error = Error::new(
            ErrorImpl::UndeclaredIdentifier { name: String::from("y") },
            Position::new(Rc::new(String::from("t.pl0")), 9, 1),
        );

        let rendered = super::render_error(&error, Some("skip."));
        assert_eq!(rendered.lines().count(), 2);
    }
}

/// Formats a diagnostic for `error`, including an excerpt of the offending
/// line when the source text is available.
pub fn render_error(error: &Error, source: Option<&str>) -> String {
    /*
        Error: prog.pl0:2:8: Syntax error: message (tip)
        -> prog.pl0
          |
        2 | x := #
          | -----^
    */

    let position = error.get_position();
    let mut output = String::new();

    if let ErrorTip::None = error.get_tip() {
        output.push_str(&format!("Error: {}\n", error));
    } else {
        output.push_str(&format!("Error: {} ({})\n", error, error.get_tip()));
    }
    output.push_str(&format!("-> {}\n", position.file));

    let line_text = match source.and_then(|source| get_line_at_position(source, position.line)) {
        Some(line_text) => line_text,
        None => return output,
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let line_pos = position.column.saturating_sub(1) as usize;
    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    output
}

/// Writes the diagnostic for `error` to standard error.
pub fn display_error(error: &Error, source: Option<&str>) {
    eprint!("{}", render_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

use std::{fs, path::Path, rc::Rc};

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, MAX_IDENT_LENGTH, RESERVED_LOOKUP};

/// Returns `Ok(None)` for text that produces no token (whitespace, comments).
pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<Option<Token>, Error>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler
}

lazy_static! {
    // Tried in order; longer operators come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \t\n\r\x0B\x0C]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^#[^\n]*").unwrap(), handler: comment_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z][a-zA-Z0-9]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^:=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Becomes, ":=") },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: colon_handler },
        RegexPattern { regex: Regex::new("^<>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "<>") },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "=") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
    ];
}

/// A lazy tokenizer over one source text.
///
/// Tokens are produced one at a time by [`Lexer::next_token`]. The lexer
/// tracks the current line and column so every token records where its
/// first character is.
pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
    done: bool,
    failed: bool,
}

/// File name recorded in positions when source text has no file behind it.
pub const ANONYMOUS_FILE: &str = "<input>";

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = Rc::new(file.unwrap_or_else(|| String::from(ANONYMOUS_FILE)));

        Lexer {
            source,
            pos: 0,
            line: 1,
            column: 0,
            file: file_name,
            done: false,
            failed: false,
        }
    }

    /// Reads the whole file at `path` and prepares to tokenize it.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Lexer, Error> {
        let path = path.as_ref();
        let file_name = path.to_string_lossy().to_string();

        match fs::read_to_string(path) {
            Ok(source) => {
                debug!("opened {} ({} bytes)", file_name, source.len());
                Ok(Lexer::new(source, Some(file_name)))
            }
            Err(error) => Err(Error::new(
                ErrorImpl::Io { path: file_name.clone(), message: error.to_string() },
                Position::new(Rc::new(file_name), 0, 0),
            )),
        }
    }

    pub fn close(self) {
        debug!("closing lexer for {} at {}:{}", self.file, self.line, self.column);
    }

    /// Whether the end-of-file token has been produced.
    pub fn done(&self) -> bool {
        self.done
    }

    /// Position of the next unread character.
    pub fn current_position(&self) -> Position {
        Position::new(Rc::clone(&self.file), self.line, self.column + 1)
    }

    /// Moves past `text`, which must be the next text in the source.
    pub fn advance_over(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }

        self.pos += text.len();
    }

    pub fn at(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Produces the next token. Once the source is exhausted every call
    /// returns an EOF token.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            if self.at_eof() {
                if !self.done {
                    debug!("reached end of {} at {}:{}", self.file, self.line, self.column);
                }
                self.done = true;
                return Ok(MK_TOKEN!(TokenKind::EOF, None, None, self.current_position()));
            }

            let pattern = PATTERNS.iter().find(|pattern| pattern.regex.is_match(self.remainder()));

            match pattern {
                Some(pattern) => {
                    if let Some(token) = (pattern.handler)(self, &pattern.regex)? {
                        trace!("token {}", token);
                        return Ok(token);
                    }
                }
                None => {
                    let character = self.at().unwrap_or('\0');
                    return Err(Error::new(
                        ErrorImpl::IllegalCharacter { character, code: character as u32 },
                        self.current_position(),
                    ));
                }
            }
        }
    }

    fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|found| found.as_str().to_string())
            .unwrap_or_default()
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    /// Yields every token up to and including EOF, or stops after the
    /// first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.failed {
            return None;
        }

        let result = self.next_token();
        if result.is_err() {
            self.failed = true;
        }

        Some(result)
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let matched = lexer.matched(regex);
    lexer.advance_over(&matched);
    Ok(None)
}

fn comment_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let matched = lexer.matched(regex);
    lexer.advance_over(&matched);

    if lexer.at_eof() {
        return Err(Error::new(ErrorImpl::UnterminatedComment, lexer.current_position()));
    }

    Ok(None)
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let value = lexer.matched(regex);
    let position = lexer.current_position();

    if value.len() > MAX_IDENT_LENGTH {
        return Err(Error::new(
            ErrorImpl::IdentifierTooLong { prefix: value.chars().take(20).collect(), max: MAX_IDENT_LENGTH },
            position,
        ));
    }

    lexer.advance_over(&value);

    let kind = RESERVED_LOOKUP.get(value.as_str()).copied().unwrap_or(TokenKind::Identifier);
    Ok(Some(MK_TOKEN!(kind, Some(value), None, position)))
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let matched = lexer.matched(regex);
    let position = lexer.current_position();

    let value = match matched.parse::<i16>() {
        Ok(value) => value,
        Err(_) => {
            return Err(Error::new(ErrorImpl::NumberOutOfRange { literal: matched }, position));
        }
    };

    lexer.advance_over(&matched);
    Ok(Some(MK_TOKEN!(TokenKind::Number, Some(matched), Some(value), position)))
}

// Only reached when the colon is not followed by `=`.
fn colon_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<Option<Token>, Error> {
    lexer.advance_over(":");

    let found = match lexer.at() {
        Some(c) => format!("'{}'", c.escape_default()),
        None => String::from("end of file"),
    };

    Err(Error::new(ErrorImpl::MalformedBecomes { found }, lexer.current_position()))
}

/// Tokenizes a whole source text. The last token is always EOF.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    Lexer::new(source, file).collect()
}

//! Error types and error handling for the front end.
//!
//! Every phase (lexing, parsing, scope checking) reports failures through the
//! same positioned [`errors::Error`] type:
//!
//! - Error structures with source position information
//! - Specific error variants grouped into lexical, syntax and declaration errors
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;

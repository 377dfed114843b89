//! Declaration checking over a parsed program.
//!
//! All names live in one global scope: every constant and variable must be
//! declared exactly once, and every name a statement or expression uses must
//! have been declared. The first violation found is returned.

pub mod scope_checker;
pub mod symbol_table;

#[cfg(test)]
mod tests;

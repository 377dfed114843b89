/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` trait and the `Program` root
/// - declarations: Constant and variable declarations
/// - expressions: Expressions, conditions and their operators
/// - list: The ordered `AstList` sequence type
/// - statements: Definitions for the statement kinds
///
/// Every node implements `Display`, which writes it back out as source text.
pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod list;
pub mod statements;

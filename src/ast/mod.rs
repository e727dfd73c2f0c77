/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: the Program root node
/// - expressions: expression node variants
/// - statements: statement node variants
pub mod ast;
pub mod expressions;
pub mod statements;

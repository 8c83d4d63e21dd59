/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - expressions: The expression tree and its rendering
/// - operators: Operator tags for unary and binary operations
pub mod expressions;
pub mod operators;

/// AST (Abstract Syntax Tree) module
/// Contains the tree produced by the parser
///
/// Submodules:
/// - ast: Expression nodes, operators and the visitor trait
pub mod ast;

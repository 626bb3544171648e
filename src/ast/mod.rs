/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Read-only traversal traits shared by every consumer of the tree
/// - expressions: The closed set of expression kinds
/// - declarations: Prototypes, function definitions and top-level items
pub mod ast;
pub mod declarations;
pub mod expressions;

#[cfg(test)]
mod tests;

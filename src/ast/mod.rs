//! Abstract Syntax Tree (AST) definitions.
//!
//! This module contains the data structures the parser produces:
//!
//! - `ast` - Node categories as closed sum types (`Decl`, `Stat`, `Expr`) and the parsed `File`
//! - `expressions` - Literal, unary, binary, cast, call and access expressions
//! - `statements` - Declarations, statements and blocks
//! - `types` - Primitive, struct and pointer types
//! - `symbols` - The variable, type and function tables that reference nodes point into
//! - `operators` - Unary and binary operator kinds
//! - `printer` - Canonical source rendering of a tree

pub mod ast;
pub mod expressions;
pub mod operators;
pub mod printer;
pub mod statements;
pub mod symbols;
pub mod types;

#[cfg(test)]
mod tests;

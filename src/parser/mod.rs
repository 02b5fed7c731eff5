//! Parser module for building the syntax tree.
//!
//! Parsing and name resolution happen in one pass. Every declaration is
//! registered in the scope table as soon as it is parsed, and every type
//! name, call and variable reference is resolved at the point it appears,
//! so a name has to be declared before it is used.
//!
//! Grammar functions return `Result<Option<T>, Error>`: `Ok(None)` means the
//! production did not match and nothing was consumed, while `Err` aborts the
//! whole parse.
//!
//! Binary expressions are built by precedence climbing over the table in
//! [`lookups`].

pub mod expr;
pub mod literal;
pub mod lookups;
pub mod parser;
pub mod scope;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;

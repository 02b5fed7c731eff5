//! Semantic analysis over a parsed file.
//!
//! The parser resolves names as it goes. Checks that need a finished
//! declaration or the shape of the whole tree run here afterwards:
//!
//! - Variables and struct members declared with neither a type nor an initializer
//! - Function parameters without a type
//! - `return` outside of a function body

pub mod analyzer;

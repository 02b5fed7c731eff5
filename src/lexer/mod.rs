//! Lexer module for tokenizing source code.
//!
//! The parser only depends on the [`tokens::Token`] contract: kind, raw text
//! and a source position. This module also carries a reference tokenizer so
//! source text can be fed to the parser from the command line and from tests.
//!
//! Keywords are plain identifiers, told apart by their text.

pub mod lexer;
pub mod tokens;

use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::{Position, Span};

pub const KEYWORD_FUNC: &str = "func";
pub const KEYWORD_STRUCT: &str = "struct";
pub const KEYWORD_RETURN: &str = "return";
pub const KEYWORD_MUT: &str = "mut";

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert(KEYWORD_FUNC);
        set.insert(KEYWORD_STRUCT);
        set.insert(KEYWORD_RETURN);
        set.insert(KEYWORD_MUT);
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    String,
    Rune,
    Operator,
    Separator,
    Comment,
    DocComment,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A token as handed over by the lexer. The parser never mutates tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw source text, quotes and prefixes included
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Token {
    pub fn get_position(&self) -> &Position {
        &self.span.start
    }

    pub fn is_keyword(&self) -> bool {
        self.kind == TokenKind::Identifier && RESERVED_LOOKUP.contains(self.value.as_str())
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.kind, TokenKind::Comment | TokenKind::DocComment)
    }

    pub fn debug(&self) {
        log::trace!("{} `{}` at {}", self.kind, self.value, self.span.start);
    }
}

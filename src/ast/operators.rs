use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOpType {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Greater,
    Less,
    GreaterEq,
    LessEq,
    Eq,
    NotEq,
    BitAnd,
    BitOr,
    BitXor,
    BitLeft,
    BitRight,
    LogAnd,
    LogOr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnOpType {
    LogNot,
    BitNot,
    Negative,
    Deref,
    Address,
}

lazy_static! {
    pub static ref BINOP_LOOKUP: HashMap<&'static str, BinOpType> = {
        let mut map = HashMap::new();
        map.insert("+", BinOpType::Add);
        map.insert("-", BinOpType::Sub);
        map.insert("*", BinOpType::Mul);
        map.insert("/", BinOpType::Div);
        map.insert("%", BinOpType::Mod);
        map.insert(">", BinOpType::Greater);
        map.insert("<", BinOpType::Less);
        map.insert(">=", BinOpType::GreaterEq);
        map.insert("<=", BinOpType::LessEq);
        map.insert("==", BinOpType::Eq);
        map.insert("!=", BinOpType::NotEq);
        map.insert("&", BinOpType::BitAnd);
        map.insert("|", BinOpType::BitOr);
        map.insert("^", BinOpType::BitXor);
        map.insert("<<", BinOpType::BitLeft);
        map.insert(">>", BinOpType::BitRight);
        map.insert("&&", BinOpType::LogAnd);
        map.insert("||", BinOpType::LogOr);
        map
    };
    pub static ref UNOP_LOOKUP: HashMap<&'static str, UnOpType> = {
        let mut map = HashMap::new();
        map.insert("!", UnOpType::LogNot);
        map.insert("~", UnOpType::BitNot);
        map.insert("-", UnOpType::Negative);
        map.insert("^", UnOpType::Deref);
        map.insert("&", UnOpType::Address);
        map
    };
}

impl BinOpType {
    pub fn from_symbol(symbol: &str) -> Option<BinOpType> {
        BINOP_LOOKUP.get(symbol).copied()
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinOpType::Add => "+",
            BinOpType::Sub => "-",
            BinOpType::Mul => "*",
            BinOpType::Div => "/",
            BinOpType::Mod => "%",
            BinOpType::Greater => ">",
            BinOpType::Less => "<",
            BinOpType::GreaterEq => ">=",
            BinOpType::LessEq => "<=",
            BinOpType::Eq => "==",
            BinOpType::NotEq => "!=",
            BinOpType::BitAnd => "&",
            BinOpType::BitOr => "|",
            BinOpType::BitXor => "^",
            BinOpType::BitLeft => "<<",
            BinOpType::BitRight => ">>",
            BinOpType::LogAnd => "&&",
            BinOpType::LogOr => "||",
        }
    }
}

impl UnOpType {
    pub fn from_symbol(symbol: &str) -> Option<UnOpType> {
        UNOP_LOOKUP.get(symbol).copied()
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnOpType::LogNot => "!",
            UnOpType::BitNot => "~",
            UnOpType::Negative => "-",
            UnOpType::Deref => "^",
            UnOpType::Address => "&",
        }
    }
}

impl Display for BinOpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for UnOpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

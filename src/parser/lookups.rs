use std::collections::HashMap;

use crate::ast::operators::BinOpType;

use super::parser::Parser;

/// Binary operator precedence. Higher levels bind tighter.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
}

impl BindingPower {
    pub fn level(self) -> u8 {
        self as u8
    }
}

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical
    parser.binary(BinOpType::LogOr, BindingPower::LogicalOr);
    parser.binary(BinOpType::LogAnd, BindingPower::LogicalAnd);

    // Bitwise
    parser.binary(BinOpType::BitOr, BindingPower::BitwiseOr);
    parser.binary(BinOpType::BitXor, BindingPower::BitwiseXor);
    parser.binary(BinOpType::BitAnd, BindingPower::BitwiseAnd);

    // Relational
    parser.binary(BinOpType::Eq, BindingPower::Equality);
    parser.binary(BinOpType::NotEq, BindingPower::Equality);
    parser.binary(BinOpType::Less, BindingPower::Relational);
    parser.binary(BinOpType::LessEq, BindingPower::Relational);
    parser.binary(BinOpType::Greater, BindingPower::Relational);
    parser.binary(BinOpType::GreaterEq, BindingPower::Relational);

    // Shift, additive and multiplicative
    parser.binary(BinOpType::BitLeft, BindingPower::Shift);
    parser.binary(BinOpType::BitRight, BindingPower::Shift);
    parser.binary(BinOpType::Add, BindingPower::Additive);
    parser.binary(BinOpType::Sub, BindingPower::Additive);
    parser.binary(BinOpType::Mul, BindingPower::Multiplicative);
    parser.binary(BinOpType::Div, BindingPower::Multiplicative);
    parser.binary(BinOpType::Mod, BindingPower::Multiplicative);
}

// Lookup table inside parser struct, so it's easier
pub type BPLookup = HashMap<BinOpType, BindingPower>;

use crate::Span;

use super::{
    ast::Expr,
    operators::{BinOpType, UnOpType},
    symbols::{FunctionId, VariableId},
    types::Type,
};

// LITERALS

/// Integer Literal
/// The base the literal was written in is not kept.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub value: u64,
    pub span: Span,
}

/// Floating Literal
/// Represents a decimal literal with a point or an `f`/`d` suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingLiteral {
    pub value: f64,
    pub span: Span,
}

/// String Literal
/// Holds the unescaped value, without quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
    pub span: Span,
}

/// Rune Literal
#[derive(Debug, Clone, PartialEq)]
pub struct RuneLiteral {
    pub value: char,
    pub span: Span,
}

// COMPLEX

/// Unary Expression
/// The operand extends to the end of the expression, so `-a + b` negates `a + b`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub op: UnOpType,
    pub expr: Box<Expr>,
    pub span: Span,
}

/// Binary Expression
/// Built by the precedence climber, so the nesting already encodes precedence and associativity.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub lhand: Box<Expr>,
    pub op: BinOpType,
    pub rhand: Box<Expr>,
    pub span: Span,
}

/// Cast Expression
/// `Type(expr)`, where `Type` names a type visible at the cast.
#[derive(Debug, Clone, PartialEq)]
pub struct CastExpr {
    pub ty: Type,
    pub expr: Box<Expr>,
    pub span: Span,
}

/// Call Expression
/// The callee is resolved when the call is parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub function: FunctionId,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

/// Access Expression
/// A variable reference, optionally followed by a chain of struct member accesses.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessExpr {
    pub variable: VariableId,
    /// Each `.member` step, resolved against the struct type of the previous step
    pub members: Vec<VariableId>,
    pub span: Span,
}

impl AccessExpr {
    /// The variable the whole chain designates.
    pub fn target(&self) -> VariableId {
        self.members.last().copied().unwrap_or(self.variable)
    }
}

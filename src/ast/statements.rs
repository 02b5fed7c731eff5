use crate::Span;

use super::{
    ast::{Expr, Node},
    expressions::CallExpr,
    symbols::{FunctionId, TypeId, VariableId},
};

// DECLARATIONS

/// Variable Declaration
/// Also used for function parameters and struct members.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    pub variable: VariableId,
    pub assignment: Option<Expr>,
    pub span: Span,
}

/// Struct Declaration
/// The struct itself lives in the type table.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub struct_type: TypeId,
    pub span: Span,
}

/// Function Declaration
/// Signature and body live in the function table.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub function: FunctionId,
    pub span: Span,
}

// STATEMENTS

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStat {
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallStat {
    pub call: CallExpr,
    pub span: Span,
}

/// A nested `{ ... }` block used as a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStat {
    pub block: Block,
    pub span: Span,
}

/// Block
/// An ordered list of declarations and statements. Its scope only exists while it is parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub nodes: Vec<Node>,
    pub span: Span,
}

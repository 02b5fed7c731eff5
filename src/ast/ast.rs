use std::rc::Rc;

use crate::Span;

use super::{
    expressions::{
        AccessExpr, BinaryExpr, CallExpr, CastExpr, FloatingLiteral, IntegerLiteral, RuneLiteral,
        StringLiteral, UnaryExpr,
    },
    printer::Printer,
    statements::{BlockStat, CallStat, FunctionDecl, ReturnStat, StructDecl, VariableDecl},
    symbols::Symbols,
};

/// Declarations register a name in the scope they appear in.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Variable(VariableDecl),
    Struct(StructDecl),
    Function(FunctionDecl),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stat {
    Return(ReturnStat),
    Call(CallStat),
    Block(BlockStat),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Integer(IntegerLiteral),
    Floating(FloatingLiteral),
    String(StringLiteral),
    Rune(RuneLiteral),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Cast(CastExpr),
    Call(CallExpr),
    Access(AccessExpr),
}

/// Anything that can appear in a block or at the top level of a file.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Decl(Decl),
    Stat(Stat),
}

impl Decl {
    pub fn get_span(&self) -> &Span {
        match self {
            Decl::Variable(decl) => &decl.span,
            Decl::Struct(decl) => &decl.span,
            Decl::Function(decl) => &decl.span,
        }
    }
}

impl Stat {
    pub fn get_span(&self) -> &Span {
        match self {
            Stat::Return(stat) => &stat.span,
            Stat::Call(stat) => &stat.span,
            Stat::Block(stat) => &stat.span,
        }
    }
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Integer(expr) => &expr.span,
            Expr::Floating(expr) => &expr.span,
            Expr::String(expr) => &expr.span,
            Expr::Rune(expr) => &expr.span,
            Expr::Unary(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Cast(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::Access(expr) => &expr.span,
        }
    }
}

impl Node {
    pub fn get_span(&self) -> &Span {
        match self {
            Node::Decl(decl) => decl.get_span(),
            Node::Stat(stat) => stat.get_span(),
        }
    }
}

/// A parsed source file: its top-level nodes in source order, plus the
/// variable, type and function tables every reference in the tree points into.
#[derive(Debug, Clone)]
pub struct File {
    pub name: Rc<String>,
    pub nodes: Vec<Node>,
    pub symbols: Symbols,
}

impl File {
    pub fn new(name: Rc<String>, symbols: Symbols) -> Self {
        File {
            name,
            nodes: Vec::new(),
            symbols,
        }
    }

    /// Renders one node in canonical source form.
    pub fn render_node(&self, node: &Node) -> String {
        Printer::new(&self.symbols).node(node)
    }

    /// Renders the whole file in canonical source form, one top-level node per line.
    pub fn render(&self) -> String {
        let printer = Printer::new(&self.symbols);
        let mut result = String::new();
        for node in &self.nodes {
            result.push_str(&printer.node(node));
            result.push('\n');
        }
        result
    }
}

//! Canonical source printer.
//!
//! Output parses back into the same tree. Binary expressions are printed
//! without parentheses: the parser only ever builds trees whose nesting
//! agrees with operator precedence, so the flat form is unambiguous.

use super::{
    ast::{Decl, Expr, Node, Stat},
    expressions::CallExpr,
    operators::UnOpType,
    statements::{Block, VariableDecl},
    symbols::Symbols,
    types::{Type, TypeDef},
};

const INDENT: &str = "    ";

pub struct Printer<'a> {
    symbols: &'a Symbols,
}

impl<'a> Printer<'a> {
    pub fn new(symbols: &'a Symbols) -> Self {
        Printer { symbols }
    }

    pub fn node(&self, node: &Node) -> String {
        self.node_at(node, 0)
    }

    fn node_at(&self, node: &Node, indent: usize) -> String {
        match node {
            Node::Decl(decl) => self.decl(decl, indent),
            Node::Stat(stat) => self.stat(stat, indent),
        }
    }

    fn decl(&self, decl: &Decl, indent: usize) -> String {
        match decl {
            Decl::Variable(decl) => format!("{};", self.variable_decl(decl)),
            Decl::Struct(decl) => {
                let TypeDef::Struct(struct_type) = self.symbols.type_def(decl.struct_type) else {
                    return self.symbols.type_def(decl.struct_type).name().to_string();
                };

                let mut result = format!("struct {}", struct_type.name);
                if !struct_type.attrs.is_empty() {
                    let attrs: Vec<String> = struct_type
                        .attrs
                        .iter()
                        .map(|attr| match &attr.value {
                            Some(value) => format!("{} = \"{}\"", attr.key, escape(value, '"')),
                            None => attr.key.clone(),
                        })
                        .collect();
                    result.push_str(&format!(" [{}]", attrs.join(", ")));
                }

                if !struct_type.has_body {
                    result.push(';');
                } else if struct_type.members.is_empty() {
                    result.push_str(" {}");
                } else {
                    let members: Vec<String> = struct_type
                        .members
                        .iter()
                        .map(|member| {
                            format!("{}{}", INDENT.repeat(indent + 1), self.variable_decl(member))
                        })
                        .collect();
                    result.push_str(&format!(
                        " {{\n{}\n{}}}",
                        members.join(",\n"),
                        INDENT.repeat(indent)
                    ));
                }

                result
            }
            Decl::Function(decl) => {
                let function = self.symbols.function(decl.function);
                let parameters: Vec<String> = function
                    .parameters
                    .iter()
                    .map(|parameter| self.variable_decl(parameter))
                    .collect();

                let mut result = format!("func {}({})", function.name, parameters.join(", "));
                if let Some(return_type) = &function.return_type {
                    let mutable = if function.mutable { "mut " } else { "" };
                    result.push_str(&format!(": {}{}", mutable, self.ty(return_type)));
                }

                match &function.body {
                    Some(body) => {
                        result.push(' ');
                        result.push_str(&self.block(body, indent));
                    }
                    None => result.push_str(" {}"),
                }

                result
            }
        }
    }

    fn stat(&self, stat: &Stat, indent: usize) -> String {
        match stat {
            Stat::Return(stat) => format!("return {};", self.expr(&stat.value)),
            Stat::Call(stat) => format!("{};", self.call(&stat.call)),
            Stat::Block(stat) => self.block(&stat.block, indent),
        }
    }

    pub fn block(&self, block: &Block, indent: usize) -> String {
        if block.nodes.is_empty() {
            return String::from("{}");
        }

        let mut result = String::from("{\n");
        for node in &block.nodes {
            result.push_str(&INDENT.repeat(indent + 1));
            result.push_str(&self.node_at(node, indent + 1));
            result.push('\n');
        }
        result.push_str(&INDENT.repeat(indent));
        result.push('}');
        result
    }

    /// A declaration without its trailing semicolon, as used for parameters and members.
    pub fn variable_decl(&self, decl: &VariableDecl) -> String {
        let variable = self.symbols.variable(decl.variable);

        let mut result = String::new();
        if variable.mutable {
            result.push_str("mut ");
        }
        result.push_str(&variable.name);
        result.push(':');

        if let Some(ty) = &variable.ty {
            result.push(' ');
            result.push_str(&self.ty(ty));
        }

        if let Some(assignment) = &decl.assignment {
            result.push_str(" = ");
            result.push_str(&self.expr(assignment));
        }

        result
    }

    pub fn ty(&self, ty: &Type) -> String {
        self.symbols.type_name(ty)
    }

    pub fn expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Integer(literal) => literal.value.to_string(),
            Expr::Floating(literal) => float_text(literal.value),
            Expr::String(literal) => format!("\"{}\"", escape(&literal.value, '"')),
            Expr::Rune(literal) => format!("'{}'", escape(&literal.value.to_string(), '\'')),
            Expr::Unary(unary) => {
                let operand = self.expr(&unary.expr);
                // `& &x` must not lex as `&&`
                if unary.op == UnOpType::Address && operand.starts_with('&') {
                    format!("{} {}", unary.op, operand)
                } else {
                    format!("{}{}", unary.op, operand)
                }
            }
            Expr::Binary(binary) => format!(
                "{} {} {}",
                self.expr(&binary.lhand),
                binary.op,
                self.expr(&binary.rhand)
            ),
            Expr::Cast(cast) => format!("{}({})", self.ty(&cast.ty), self.expr(&cast.expr)),
            Expr::Call(call) => self.call(call),
            Expr::Access(access) => {
                let mut result = self.symbols.variable(access.variable).name.clone();
                for member in &access.members {
                    result.push('.');
                    result.push_str(&self.symbols.variable(*member).name);
                }
                result
            }
        }
    }
}

impl Printer<'_> {
    fn call(&self, call: &CallExpr) -> String {
        let arguments: Vec<String> = call.arguments.iter().map(|argument| self.expr(argument)).collect();
        format!("{}({})", self.symbols.function(call.function).name, arguments.join(", "))
    }
}

/// Float text that will lex as a floating literal again.
fn float_text(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') || !value.is_finite() {
        text
    } else {
        format!("{}.0", text)
    }
}

/// Reverses unescaping for a literal delimited by `quote`.
pub fn escape(text: &str, quote: char) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            '\r' => result.push_str("\\r"),
            '\0' => result.push_str("\\0"),
            '\x07' => result.push_str("\\a"),
            '\x08' => result.push_str("\\b"),
            '\x0b' => result.push_str("\\v"),
            '\x0c' => result.push_str("\\f"),
            ch if ch == quote => {
                result.push('\\');
                result.push(ch);
            }
            ch if (ch as u32) < 0x20 || ch as u32 == 0x7f => {
                result.push_str(&format!("\\x{:02x}", ch as u32));
            }
            ch => result.push(ch),
        }
    }
    result
}

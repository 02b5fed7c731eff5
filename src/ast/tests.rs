//! Unit tests for the AST module.
//!
//! Covers the canonical printer, operator tables and the symbol tables.

use crate::{
    ast::{
        ast::File,
        operators::{BinOpType, UnOpType},
        printer::escape,
        symbols::{Symbols, Variable},
        types::{PrimitiveType, StructType, Type, TypeDef},
    },
    lexer::lexer::tokenize,
    parser::parser::parse,
};

fn parse_source(source: &str) -> File {
    let tokens = tokenize(source.to_string(), Some("test.ark".to_string())).unwrap();
    parse(tokens, false).unwrap()
}

#[test]
fn test_render_declarations() {
    let file = parse_source(
        "mut x:int=1;y:=x*2;struct P[packed,name=\"p\\n\"]{a:int b:^P}struct Q{}struct R;\
         func f(a:int,b:^u8):mut ^u8{return b;}",
    );

    assert_eq!(
        file.render(),
        "mut x: int = 1;\n\
         y: = x * 2;\n\
         struct P [packed, name = \"p\\n\"] {\n    a: int,\n    b: ^P\n}\n\
         struct Q {}\n\
         struct R;\n\
         func f(a: int, b: ^u8): mut ^u8 {\n    return b;\n}\n"
    );
}

#[test]
fn test_render_nested_blocks() {
    let file = parse_source("func g() {} func f() { g(); { x: int = 1; } {} }");

    assert_eq!(
        file.render(),
        "func g() {}\n\
         func f() {\n    g();\n    {\n        x: int = 1;\n    }\n    {}\n}\n"
    );
}

#[test]
fn test_render_struct_in_function() {
    let file = parse_source("func f() { struct P { a: int } }");

    assert_eq!(file.render(), "func f() {\n    struct P {\n        a: int\n    }\n}\n");
}

#[test]
fn test_render_expressions() {
    let file = parse_source(
        "func add(a: int, b: int): int { return a + b; } \
         p: ^int; a: int = -1 + 2; b: int = & &p; c: f64 = f64(add(1, 2)); \
         d: f64 = 3f; e: rune = '\\''; s: str = \"tab\\there\";",
    );
    let rendered: Vec<String> = file.nodes.iter().map(|node| file.render_node(node)).collect();

    assert_eq!(rendered[2], "a: int = -1 + 2;");
    assert_eq!(rendered[3], "b: int = & &p;");
    assert_eq!(rendered[4], "c: f64 = f64(add(1, 2));");
    assert_eq!(rendered[5], "d: f64 = 3.0;");
    assert_eq!(rendered[6], "e: rune = '\\'';");
    assert_eq!(rendered[7], "s: str = \"tab\\there\";");
}

#[test]
fn test_escape() {
    assert_eq!(escape("plain", '"'), "plain");
    assert_eq!(escape("a\"b'c", '"'), "a\\\"b'c");
    assert_eq!(escape("a\"b'c", '\''), "a\"b\\'c");
    assert_eq!(escape("\\\n\t\r\0", '"'), "\\\\\\n\\t\\r\\0");
    assert_eq!(escape("\x07\x08\x0b\x0c", '"'), "\\a\\b\\v\\f");
    assert_eq!(escape("\x01\x7f", '"'), "\\x01\\x7f");
    assert_eq!(escape("é", '"'), "é");
}

#[test]
fn test_operator_symbols() {
    for symbol in ["+", "-", "*", "/", "%", "<", ">", "<=", ">=", "==", "!=", "&", "|", "^", "<<", ">>", "&&", "||"] {
        let op = BinOpType::from_symbol(symbol).unwrap();
        assert_eq!(op.symbol(), symbol);
    }
    for symbol in ["!", "~", "-", "^", "&"] {
        let op = UnOpType::from_symbol(symbol).unwrap();
        assert_eq!(op.to_string(), symbol);
    }

    assert!(BinOpType::from_symbol("=").is_none());
    assert!(BinOpType::from_symbol(":").is_none());
    assert!(UnOpType::from_symbol("+").is_none());
}

#[test]
fn test_primitive_names() {
    for primitive in PrimitiveType::ALL {
        assert_eq!(PrimitiveType::from_name(primitive.name()), Some(primitive));
    }
    assert_eq!(PrimitiveType::from_name("Point"), None);
}

#[test]
fn test_symbols() {
    let mut symbols = Symbols::new();
    let int = symbols.add_type(TypeDef::Primitive(PrimitiveType::Int));
    let point = symbols.add_type(TypeDef::Struct(StructType::new(String::from("Point"))));
    let x = symbols.add_variable(Variable {
        name: String::from("x"),
        ty: Some(Type::Named(int)),
        mutable: false,
    });

    assert!(symbols.struct_type(int).is_none());
    assert!(symbols.struct_member(point, "x").is_none());

    symbols.struct_type_mut(point).unwrap().members.push(crate::ast::statements::VariableDecl {
        variable: x,
        assignment: None,
        span: crate::Span::null(),
    });
    assert_eq!(symbols.struct_member(point, "x"), Some(x));
    assert_eq!(symbols.type_name(&Type::pointer_to(Type::pointer_to(Type::Named(point)))), "^^Point");
    assert_eq!(symbols.type_count(), 2);
    assert_eq!(symbols.variable_count(), 1);
    assert_eq!(symbols.function_count(), 0);
}

//! Unit tests for the parser module.
//!
//! This module contains tests for:
//! - The token cursor
//! - The scope table
//! - Literal reading
//! - Expression precedence
//! - Declarations, statements and their scoping rules

use std::rc::Rc;

use proptest::prelude::*;
use rstest::rstest;

use crate::{
    ast::{
        ast::{Decl, Expr, File, Node, Stat},
        printer::Printer,
        symbols::{Symbols, VariableId},
        types::{PrimitiveType, Type, TypeDef},
    },
    errors::errors::{Error, ErrorImpl, SymbolKind, END_OF_FILE},
    lexer::{lexer::tokenize, tokens::TokenKind},
};

use super::{
    literal::{read_floating, read_numeric, read_rune, read_string, unescape, NumericValue},
    parser::{parse, Parser},
    scope::ScopeTable,
    stmt::define_struct,
};

fn parse_source(source: &str) -> Result<File, Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let tokens = tokenize(source.to_string(), Some("test.ark".to_string()))?;
    parse(tokens, false)
}

fn error_name(source: &str) -> String {
    match parse_source(source) {
        Ok(_) => String::from("no error"),
        Err(error) => error.get_error_name().to_string(),
    }
}

/// Fully parenthesized rendering, so tests can assert on tree shape.
fn shape(file: &File, expr: &Expr) -> String {
    match expr {
        Expr::Integer(literal) => literal.value.to_string(),
        Expr::Floating(literal) => literal.value.to_string(),
        Expr::String(literal) => format!("{:?}", literal.value),
        Expr::Rune(literal) => format!("{:?}", literal.value),
        Expr::Unary(unary) => format!("{}({})", unary.op, shape(file, &unary.expr)),
        Expr::Binary(binary) => format!(
            "({} {} {})",
            shape(file, &binary.lhand),
            binary.op,
            shape(file, &binary.rhand)
        ),
        Expr::Cast(cast) => format!("cast<{}>({})", file.symbols.type_name(&cast.ty), shape(file, &cast.expr)),
        Expr::Call(call) => format!("call<{}>", file.symbols.function(call.function).name),
        Expr::Access(_) => Printer::new(&file.symbols).expr(expr),
    }
}

/// Initializer of the last top-level variable declaration.
fn last_initializer(file: &File) -> &Expr {
    file.nodes
        .iter()
        .rev()
        .find_map(|node| match node {
            Node::Decl(Decl::Variable(decl)) => decl.assignment.as_ref(),
            _ => None,
        })
        .expect("no initialized variable")
}

fn tokens(source: &str) -> Vec<crate::lexer::tokens::Token> {
    tokenize(source.to_string(), Some("test.ark".to_string())).unwrap()
}

// CURSOR

#[test]
fn test_peek_past_end_is_none() {
    let parser = Parser::new(tokens("a b"), Rc::new("test.ark".to_string()));

    assert_eq!(parser.peek(0).unwrap().value, "a");
    assert_eq!(parser.peek(1).unwrap().value, "b");
    assert!(parser.peek(2).is_none());
}

#[test]
fn test_matches_empty_text_matches_any() {
    let parser = Parser::new(tokens("count : int"), Rc::new("test.ark".to_string()));

    assert!(parser.matches(0, TokenKind::Identifier, ""));
    assert!(parser.matches(0, TokenKind::Identifier, "count"));
    assert!(!parser.matches(0, TokenKind::Identifier, "other"));
    assert!(!parser.matches(0, TokenKind::Operator, ""));
    assert!(!parser.matches(5, TokenKind::Identifier, ""));
}

#[test]
fn test_matches_sequence() {
    let parser = Parser::new(tokens("count : int"), Rc::new("test.ark".to_string()));

    assert!(parser.matches_sequence(&[(TokenKind::Identifier, ""), (TokenKind::Operator, ":")]));
    assert!(!parser.matches_sequence(&[(TokenKind::Identifier, ""), (TokenKind::Separator, "(")]));
    assert!(!parser.matches_sequence(&[
        (TokenKind::Identifier, ""),
        (TokenKind::Operator, ":"),
        (TokenKind::Identifier, ""),
        (TokenKind::Separator, ";"),
    ]));
}

#[test]
fn test_consume_past_end_is_internal_error() {
    let mut parser = Parser::new(tokens("a"), Rc::new("test.ark".to_string()));

    assert_eq!(parser.consume().unwrap().value, "a");
    let error = parser.consume().unwrap_err();
    assert!(error.is_internal());
    assert_eq!(parser.found(), END_OF_FILE);
}

#[test]
fn test_position_at_end_is_end_of_last_token() {
    let mut parser = Parser::new(tokens("abc"), Rc::new("test.ark".to_string()));
    parser.consume().unwrap();

    let position = parser.get_position();
    assert_eq!(position.line, 1);
    assert_eq!(position.column, 4);
}

#[test]
fn test_pop_global_scope_is_internal_error() {
    let mut parser = Parser::new(vec![], Rc::new("test.ark".to_string()));
    parser.push_scope();

    assert!(parser.pop_scope().is_ok());
    assert!(parser.pop_scope().unwrap_err().is_internal());
}

// SCOPES

#[test]
fn test_global_scope_has_primitives() {
    let mut symbols = Symbols::new();
    let scopes = ScopeTable::new(&mut symbols);

    for primitive in PrimitiveType::ALL {
        let id = scopes.get_type(primitive.name()).unwrap();
        assert!(matches!(symbols.type_def(id), TypeDef::Primitive(found) if *found == primitive));
    }
    assert!(scopes.get_type("Point").is_none());
    assert!(scopes.is_global());
}

#[test]
fn test_insert_reports_existing_binding() {
    let mut symbols = Symbols::new();
    let mut scopes = ScopeTable::new(&mut symbols);

    assert_eq!(scopes.insert_variable("x", VariableId(0)), None);
    assert_eq!(scopes.insert_variable("x", VariableId(1)), Some(VariableId(0)));
    assert_eq!(scopes.get_variable("x"), Some(VariableId(0)));
}

#[test]
fn test_namespaces_are_independent() {
    let mut symbols = Symbols::new();
    let mut scopes = ScopeTable::new(&mut symbols);

    assert_eq!(scopes.insert_variable("int", VariableId(0)), None);
    assert!(scopes.get_type("int").is_some());
    assert!(scopes.get_function("int").is_none());
}

#[test]
fn test_nested_scope_shadows_and_pops() {
    let mut symbols = Symbols::new();
    let mut scopes = ScopeTable::new(&mut symbols);
    scopes.insert_variable("x", VariableId(0));

    scopes.push();
    assert_eq!(scopes.depth(), 2);
    assert_eq!(scopes.get_variable("x"), Some(VariableId(0)));
    assert_eq!(scopes.insert_variable("x", VariableId(1)), None);
    assert_eq!(scopes.get_variable("x"), Some(VariableId(1)));
    scopes.insert_variable("y", VariableId(2));

    assert!(scopes.pop().is_some());
    assert_eq!(scopes.get_variable("x"), Some(VariableId(0)));
    assert_eq!(scopes.get_variable("y"), None);
    assert!(scopes.pop().is_none());
    assert_eq!(scopes.depth(), 1);
}

// LITERALS

#[rstest]
#[case("0", 0)]
#[case("42", 42)]
#[case("1_000", 1000)]
#[case("0xFF", 255)]
#[case("0Xff", 255)]
#[case("0b101", 5)]
#[case("0b_1111_0000", 240)]
#[case("0o17", 15)]
#[case("18446744073709551615", u64::MAX)]
fn test_read_integer(#[case] text: &str, #[case] expected: u64) {
    assert_eq!(read_numeric(text), Ok(NumericValue::Integer(expected)));
}

#[rstest]
#[case("1.5", 1.5)]
#[case("2f", 2.0)]
#[case("3d", 3.0)]
#[case("1_000.25", 1000.25)]
#[case("0.5f", 0.5)]
#[case("1.5e3", 1500.0)]
#[case("2.5E2", 250.0)]
#[case("1e2d", 100.0)]
fn test_read_floating(#[case] text: &str, #[case] expected: f64) {
    assert_eq!(read_numeric(text), Ok(NumericValue::Floating(expected)));
}

#[rstest]
#[case("0b102", "binary")]
#[case("0o8", "octal")]
#[case("0xFG", "hexadecimal")]
#[case("12a", "decimal")]
#[case("0x", "hexadecimal")]
#[case("1.2.3", "floating-point")]
#[case("1.5e", "floating-point")]
#[case("1.5x", "floating-point")]
#[case("1.e3e", "floating-point")]
fn test_read_malformed_numeric(#[case] text: &str, #[case] base: &'static str) {
    assert_eq!(
        read_numeric(text),
        Err(ErrorImpl::MalformedLiteral {
            base,
            literal: text.to_string()
        })
    );
}

#[test]
fn test_read_unrepresentable_numeric() {
    assert!(matches!(
        read_numeric("18446744073709551616"),
        Err(ErrorImpl::UnrepresentableLiteral { .. })
    ));
    assert!(matches!(
        read_numeric("0xFFFFFFFFFFFFFFFFF"),
        Err(ErrorImpl::UnrepresentableLiteral { .. })
    ));

    let huge = format!("1{}.0", "0".repeat(400));
    assert!(matches!(
        read_floating(&huge),
        Err(ErrorImpl::UnrepresentableLiteral { .. })
    ));
}

#[rstest]
#[case(r"plain", "plain")]
#[case(r"a\nb", "a\nb")]
#[case(r"\t\r\0", "\t\r\0")]
#[case(r"\a\b\f\v", "\x07\x08\x0c\x0b")]
#[case(r#"\"\'\\"#, "\"'\\")]
#[case(r"\x41\x7e", "A~")]
#[case(r"\x4", "\x04")]
#[case(r"\xZZ", r"\xZZ")]
#[case(r"\q", r"\q")]
#[case(r"trailing\", r"trailing\")]
fn test_unescape(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(unescape(text), expected);
}

#[test]
fn test_read_string_strips_quotes() {
    assert_eq!(read_string(r#""hi\n""#), Ok(String::from("hi\n")));
    assert_eq!(read_string(r#""""#), Ok(String::new()));
    assert!(matches!(read_string("hi"), Err(ErrorImpl::InternalError { .. })));
}

#[rstest]
#[case("'a'", 'a')]
#[case(r"'\n'", '\n')]
#[case(r"'\''", '\'')]
#[case(r"'\x41'", 'A')]
#[case("'é'", 'é')]
fn test_read_rune(#[case] text: &str, #[case] expected: char) {
    assert_eq!(read_rune(text), Ok(expected));
}

#[test]
fn test_read_rune_length() {
    assert!(matches!(read_rune("'ab'"), Err(ErrorImpl::RuneTooLong { .. })));
    assert!(matches!(read_rune("''"), Err(ErrorImpl::InternalError { .. })));
}

proptest! {
    #[test]
    fn prop_integer_reads_back_in_every_base(value in any::<u64>(), separators in prop::collection::vec(any::<bool>(), 0..70)) {
        for (prefix, digits) in [
            ("", format!("{}", value)),
            ("0x", format!("{:x}", value)),
            ("0b", format!("{:b}", value)),
            ("0o", format!("{:o}", value)),
        ] {
            let mut text = String::from(prefix);
            for (index, digit) in digits.chars().enumerate() {
                text.push(digit);
                if separators.get(index).copied().unwrap_or(false) {
                    text.push('_');
                }
            }

            prop_assert_eq!(read_numeric(&text), Ok(NumericValue::Integer(value)));
        }
    }
}

// EXPRESSIONS

#[rstest]
#[case("1 + 2 * 3", "(1 + (2 * 3))")]
#[case("1 * 2 + 3", "((1 * 2) + 3)")]
#[case("1 - 2 - 3", "((1 - 2) - 3)")]
#[case("1 + 2 * 3 * 4", "(1 + ((2 * 3) * 4))")]
#[case("1 * 2 + 3 * 4 + 5", "(((1 * 2) + (3 * 4)) + 5)")]
#[case("1 + 2 * 3 == 4", "((1 + (2 * 3)) == 4)")]
#[case("1 == 2 * 3 + 4", "(1 == ((2 * 3) + 4))")]
#[case("1 || 2 && 3", "(1 || (2 && 3))")]
#[case("1 | 2 ^ 3 & 4", "(1 | (2 ^ (3 & 4)))")]
#[case("1 << 2 + 3", "(1 << (2 + 3))")]
#[case("1 < 2 + 3 == 4", "((1 < (2 + 3)) == 4)")]
#[case("8 / 4 % 3", "((8 / 4) % 3)")]
fn test_precedence(#[case] source: &str, #[case] expected: &str) {
    let file = parse_source(&format!("x: int = {};", source)).unwrap();

    assert_eq!(shape(&file, last_initializer(&file)), expected);
}

#[test]
fn test_unary_operand_is_whole_expression() {
    let file = parse_source("x: int = -1 + 2;").unwrap();
    assert_eq!(shape(&file, last_initializer(&file)), "-((1 + 2))");

    let file = parse_source("x: int = 1 + -2 * 3;").unwrap();
    assert_eq!(shape(&file, last_initializer(&file)), "(1 + -((2 * 3)))");
}

#[test]
fn test_unary_operators() {
    let file = parse_source("p: ^int; x: int = !~^&p;").unwrap();

    assert_eq!(shape(&file, last_initializer(&file)), "!(~(^(&(p))))");
}

#[test]
fn test_literal_expressions() {
    let file = parse_source(r#"a: f64 = 2.5; b: str = "x\ty"; c: rune = '\n'; d: int = 0o17;"#).unwrap();
    let initializers: Vec<String> = file
        .nodes
        .iter()
        .filter_map(|node| match node {
            Node::Decl(Decl::Variable(decl)) => decl.assignment.as_ref(),
            _ => None,
        })
        .map(|expr| shape(&file, expr))
        .collect();

    assert_eq!(initializers, vec!["2.5", "\"x\\ty\"", "'\\n'", "15"]);
}

#[test]
fn test_binary_operator_without_operand() {
    assert_eq!(error_name("x: int = 1 + ;"), "ExpectedExpression");
    assert_eq!(error_name("x: int = -;"), "ExpectedExpression");
}

#[test]
fn test_cast() {
    let file = parse_source("x: f64 = f64(1 + 2);").unwrap();

    assert_eq!(shape(&file, last_initializer(&file)), "cast<f64>((1 + 2))");
}

#[test]
fn test_cast_wins_over_call() {
    let file = parse_source(
        "struct Meters; func Meters(value: int): int { return value; } m: int = Meters(1);",
    )
    .unwrap();

    assert_eq!(shape(&file, last_initializer(&file)), "cast<Meters>(1)");
}

#[test]
fn test_call_arguments() {
    let file = parse_source("func add(a: int, b: int): int { return a + b; } x: int = add(1, 2 * 3);")
        .unwrap();

    let Expr::Call(call) = last_initializer(&file) else {
        panic!("expected a call");
    };
    assert_eq!(call.arguments.len(), 2);
    assert_eq!(shape(&file, &call.arguments[1]), "(2 * 3)");
    assert_eq!(error_name("func f() {} x: int = f(1 2);"), "UnexpectedToken");
}

#[test]
fn test_unresolved_variable() {
    assert_eq!(error_name("x: int = y;"), "UnresolvedVariable");
    // not visible in its own initializer
    assert_eq!(error_name("x: int = x;"), "UnresolvedVariable");
    assert!(parse_source("x: int = 1; { x: int = x; }").is_ok());
}

// MEMBER ACCESS

const POINTS: &str = "struct Point { x: int, y: int } struct Line { a: Point, b: Point } ";

#[test]
fn test_member_access() {
    let file = parse_source(&format!("{}l: Line; v: int = l.a.y;", POINTS)).unwrap();

    let Expr::Access(access) = last_initializer(&file) else {
        panic!("expected an access");
    };
    assert_eq!(access.members.len(), 2);
    assert_eq!(file.symbols.variable(access.target()).name, "y");
    assert_eq!(file.symbols.variable(access.variable).name, "l");
}

#[rstest]
#[case("n: int = 1; v: int = n.x;", "InvalidMemberAccess")]
#[case("q: ^Point; v: int = q.x;", "InvalidMemberAccess")]
#[case("p: Point; v: int = p.z;", "UnknownMember")]
#[case("p: Point; v: int = p.x.y;", "InvalidMemberAccess")]
#[case("p: Point; v: int = p.;", "UnexpectedToken")]
fn test_member_access_errors(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(error_name(&format!("{}{}", POINTS, source)), expected);
}

#[test]
fn test_members_are_not_variables() {
    assert_eq!(error_name("struct P { x: int } v: int = x;"), "UnresolvedVariable");
}

// DECLARATIONS

#[test]
fn test_variable_declaration() {
    let file = parse_source("mut count: uint = 0; ratio: f32; p: ^^u8;").unwrap();
    assert_eq!(file.nodes.len(), 3);

    let Node::Decl(Decl::Variable(count)) = &file.nodes[0] else {
        panic!("expected a variable declaration");
    };
    let variable = file.symbols.variable(count.variable);
    assert!(variable.mutable);
    assert_eq!(variable.name, "count");
    assert_eq!(file.symbols.type_name(variable.ty.as_ref().unwrap()), "uint");

    let Node::Decl(Decl::Variable(p)) = &file.nodes[2] else {
        panic!("expected a variable declaration");
    };
    let ty = file.symbols.variable(p.variable).ty.clone().unwrap();
    assert!(matches!(&ty, Type::Pointer(pointer) if matches!(*pointer.addressee, Type::Pointer(_))));
    assert_eq!(file.symbols.type_name(&ty), "^^u8");
}

#[test]
fn test_inferred_variable() {
    let file = parse_source("x: = 5;").unwrap();
    let Node::Decl(Decl::Variable(decl)) = &file.nodes[0] else {
        panic!("expected a variable declaration");
    };

    assert!(file.symbols.variable(decl.variable).ty.is_none());
}

#[rstest]
#[case("x: int = 1", "UnexpectedToken")]
#[case("x: Unknown;", "UnrecognisedType")]
#[case("x: ^;", "UnexpectedToken")]
#[case("mut 5;", "UnexpectedToken")]
#[case("mut x = 1;", "UnexpectedToken")]
#[case("x: int = ;", "ExpectedExpression")]
fn test_variable_declaration_errors(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(error_name(source), expected);
}

#[test]
fn test_redeclaration() {
    let error = parse_source("mut x: int = 1;\nmut x: int = 2;").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::IllegalRedeclaration {
            kind: SymbolKind::Variable,
            name: String::from("x")
        }
    );
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 5);
}

#[test]
fn test_shadowing_in_nested_block() {
    let file = parse_source("mut x: int = 1; { mut x: int = 2; { x: int = 3; } }").unwrap();

    assert_eq!(file.nodes.len(), 2);
    assert!(matches!(&file.nodes[1], Node::Stat(Stat::Block(_))));
}

#[test]
fn test_keyword_is_not_a_name() {
    assert_eq!(error_name("return: int = 1;"), "ExpectedExpression");
    assert_eq!(error_name("struct func {}"), "UnexpectedToken");
    assert_eq!(error_name("func struct() {}"), "UnexpectedToken");
}

#[test]
fn test_struct_declaration() {
    let file = parse_source("struct Node [packed, align = \"8\"] { value: int, next: ^Node mut tag: u8 = 1 }").unwrap();

    let Node::Decl(Decl::Struct(decl)) = &file.nodes[0] else {
        panic!("expected a struct declaration");
    };
    let struct_type = file.symbols.struct_type(decl.struct_type).unwrap();
    assert_eq!(struct_type.name, "Node");
    assert!(struct_type.has_body);
    assert_eq!(struct_type.members.len(), 3);
    assert_eq!(struct_type.attrs.len(), 2);
    assert_eq!(struct_type.attrs[1].key, "align");
    assert_eq!(struct_type.attrs[1].value.as_deref(), Some("8"));
    assert!(struct_type.attrs[0].value.is_none());
}

#[test]
fn test_empty_and_bodyless_structs() {
    let file = parse_source("struct Empty {} struct Opaque; struct Bare").unwrap();
    assert_eq!(file.nodes.len(), 3);

    for node in &file.nodes {
        let Node::Decl(Decl::Struct(decl)) = node else {
            panic!("expected a struct declaration");
        };
        assert!(file.symbols.struct_type(decl.struct_type).unwrap().members.is_empty());
    }
}

#[test]
fn test_defining_primitive_as_struct_is_internal() {
    let mut parser = Parser::new(vec![], Rc::new("test.ark".to_string()));
    let int = parser.scopes().get_type("int").unwrap();

    let error = define_struct(&mut parser, int, vec![], vec![], true).unwrap_err();
    assert!(error.is_internal());
    assert!(parser.symbols().struct_type(int).is_none());
}

#[rstest]
#[case("struct P { x: int, x: int }", "IllegalRedeclaration")]
#[case("struct P {} struct P {}", "IllegalRedeclaration")]
#[case("struct [a] {}", "UnexpectedToken")]
#[case("struct P [a, a] {}", "DuplicateAttribute")]
#[case("struct P [a = b] {}", "UnexpectedToken")]
#[case("struct P [a b] {}", "UnexpectedToken")]
#[case("struct P { 5 }", "UnexpectedToken")]
#[case("struct P { x: int", "UnexpectedToken")]
fn test_struct_errors(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(error_name(source), expected);
}

#[test]
fn test_duplicate_member_kind() {
    let error = parse_source("struct P { x: int, x: int }").unwrap_err();

    assert!(matches!(
        error.get_impl(),
        ErrorImpl::IllegalRedeclaration { kind: SymbolKind::Member, .. }
    ));
}

#[test]
fn test_function_declaration() {
    let file = parse_source("func get(p: ^int, n: int): mut ^int { return p; }").unwrap();

    let Node::Decl(Decl::Function(decl)) = &file.nodes[0] else {
        panic!("expected a function declaration");
    };
    let function = file.symbols.function(decl.function);
    assert_eq!(function.name, "get");
    assert_eq!(function.parameters.len(), 2);
    assert!(function.mutable);
    assert_eq!(file.symbols.type_name(function.return_type.as_ref().unwrap()), "^int");
    assert_eq!(function.body.as_ref().unwrap().nodes.len(), 1);
}

#[test]
fn test_parameters_are_scoped_to_function() {
    assert_eq!(error_name("func f(a: int) {} x: int = a;"), "UnresolvedVariable");
    assert_eq!(error_name("func f(a: int, a: int) {}"), "IllegalRedeclaration");
}

#[rstest]
#[case("func f(a: int = 1) {}", "ParameterAssignment")]
#[case("func f() {} func f() {}", "IllegalRedeclaration")]
#[case("func f(a: int b: int) {}", "UnexpectedToken")]
#[case("func f(5) {}", "UnexpectedToken")]
#[case("func f;", "UnexpectedToken")]
#[case("func f(): {}", "UnexpectedToken")]
#[case("func f()", "UnexpectedToken")]
#[case("func f() {", "UnexpectedToken")]
fn test_function_errors(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(error_name(source), expected);
}

#[test]
fn test_unclosed_block_reports_end_of_file() {
    let error = parse_source("func f() { x: int = 1;").unwrap_err();

    assert!(matches!(
        error.get_impl(),
        ErrorImpl::UnexpectedToken { found, .. } if found == END_OF_FILE
    ));
}

// STATEMENTS

#[test]
fn test_calls_need_prior_declaration() {
    assert_eq!(error_name("f(); func f() {}"), "UndeclaredFunction");
    assert!(parse_source("func f() {} f();").is_ok());
    assert!(parse_source("func count(n: int): int { count(n - 1); return count(n); }").is_ok());
}

#[test]
fn test_nested_function_scope() {
    assert!(parse_source("func outer() { func inner() {} inner(); } outer();").is_ok());
    assert_eq!(error_name("func outer() { func inner() {} } inner();"), "UndeclaredFunction");
}

#[test]
fn test_statement_errors() {
    assert_eq!(error_name("func f() {} f()"), "UnexpectedToken");
    assert_eq!(error_name("func f() { return 1 }"), "UnexpectedToken");
    assert_eq!(error_name("func f() { return; }"), "ExpectedExpression");
}

#[test]
fn test_comments_are_skipped() {
    let file = parse_source(
        "/// doc\nx: int = 1; // trailing\nfunc f() { /* inner */ // line\n }\n/* end */",
    )
    .unwrap();

    assert_eq!(file.nodes.len(), 2);
}

#[test]
fn test_unmatched_tokens_are_skipped() {
    let file = parse_source("x; 5; y: int = 1;").unwrap();

    assert_eq!(file.nodes.len(), 1);
}

#[test]
fn test_empty_input() {
    let file = parse(vec![], false).unwrap();

    assert!(file.nodes.is_empty());
    assert_eq!(*file.name, "<empty>");
}

#[test]
fn test_verbose_parse() {
    let _ = env_logger::builder().is_test(true).try_init();
    let file = parse(tokens("x: int = 1; func f() {}"), true).unwrap();

    assert_eq!(file.nodes.len(), 2);
    assert_eq!(*file.name, "test.ark");
}

use crate::{
    ast::{
        ast::{Decl, Node, Stat},
        statements::{
            Block, BlockStat, CallStat, FunctionDecl, ReturnStat, StructDecl, VariableDecl,
        },
        symbols::{Function, TypeId, Variable},
        types::{Attr, StructType, TypeDef},
    },
    errors::errors::{Error, ErrorImpl, SymbolKind},
    lexer::tokens::{Token, TokenKind, KEYWORD_FUNC, KEYWORD_MUT, KEYWORD_RETURN, KEYWORD_STRUCT},
    MK_INTERNAL_ERROR,
};

use super::{
    expr::{expect_expr, parse_call_expr},
    parser::Parser,
    types::{parse_attrs, parse_type},
};

/// Where a variable declaration appears. Decides the terminator and what a redeclaration is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarContext {
    Statement,
    Parameter,
    Member,
}

impl VarContext {
    fn symbol_kind(self) -> SymbolKind {
        match self {
            VarContext::Member => SymbolKind::Member,
            VarContext::Statement | VarContext::Parameter => SymbolKind::Variable,
        }
    }
}

pub fn parse_node(parser: &mut Parser) -> Result<Option<Node>, Error> {
    parser.skip_comments();

    if let Some(decl) = parse_decl(parser)? {
        return Ok(Some(Node::Decl(decl)));
    }

    if let Some(stat) = parse_stat(parser)? {
        return Ok(Some(Node::Stat(stat)));
    }

    Ok(None)
}

pub fn parse_decl(parser: &mut Parser) -> Result<Option<Decl>, Error> {
    if let Some(decl) = parse_variable_decl(parser, VarContext::Statement)? {
        return Ok(Some(Decl::Variable(decl)));
    }

    if let Some(decl) = parse_struct_decl(parser)? {
        return Ok(Some(Decl::Struct(decl)));
    }

    if let Some(decl) = parse_function_decl(parser)? {
        return Ok(Some(Decl::Function(decl)));
    }

    Ok(None)
}

pub fn parse_stat(parser: &mut Parser) -> Result<Option<Stat>, Error> {
    if let Some(stat) = parse_return_stat(parser)? {
        return Ok(Some(Stat::Return(stat)));
    }

    if let Some(stat) = parse_block_stat(parser)? {
        return Ok(Some(Stat::Block(stat)));
    }

    if let Some(stat) = parse_call_stat(parser)? {
        return Ok(Some(Stat::Call(stat)));
    }

    Ok(None)
}

/// True if the token `ahead` positions away can name a declaration.
fn is_name(parser: &Parser, ahead: usize) -> bool {
    parser
        .peek(ahead)
        .is_some_and(|token| token.kind == TokenKind::Identifier && !token.is_keyword())
}

fn expect_name(parser: &mut Parser, expected: &str) -> Result<Token, Error> {
    if is_name(parser, 0) {
        parser.consume()
    } else {
        Err(parser.error(ErrorImpl::UnexpectedToken {
            expected: expected.to_string(),
            found: parser.found(),
        }))
    }
}

pub fn parse_variable_decl(
    parser: &mut Parser,
    context: VarContext,
) -> Result<Option<VariableDecl>, Error> {
    let mutable = parser.matches(0, TokenKind::Identifier, KEYWORD_MUT);
    let offset = usize::from(mutable);
    if !mutable && !(is_name(parser, offset) && parser.matches(offset + 1, TokenKind::Operator, ":")) {
        return Ok(None);
    }

    let start = parser.get_position();
    if mutable {
        parser.consume()?;
        if !(is_name(parser, 0) && parser.matches(1, TokenKind::Operator, ":")) {
            return Err(parser.error(ErrorImpl::UnexpectedToken {
                expected: String::from("variable name and `:` after `mut`"),
                found: parser.found(),
            }));
        }
    }

    let name = parser.consume()?;
    parser.consume()?;

    let ty = parse_type(parser)?;

    let assignment = if parser.matches(0, TokenKind::Operator, "=") {
        if context == VarContext::Parameter {
            return Err(parser.error(ErrorImpl::ParameterAssignment {
                parameter: name.value,
            }));
        }
        parser.consume()?;
        Some(expect_expr(
            parser,
            &format!("in assignment to `{}`", name.value),
        )?)
    } else {
        None
    };

    let variable = parser.symbols_mut().add_variable(Variable {
        name: name.value.clone(),
        ty,
        mutable,
    });
    if parser.scopes_mut().insert_variable(&name.value, variable).is_some() {
        return Err(Error::new(
            ErrorImpl::IllegalRedeclaration {
                kind: context.symbol_kind(),
                name: name.value,
            },
            name.span.start,
        ));
    }
    log::debug!("declared {} `{}`", context.symbol_kind(), name.value);

    if context == VarContext::Statement {
        parser.expect(
            TokenKind::Separator,
            ";",
            "`;` after variable declaration",
        )?;
    }

    Ok(Some(VariableDecl {
        variable,
        assignment,
        span: parser.span_from(start),
    }))
}

pub fn parse_struct_decl(parser: &mut Parser) -> Result<Option<StructDecl>, Error> {
    if !parser.matches(0, TokenKind::Identifier, KEYWORD_STRUCT) {
        return Ok(None);
    }
    let start = parser.consume()?.span.start;

    let name = expect_name(parser, "struct name after `struct`")?;
    let struct_type = parser
        .symbols_mut()
        .add_type(TypeDef::Struct(StructType::new(name.value.clone())));
    if parser.scopes_mut().insert_type(&name.value, struct_type).is_some() {
        return Err(Error::new(
            ErrorImpl::IllegalRedeclaration {
                kind: SymbolKind::Type,
                name: name.value,
            },
            name.span.start,
        ));
    }
    log::debug!("declared struct `{}`", name.value);

    let attrs = parse_attrs(parser)?;

    let mut members = vec![];
    let has_body = parser.matches(0, TokenKind::Separator, "{");
    if has_body {
        parser.consume()?;
        parser.push_scope();

        loop {
            parser.skip_comments();
            if parser.matches(0, TokenKind::Separator, "}") {
                parser.consume()?;
                break;
            }

            let Some(member) = parse_variable_decl(parser, VarContext::Member)? else {
                return Err(parser.error(ErrorImpl::UnexpectedToken {
                    expected: format!("member declaration or `}}` in struct `{}`", name.value),
                    found: parser.found(),
                }));
            };
            members.push(member);

            if parser.matches(0, TokenKind::Separator, ",") {
                parser.consume()?;
            }
        }

        parser.pop_scope()?;
    } else if parser.matches(0, TokenKind::Separator, ";") {
        parser.consume()?;
    }

    define_struct(parser, struct_type, members, attrs, has_body)?;

    Ok(Some(StructDecl {
        struct_type,
        span: parser.span_from(start),
    }))
}

/// Stores a parsed body into the struct registered under `struct_type`.
pub fn define_struct(
    parser: &mut Parser,
    struct_type: TypeId,
    members: Vec<VariableDecl>,
    attrs: Vec<Attr>,
    has_body: bool,
) -> Result<(), Error> {
    let position = parser.get_position();
    let Some(declared) = parser.symbols_mut().struct_type_mut(struct_type) else {
        return Err(MK_INTERNAL_ERROR!(
            position,
            "type {} is not a struct and cannot take a body",
            struct_type.0
        ));
    };

    declared.members = members;
    declared.attrs = attrs;
    declared.has_body = has_body;
    Ok(())
}

pub fn parse_function_decl(parser: &mut Parser) -> Result<Option<FunctionDecl>, Error> {
    if !parser.matches(0, TokenKind::Identifier, KEYWORD_FUNC) {
        return Ok(None);
    }
    let start = parser.consume()?.span.start;

    let name = expect_name(parser, "function name after `func`")?;
    let function = parser
        .symbols_mut()
        .add_function(Function::new(name.value.clone()));
    if parser.scopes_mut().insert_function(&name.value, function).is_some() {
        return Err(Error::new(
            ErrorImpl::IllegalRedeclaration {
                kind: SymbolKind::Function,
                name: name.value,
            },
            name.span.start,
        ));
    }
    log::debug!("declared function `{}`", name.value);

    parser.push_scope();
    parser.expect(
        TokenKind::Separator,
        "(",
        &format!("`(` after function name `{}`", name.value),
    )?;

    let mut parameters = vec![];
    if parser.matches(0, TokenKind::Separator, ")") {
        parser.consume()?;
    } else {
        loop {
            let Some(parameter) = parse_variable_decl(parser, VarContext::Parameter)? else {
                return Err(parser.error(ErrorImpl::UnexpectedToken {
                    expected: format!("parameter declaration for function `{}`", name.value),
                    found: parser.found(),
                }));
            };
            parameters.push(parameter);

            if parser.matches(0, TokenKind::Separator, ",") {
                parser.consume()?;
            } else {
                parser.expect(TokenKind::Separator, ")", "`,` or `)` after parameter")?;
                break;
            }
        }
    }

    let mut mutable = false;
    let mut return_type = None;
    if parser.matches(0, TokenKind::Operator, ":") {
        parser.consume()?;
        if parser.matches(0, TokenKind::Identifier, KEYWORD_MUT) {
            parser.consume()?;
            mutable = true;
        }

        let Some(ty) = parse_type(parser)? else {
            return Err(parser.error(ErrorImpl::UnexpectedToken {
                expected: format!("return type for function `{}`", name.value),
                found: parser.found(),
            }));
        };
        return_type = Some(ty);
    }

    {
        let declared = parser.symbols_mut().function_mut(function);
        declared.parameters = parameters;
        declared.return_type = return_type;
        declared.mutable = mutable;
    }

    let Some(body) = parse_block(parser)? else {
        return Err(parser.error(ErrorImpl::UnexpectedToken {
            expected: format!("body of function `{}`", name.value),
            found: parser.found(),
        }));
    };
    parser.pop_scope()?;

    parser.symbols_mut().function_mut(function).body = Some(body);

    Ok(Some(FunctionDecl {
        function,
        span: parser.span_from(start),
    }))
}

/// `{ ... }` in whatever scope the caller has set up.
pub fn parse_block(parser: &mut Parser) -> Result<Option<Block>, Error> {
    if !parser.matches(0, TokenKind::Separator, "{") {
        return Ok(None);
    }
    let start = parser.consume()?.span.start;

    let mut nodes = vec![];
    loop {
        parser.skip_comments();
        if parser.matches(0, TokenKind::Separator, "}") {
            parser.consume()?;
            break;
        }

        match parse_node(parser)? {
            Some(node) => nodes.push(node),
            None => {
                return Err(parser.error(ErrorImpl::UnexpectedToken {
                    expected: String::from("declaration, statement or `}`"),
                    found: parser.found(),
                }))
            }
        }
    }

    Ok(Some(Block {
        nodes,
        span: parser.span_from(start),
    }))
}

pub fn parse_block_stat(parser: &mut Parser) -> Result<Option<BlockStat>, Error> {
    if !parser.matches(0, TokenKind::Separator, "{") {
        return Ok(None);
    }

    parser.push_scope();
    let block = parse_block(parser)?;
    parser.pop_scope()?;

    Ok(block.map(|block| BlockStat {
        span: block.span.clone(),
        block,
    }))
}

pub fn parse_return_stat(parser: &mut Parser) -> Result<Option<ReturnStat>, Error> {
    if !parser.matches(0, TokenKind::Identifier, KEYWORD_RETURN) {
        return Ok(None);
    }
    let start = parser.consume()?.span.start;

    let value = expect_expr(parser, "after `return`")?;
    parser.expect(TokenKind::Separator, ";", "`;` after return statement")?;

    Ok(Some(ReturnStat {
        value,
        span: parser.span_from(start),
    }))
}

pub fn parse_call_stat(parser: &mut Parser) -> Result<Option<CallStat>, Error> {
    let Some(call) = parse_call_expr(parser)? else {
        return Ok(None);
    };
    parser.expect(TokenKind::Separator, ";", "`;` after call")?;

    Ok(Some(CallStat {
        span: parser.span_from(call.span.start.clone()),
        call,
    }))
}

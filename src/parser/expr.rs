use crate::{
    ast::{
        ast::Expr,
        expressions::{
            AccessExpr, BinaryExpr, CallExpr, CastExpr, FloatingLiteral, IntegerLiteral,
            RuneLiteral, StringLiteral, UnaryExpr,
        },
        operators::{BinOpType, UnOpType},
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    literal::{read_numeric, read_rune, read_string, NumericValue},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    let Some(lhand) = parse_primary_expr(parser)? else {
        return Ok(None);
    };

    Ok(Some(parse_binary_operator(parser, 0, lhand)?))
}

/// Like [`parse_expr`], but a missing expression is an error mentioning `context`.
pub fn expect_expr(parser: &mut Parser, context: &str) -> Result<Expr, Error> {
    match parse_expr(parser)? {
        Some(expr) => Ok(expr),
        None => Err(parser.error(ErrorImpl::ExpectedExpression {
            context: context.to_string(),
            found: parser.found(),
        })),
    }
}

/// The binary operator under the cursor and its precedence.
fn peek_binary_operator(parser: &Parser) -> Option<(BinOpType, u8)> {
    let token = parser.peek(0)?;
    if token.kind != TokenKind::Operator {
        return None;
    }

    let op = BinOpType::from_symbol(&token.value)?;
    Some((op, parser.get_precedence(op)?))
}

/// Extends `lhand` with every following operator of precedence `min_precedence` or higher.
pub fn parse_binary_operator(
    parser: &mut Parser,
    min_precedence: u8,
    mut lhand: Expr,
) -> Result<Expr, Error> {
    loop {
        let Some((op, precedence)) = peek_binary_operator(parser) else {
            return Ok(lhand);
        };
        if precedence < min_precedence {
            return Ok(lhand);
        }

        parser.consume()?;
        log::trace!("climbing `{}` at precedence {} (min {})", op, precedence, min_precedence);

        let Some(mut rhand) = parse_primary_expr(parser)? else {
            return Err(parser.error(ErrorImpl::ExpectedExpression {
                context: format!("after binary operator `{}`", op),
                found: parser.found(),
            }));
        };

        if let Some((_, next)) = peek_binary_operator(parser) {
            if next > precedence {
                rhand = parse_binary_operator(parser, precedence + 1, rhand)?;
            }
        }

        let span = Span::new(lhand.get_span().start.clone(), rhand.get_span().end.clone());
        lhand = Expr::Binary(BinaryExpr {
            lhand: Box::new(lhand),
            op,
            rhand: Box::new(rhand),
            span,
        });
    }
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    if let Some(literal) = parse_literal(parser)? {
        return Ok(Some(literal));
    }

    if let Some(unary) = parse_unary_expr(parser)? {
        return Ok(Some(Expr::Unary(unary)));
    }

    // a name bound both as a type and as a function is a cast
    if let Some(cast) = parse_cast_expr(parser)? {
        return Ok(Some(Expr::Cast(cast)));
    }

    if let Some(call) = parse_call_expr(parser)? {
        return Ok(Some(Expr::Call(call)));
    }

    if let Some(access) = parse_access_expr(parser)? {
        return Ok(Some(Expr::Access(access)));
    }

    Ok(None)
}

pub fn parse_literal(parser: &mut Parser) -> Result<Option<Expr>, Error> {
    let kind = match parser.peek(0) {
        Some(token) => token.kind,
        None => return Ok(None),
    };
    if !matches!(kind, TokenKind::Number | TokenKind::String | TokenKind::Rune) {
        return Ok(None);
    }

    let token = parser.consume()?;
    let position = token.span.start.clone();
    let span = token.span;

    let literal = match kind {
        TokenKind::Number => match read_numeric(&token.value) {
            Ok(NumericValue::Integer(value)) => Expr::Integer(IntegerLiteral { value, span }),
            Ok(NumericValue::Floating(value)) => Expr::Floating(FloatingLiteral { value, span }),
            Err(error) => return Err(Error::new(error, position)),
        },
        TokenKind::String => Expr::String(StringLiteral {
            value: read_string(&token.value).map_err(|error| Error::new(error, position))?,
            span,
        }),
        _ => Expr::Rune(RuneLiteral {
            value: read_rune(&token.value).map_err(|error| Error::new(error, position))?,
            span,
        }),
    };

    Ok(Some(literal))
}

pub fn parse_unary_expr(parser: &mut Parser) -> Result<Option<UnaryExpr>, Error> {
    let op = match parser.peek(0) {
        Some(token) if token.kind == TokenKind::Operator => UnOpType::from_symbol(&token.value),
        _ => None,
    };
    let Some(op) = op else {
        return Ok(None);
    };

    let start = parser.consume()?.span.start;
    let expr = expect_expr(parser, &format!("after unary operator `{}`", op))?;

    Ok(Some(UnaryExpr {
        op,
        span: Span::new(start, expr.get_span().end.clone()),
        expr: Box::new(expr),
    }))
}

pub fn parse_cast_expr(parser: &mut Parser) -> Result<Option<CastExpr>, Error> {
    if !parser.matches_sequence(&[(TokenKind::Identifier, ""), (TokenKind::Separator, "(")]) {
        return Ok(None);
    }

    let name = parser.found();
    let Some(ty) = parser.scopes().get_type(&name) else {
        return Ok(None);
    };

    let start = parser.consume()?.span.start;
    parser.consume()?;

    let expr = expect_expr(parser, &format!("in cast to `{}`", name))?;
    parser.expect(TokenKind::Separator, ")", "`)` to close the cast")?;

    Ok(Some(CastExpr {
        ty: Type::Named(ty),
        expr: Box::new(expr),
        span: parser.span_from(start),
    }))
}

pub fn parse_call_expr(parser: &mut Parser) -> Result<Option<CallExpr>, Error> {
    if !parser.matches_sequence(&[(TokenKind::Identifier, ""), (TokenKind::Separator, "(")]) {
        return Ok(None);
    }

    let name = parser.found();
    let Some(function) = parser.scopes().get_function(&name) else {
        return Err(parser.error(ErrorImpl::UndeclaredFunction { function: name }));
    };

    let start = parser.consume()?.span.start;
    parser.consume()?;

    let mut arguments = vec![];
    if parser.matches(0, TokenKind::Separator, ")") {
        parser.consume()?;
    } else {
        loop {
            arguments.push(expect_expr(parser, &format!("as argument to `{}`", name))?);

            if parser.matches(0, TokenKind::Separator, ",") {
                parser.consume()?;
            } else {
                parser.expect(
                    TokenKind::Separator,
                    ")",
                    &format!("`,` or `)` after argument to `{}`", name),
                )?;
                break;
            }
        }
    }

    Ok(Some(CallExpr {
        function,
        arguments,
        span: parser.span_from(start),
    }))
}

/// A variable reference followed by any number of `.member` steps.
pub fn parse_access_expr(parser: &mut Parser) -> Result<Option<AccessExpr>, Error> {
    match parser.peek(0) {
        Some(token) if token.kind == TokenKind::Identifier && !token.is_keyword() => {}
        _ => return Ok(None),
    }

    let name = parser.found();
    let Some(variable) = parser.scopes().get_variable(&name) else {
        return Err(parser.error(ErrorImpl::UnresolvedVariable { variable: name }));
    };
    let start = parser.consume()?.span.start;

    let mut members = vec![];
    let mut current = variable;
    while parser.matches(0, TokenKind::Separator, ".") {
        let symbols = parser.symbols();
        let accessed = symbols.variable(current);
        let struct_type = accessed
            .ty
            .as_ref()
            .and_then(Type::named)
            .filter(|id| symbols.struct_type(*id).is_some());

        let Some(struct_type) = struct_type else {
            let type_ = match &accessed.ty {
                Some(ty) => symbols.type_name(ty),
                None => String::from("<inferred>"),
            };
            return Err(parser.error(ErrorImpl::InvalidMemberAccess {
                variable: accessed.name.clone(),
                type_,
            }));
        };

        parser.consume()?;
        let member = parser.expect(TokenKind::Identifier, "", "member name after `.`")?;
        let Some(resolved) = parser.symbols().struct_member(struct_type, &member.value) else {
            return Err(Error::new(
                ErrorImpl::UnknownMember {
                    struct_: parser.symbols().type_def(struct_type).name().to_string(),
                    member: member.value,
                },
                member.span.start,
            ));
        };

        members.push(resolved);
        current = resolved;
    }

    Ok(Some(AccessExpr {
        variable,
        members,
        span: parser.span_from(start),
    }))
}

//! Type and attribute parsing.
//!
//! A type is either a name that resolves in the scope chain or `^` followed
//! by a type. Struct attributes are the bracketed `[key, key = "value"]` list
//! that may follow a struct's name.

use crate::{
    ast::types::{Attr, Type},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{literal::read_string, parser::Parser};

pub fn parse_type(parser: &mut Parser) -> Result<Option<Type>, Error> {
    if parser.matches(0, TokenKind::Operator, "^") {
        parser.consume()?;
        return match parse_type(parser)? {
            Some(addressee) => Ok(Some(Type::pointer_to(addressee))),
            None => Err(parser.error(ErrorImpl::UnexpectedToken {
                expected: String::from("type after `^`"),
                found: parser.found(),
            })),
        };
    }

    if !parser.matches(0, TokenKind::Identifier, "") {
        return Ok(None);
    }

    let token = parser.consume()?;
    match parser.scopes().get_type(&token.value) {
        Some(id) => Ok(Some(Type::Named(id))),
        None => Err(Error::new(
            ErrorImpl::UnrecognisedType { type_: token.value },
            token.span.start,
        )),
    }
}

pub fn parse_attrs(parser: &mut Parser) -> Result<Vec<Attr>, Error> {
    let mut attrs: Vec<Attr> = vec![];
    if !parser.matches(0, TokenKind::Separator, "[") {
        return Ok(attrs);
    }
    parser.consume()?;

    while !parser.matches(0, TokenKind::Separator, "]") {
        let key = parser.expect(TokenKind::Identifier, "", "attribute name")?;

        let value = if parser.matches(0, TokenKind::Operator, "=") {
            parser.consume()?;
            let token = parser.expect(TokenKind::String, "", "string value after `=` in attribute")?;
            Some(read_string(&token.value).map_err(|error| Error::new(error, token.span.start))?)
        } else {
            None
        };

        if attrs.iter().any(|attr| attr.key == key.value) {
            return Err(Error::new(
                ErrorImpl::DuplicateAttribute { attribute: key.value },
                key.span.start,
            ));
        }
        attrs.push(Attr {
            key: key.value,
            value,
        });

        if parser.matches(0, TokenKind::Separator, ",") {
            parser.consume()?;
        } else if !parser.matches(0, TokenKind::Separator, "]") {
            return Err(parser.error(ErrorImpl::UnexpectedToken {
                expected: String::from("`,` or `]` in attribute list"),
                found: parser.found(),
            }));
        }
    }
    parser.consume()?;

    Ok(attrs)
}

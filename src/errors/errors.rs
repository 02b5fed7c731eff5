use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Creates an internal compiler error. These signal a bug in the front end, not bad input.
    pub fn internal(message: impl Into<String>, position: Position) -> Self {
        Error::new(
            ErrorImpl::InternalError {
                message: message.into(),
            },
            position,
        )
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn is_internal(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::InternalError { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnrecognisedType { .. } => "UnrecognisedType",
            ErrorImpl::IllegalRedeclaration { .. } => "IllegalRedeclaration",
            ErrorImpl::UndeclaredFunction { .. } => "UndeclaredFunction",
            ErrorImpl::UnresolvedVariable { .. } => "UnresolvedVariable",
            ErrorImpl::MalformedLiteral { .. } => "MalformedLiteral",
            ErrorImpl::UnrepresentableLiteral { .. } => "UnrepresentableLiteral",
            ErrorImpl::RuneTooLong { .. } => "RuneTooLong",
            ErrorImpl::ParameterAssignment { .. } => "ParameterAssignment",
            ErrorImpl::InvalidMemberAccess { .. } => "InvalidMemberAccess",
            ErrorImpl::UnknownMember { .. } => "UnknownMember",
            ErrorImpl::DuplicateAttribute { .. } => "DuplicateAttribute",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::MissingType { .. } => "MissingType",
            ErrorImpl::ReturnOutsideFunction => "ReturnOutsideFunction",
            ErrorImpl::InternalError { .. } => "InternalError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { found, .. } if found == END_OF_FILE => {
                ErrorTip::Suggestion(String::from("The file ended early, is a closing token missing?"))
            }
            ErrorImpl::UnexpectedToken { expected, .. } if expected.contains("`;`") => {
                ErrorTip::Suggestion(String::from("Did you miss a semicolon?"))
            }
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::UnrecognisedType { type_ } => ErrorTip::Suggestion(format!(
                "Types must be declared before use, is `{}` declared later in the file?",
                type_
            )),
            ErrorImpl::IllegalRedeclaration { kind, name } => ErrorTip::Suggestion(format!(
                "A {} named `{}` already exists in this scope, shadowing is only allowed in a nested scope",
                kind, name
            )),
            ErrorImpl::UndeclaredFunction { function } => ErrorTip::Suggestion(format!(
                "Functions must be declared before they are called, move `{}` above this call",
                function
            )),
            ErrorImpl::UnresolvedVariable { .. } => ErrorTip::Suggestion(String::from(
                "Variables are visible once their declaration has been parsed",
            )),
            ErrorImpl::MalformedLiteral { base, .. } => {
                ErrorTip::Suggestion(format!("Check the digits allowed in a {} literal", base))
            }
            ErrorImpl::UnrepresentableLiteral { .. } => ErrorTip::Suggestion(String::from(
                "The literal is outside the range of its type",
            )),
            ErrorImpl::RuneTooLong { .. } => ErrorTip::Suggestion(String::from(
                "Use a string literal for more than one character",
            )),
            ErrorImpl::ParameterAssignment { .. } => ErrorTip::Suggestion(String::from(
                "Function parameters cannot have default values",
            )),
            ErrorImpl::InvalidMemberAccess { .. } => ErrorTip::Suggestion(String::from(
                "Only variables of a struct type have members",
            )),
            ErrorImpl::UnknownMember { .. } => ErrorTip::None,
            ErrorImpl::DuplicateAttribute { .. } => ErrorTip::None,
            ErrorImpl::ExpectedExpression { .. } => ErrorTip::None,
            ErrorImpl::MissingType { .. } => ErrorTip::Suggestion(String::from(
                "Give the declaration a type or an initial value",
            )),
            ErrorImpl::ReturnOutsideFunction => ErrorTip::Suggestion(String::from(
                "`return` may only appear inside a function body",
            )),
            ErrorImpl::InternalError { .. } => ErrorTip::Suggestion(String::from(
                "This is a bug in the compiler, not in your program",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.position, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Stand-in for the token text when the stream is exhausted.
pub const END_OF_FILE: &str = "end of file";

/// The namespace a redeclared name collided in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Variable,
    Type,
    Function,
    Member,
}

impl Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolKind::Variable => write!(f, "variable"),
            SymbolKind::Type => write!(f, "type"),
            SymbolKind::Function => write!(f, "function"),
            SymbolKind::Member => write!(f, "struct member"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: `{token}`")]
    UnrecognisedToken { token: String },
    #[error("expected {expected}, found `{found}`")]
    UnexpectedToken { expected: String, found: String },
    #[error("unrecognized type `{type_}`")]
    UnrecognisedType { type_: String },
    #[error("illegal redeclaration of {kind} `{name}`")]
    IllegalRedeclaration { kind: SymbolKind, name: String },
    #[error("call to undeclared function `{function}`")]
    UndeclaredFunction { function: String },
    #[error("unresolved variable `{variable}`")]
    UnresolvedVariable { variable: String },
    #[error("malformed {base} literal: `{literal}`")]
    MalformedLiteral { base: &'static str, literal: String },
    #[error("literal cannot be represented: `{literal}`")]
    UnrepresentableLiteral { literal: String },
    #[error("rune literal contains more than one character: `{literal}`")]
    RuneTooLong { literal: String },
    #[error("assignment in function parameter `{parameter}`")]
    ParameterAssignment { parameter: String },
    #[error("cannot access member of `{variable}`, type `{type_}`")]
    InvalidMemberAccess { variable: String, type_: String },
    #[error("struct `{struct_}` does not contain member `{member}`")]
    UnknownMember { struct_: String, member: String },
    #[error("duplicate attribute `{attribute}`")]
    DuplicateAttribute { attribute: String },
    #[error("expected expression {context}, found `{found}`")]
    ExpectedExpression { context: String, found: String },
    #[error("cannot determine the type of `{name}`")]
    MissingType { name: String },
    #[error("return statement outside of a function")]
    ReturnOutsideFunction,
    #[error("internal compiler error: {message}")]
    InternalError { message: String },
}

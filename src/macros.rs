//! Utility macros for the front end.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for a token kind
//! - `MK_INTERNAL_ERROR!` - Creates an internal compiler error with a formatted message
//!
//! These macros reduce boilerplate in the lexer and parser.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's raw text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler that emits the matched text as a single token.
///
/// The generated handler pushes a token of the given kind holding exactly the
/// text the pattern matched, then advances the lexer past it.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^[(){}\\[\\],;.]").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Separator),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, regex: &Regex| {
            let matched = lexer.matched(regex);
            let start = lexer.position();
            lexer.advance_n(&matched);
            let span = Span::new(start, lexer.position());
            lexer.push(MK_TOKEN!($kind, matched, span));
        }
    };
}

/// Creates an internal compiler error at a position.
///
/// Internal errors mark broken invariants inside the front end itself and are
/// reported separately from errors in the program being compiled.
///
/// # Example
///
/// ```ignore
/// return Err(MK_INTERNAL_ERROR!(parser.get_position(), "popped {} scopes", n));
/// ```
#[macro_export]
macro_rules! MK_INTERNAL_ERROR {
    ($position:expr, $($arg:tt)*) => {
        $crate::errors::errors::Error::internal(format!($($arg)*), $position)
    };
}

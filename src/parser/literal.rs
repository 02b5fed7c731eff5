//! Conversion of raw literal token text into values.
//!
//! These functions know nothing about the parser and fail with a bare
//! [`ErrorImpl`]; the caller positions it at the literal's token.

use crate::errors::errors::ErrorImpl;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Integer(u64),
    Floating(f64),
}

/// Reads a number token. The prefix selects the base, and a `.` or an `f`/`d` suffix makes a decimal number floating.
pub fn read_numeric(text: &str) -> Result<NumericValue, ErrorImpl> {
    let prefixed = [("0x", 16, "hexadecimal"), ("0X", 16, "hexadecimal"), ("0b", 2, "binary"), ("0o", 8, "octal")];
    for (prefix, base, base_name) in prefixed {
        if let Some(digits) = text.strip_prefix(prefix) {
            return read_integer(digits, base, base_name, text).map(NumericValue::Integer);
        }
    }

    if text.contains('.') || text.ends_with('f') || text.ends_with('d') {
        return read_floating(text).map(NumericValue::Floating);
    }

    read_integer(text, 10, "decimal", text).map(NumericValue::Integer)
}

/// Accumulates `digits` in `base`, skipping `_` separators.
///
/// `literal` is the full token text, used in error messages.
pub fn read_integer(
    digits: &str,
    base: u32,
    base_name: &'static str,
    literal: &str,
) -> Result<u64, ErrorImpl> {
    let malformed = || ErrorImpl::MalformedLiteral {
        base: base_name,
        literal: literal.to_string(),
    };

    let mut value: u64 = 0;
    let mut seen_digit = false;
    for ch in digits.chars().filter(|ch| *ch != '_') {
        let digit = ch.to_digit(base).ok_or_else(malformed)?;
        value = value
            .checked_mul(base as u64)
            .and_then(|value| value.checked_add(digit as u64))
            .ok_or_else(|| ErrorImpl::UnrepresentableLiteral {
                literal: literal.to_string(),
            })?;
        seen_digit = true;
    }

    if !seen_digit {
        return Err(malformed());
    }

    Ok(value)
}

pub fn read_floating(text: &str) -> Result<f64, ErrorImpl> {
    let malformed = || ErrorImpl::MalformedLiteral {
        base: "floating-point",
        literal: text.to_string(),
    };

    if text.matches('.').count() > 1 {
        return Err(malformed());
    }

    let trimmed = text
        .strip_suffix('f')
        .or_else(|| text.strip_suffix('d'))
        .unwrap_or(text);
    let cleaned: String = trimmed.chars().filter(|ch| *ch != '_').collect();

    // `f64::from_str` also takes `inf`, `nan` and a leading `.` or sign
    if !cleaned.starts_with(|ch: char| ch.is_ascii_digit()) {
        return Err(malformed());
    }

    let value: f64 = cleaned.parse().map_err(|_| malformed())?;
    if value.is_infinite() {
        return Err(ErrorImpl::UnrepresentableLiteral {
            literal: text.to_string(),
        });
    }

    Ok(value)
}

/// Reads a string token, quotes included.
pub fn read_string(raw: &str) -> Result<String, ErrorImpl> {
    match raw.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
        Some(inner) => Ok(unescape(inner)),
        None => Err(ErrorImpl::InternalError {
            message: format!("string token `{}` is not delimited by quotes", raw),
        }),
    }
}

/// Reads a rune token, quotes included. The unescaped token must be exactly quote, character, quote.
pub fn read_rune(raw: &str) -> Result<char, ErrorImpl> {
    let unescaped: Vec<char> = unescape(raw).chars().collect();
    match unescaped.len() {
        3 => Ok(unescaped[1]),
        len if len < 3 => Err(ErrorImpl::InternalError {
            message: format!("rune token `{}` is too short", raw),
        }),
        _ => Err(ErrorImpl::RuneTooLong {
            literal: raw.to_string(),
        }),
    }
}

/// Replaces escape sequences with the characters they stand for.
///
/// Unknown escapes, and a `\x` without hex digits, are kept as written.
pub fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        let Some(escape) = chars.next() else {
            result.push('\\');
            break;
        };

        match escape {
            'a' => result.push('\x07'),
            'b' => result.push('\x08'),
            'f' => result.push('\x0c'),
            'n' => result.push('\n'),
            'r' => result.push('\r'),
            't' => result.push('\t'),
            'v' => result.push('\x0b'),
            '0' => result.push('\0'),
            '\\' | '\'' | '"' => result.push(escape),
            'x' => {
                let mut hex = String::new();
                while hex.len() < 2 {
                    match chars.peek() {
                        Some(digit) if digit.is_ascii_hexdigit() => {
                            hex.push(*digit);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => result.push(decoded),
                    None => {
                        result.push_str("\\x");
                        result.push_str(&hex);
                    }
                }
            }
            other => {
                result.push('\\');
                result.push(other);
            }
        }
    }

    result
}

use std::rc::Rc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &Regex);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

/// Reference tokenizer producing the token stream the parser consumes.
///
/// Patterns are tried in order and the first one matching at the current
/// position wins, so longer operators are listed before their prefixes.
#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
}

fn pattern(regex: &str, handler: RegexHandler) -> Result<RegexPattern, Error> {
    let regex = Regex::new(regex)
        .map_err(|err| Error::internal(format!("invalid lexer pattern: {}", err), Position::null()))?;
    Ok(RegexPattern { regex, handler })
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Result<Lexer, Error> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Ok(Lexer {
            pos: 0,
            line: 1,
            column: 1,
            tokens: vec![],
            patterns: vec![
                pattern(r"^\s+", skip_handler)?,
                pattern(r"^///[^\n]*", MK_DEFAULT_HANDLER!(TokenKind::DocComment))?,
                pattern(r"^//[^\n]*", MK_DEFAULT_HANDLER!(TokenKind::Comment))?,
                pattern(r"^(?s)/\*.*?\*/", MK_DEFAULT_HANDLER!(TokenKind::Comment))?,
                pattern(r"^[0-9][0-9A-Za-z_]*(\.[0-9A-Za-z_]+)*", MK_DEFAULT_HANDLER!(TokenKind::Number))?,
                pattern(r"^[A-Za-z_][A-Za-z0-9_]*", MK_DEFAULT_HANDLER!(TokenKind::Identifier))?,
                pattern(r#"^"(\\.|[^"\\\n])*""#, MK_DEFAULT_HANDLER!(TokenKind::String))?,
                pattern(r"^'(\\.|[^'\\\n])+'", MK_DEFAULT_HANDLER!(TokenKind::Rune))?,
                pattern(
                    r"^(<<|>>|<=|>=|==|!=|&&|\|\||[-+*/%<>=!~&|^:])",
                    MK_DEFAULT_HANDLER!(TokenKind::Operator),
                )?,
                pattern(r"^[(){}\[\],;.]", MK_DEFAULT_HANDLER!(TokenKind::Separator))?,
            ],
            source,
            file: file_name,
        })
    }

    /// Advances past `text`, which must be the source text at the current position.
    pub fn advance_n(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += text.len();
    }

    pub fn push(&mut self, token: Token) {
        token.debug();
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    /// Text `regex` matches at the current position, or an empty string.
    pub fn matched(&self, regex: &Regex) -> String {
        regex
            .find(self.remainder())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    pub fn position(&self) -> Position {
        Position::new(Rc::clone(&self.file), self.line, self.column)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = lexer.matched(regex);
    lexer.advance_n(&matched);
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file)?;
    let patterns = lex.patterns.clone();

    while !lex.at_eof() {
        let before = lex.pos;

        let pattern = patterns
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None => {
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken {
                        token: lex.at().to_string(),
                    },
                    lex.position(),
                ))
            }
        }

        if lex.pos == before {
            return Err(Error::internal(
                format!("lexer made no progress at `{}`", lex.at()),
                lex.position(),
            ));
        }
    }

    Ok(lex.tokens)
}

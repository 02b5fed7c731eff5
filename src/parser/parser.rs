//! Token cursor and parse driver.
//!
//! The [`Parser`] owns the token stream, the scope table and the entity
//! tables everything it resolves is registered in. Grammar functions in the
//! sibling modules take `&mut Parser`, probe the stream with [`Parser::matches`]
//! and [`Parser::matches_sequence`], and only consume once they have committed
//! to a production.

use std::{collections::HashMap, rc::Rc, time::Instant};

use crate::{
    ast::{
        ast::{File, Node},
        operators::BinOpType,
        symbols::Symbols,
    },
    errors::errors::{Error, ErrorImpl, END_OF_FILE},
    lexer::tokens::{Token, TokenKind},
    semantic::analyzer::{SemanticAnalyzer, SemanticPass},
    Position, Span, MK_INTERNAL_ERROR,
};

use super::{
    lookups::{create_token_lookups, BPLookup, BindingPower},
    scope::ScopeTable,
    stmt::parse_node,
};

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    file: Rc<String>,
    scopes: ScopeTable,
    symbols: Symbols,
    binding_power_lookup: BPLookup,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        let mut symbols = Symbols::new();
        let scopes = ScopeTable::new(&mut symbols);

        let mut parser = Parser {
            tokens,
            pos: 0,
            file,
            scopes,
            symbols,
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// The token `ahead` positions past the cursor, or `None` past the end of the stream.
    pub fn peek(&self, ahead: usize) -> Option<&Token> {
        self.tokens.get(self.pos + ahead)
    }

    /// Returns the token under the cursor and advances past it.
    ///
    /// Callers check with [`Parser::matches`] first, so running out of tokens here is an internal error.
    pub fn consume(&mut self) -> Result<Token, Error> {
        match self.tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                Ok(token.clone())
            }
            None => Err(MK_INTERNAL_ERROR!(
                self.get_position(),
                "consumed past the end of the token stream"
            )),
        }
    }

    /// True if the token `ahead` positions away has `kind` and, unless `text` is empty, exactly `text`.
    pub fn matches(&self, ahead: usize, kind: TokenKind, text: &str) -> bool {
        match self.peek(ahead) {
            Some(token) => token.kind == kind && (text.is_empty() || token.value == text),
            None => false,
        }
    }

    /// [`Parser::matches`] over consecutive tokens starting at the cursor.
    pub fn matches_sequence(&self, pattern: &[(TokenKind, &str)]) -> bool {
        pattern
            .iter()
            .enumerate()
            .all(|(ahead, (kind, text))| self.matches(ahead, *kind, text))
    }

    /// Consumes the next token if it matches, otherwise fails with `expected` describing what was wanted.
    pub fn expect(&mut self, kind: TokenKind, text: &str, expected: &str) -> Result<Token, Error> {
        if self.matches(0, kind, text) {
            self.consume()
        } else {
            Err(self.error(ErrorImpl::UnexpectedToken {
                expected: expected.to_string(),
                found: self.found(),
            }))
        }
    }

    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    pub fn skip_comments(&mut self) {
        while self.peek(0).is_some_and(Token::is_comment) {
            self.pos += 1;
        }
    }

    /// Text of the token under the cursor, for diagnostics.
    pub fn found(&self) -> String {
        match self.peek(0) {
            Some(token) => token.value.clone(),
            None => END_OF_FILE.to_string(),
        }
    }

    /// Position of the token under the cursor, or the end of the last token once the stream is exhausted.
    pub fn get_position(&self) -> Position {
        match self.tokens.get(self.pos).or_else(|| self.tokens.last()) {
            Some(token) if self.pos < self.tokens.len() => token.span.start.clone(),
            Some(token) => token.span.end.clone(),
            None => Position::new(Rc::clone(&self.file), 1, 1),
        }
    }

    /// End of the most recently consumed token.
    pub fn previous_end(&self) -> Position {
        match self.pos.checked_sub(1).and_then(|index| self.tokens.get(index)) {
            Some(token) => token.span.end.clone(),
            None => self.get_position(),
        }
    }

    /// Span from `start` to the end of the most recently consumed token.
    pub fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.previous_end())
    }

    /// An error positioned at the token under the cursor.
    pub fn error(&self, error: ErrorImpl) -> Error {
        Error::new(error, self.get_position())
    }

    pub fn push_scope(&mut self) {
        self.scopes.push();
        log::debug!("entered scope (depth {})", self.scopes.depth());
    }

    pub fn pop_scope(&mut self) -> Result<(), Error> {
        match self.scopes.pop() {
            Some(_) => {
                log::debug!("left scope (depth {})", self.scopes.depth());
                Ok(())
            }
            None => Err(MK_INTERNAL_ERROR!(
                self.get_position(),
                "attempted to pop the global scope"
            )),
        }
    }

    pub fn scopes(&self) -> &ScopeTable {
        &self.scopes
    }

    pub fn scopes_mut(&mut self) -> &mut ScopeTable {
        &mut self.scopes
    }

    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut Symbols {
        &mut self.symbols
    }

    /// Precedence level of a binary operator, `None` if it takes no part in binary expressions.
    pub fn get_precedence(&self, op: BinOpType) -> Option<u8> {
        self.binding_power_lookup.get(&op).map(|bp| bp.level())
    }

    pub fn binary(&mut self, op: BinOpType, binding_power: BindingPower) {
        self.binding_power_lookup.insert(op, binding_power);
    }

    pub fn into_symbols(self) -> Symbols {
        self.symbols
    }
}

/// Options for a parse run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Log start and finish banners and every top-level node at `info` level
    pub verbose: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        ParseOptions::default()
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Parses a token stream into a [`File`] and runs the default semantic analysis over it.
pub fn parse(tokens: Vec<Token>, verbose: bool) -> Result<File, Error> {
    parse_with_options(tokens, &ParseOptions::new().verbose(verbose))
}

pub fn parse_with_options(tokens: Vec<Token>, options: &ParseOptions) -> Result<File, Error> {
    parse_with_analyzer(tokens, options, &mut SemanticAnalyzer::new())
}

/// Parses a token stream and hands the finished [`File`] to `analyzer`.
///
/// The first error aborts the run. Nothing parsed up to that point is returned.
pub fn parse_with_analyzer(
    tokens: Vec<Token>,
    options: &ParseOptions,
    analyzer: &mut dyn SemanticPass,
) -> Result<File, Error> {
    let file_name = match tokens.first() {
        Some(token) => Rc::clone(&token.span.start.file),
        None => Rc::new(String::from("<empty>")),
    };

    if options.verbose {
        log::info!("Started parsing {}", file_name);
    }
    let started = Instant::now();

    let mut parser = Parser::new(tokens, Rc::clone(&file_name));
    let mut nodes: Vec<Node> = vec![];

    while parser.has_tokens() {
        match parse_node(&mut parser)? {
            Some(node) => nodes.push(node),
            None => {
                if !parser.has_tokens() {
                    break;
                }
                let skipped = parser.consume()?;
                log::debug!("skipped `{}` at {}", skipped.value, skipped.span.start);
            }
        }
    }

    let mut file = File::new(file_name, parser.into_symbols());
    file.nodes = nodes;
    analyzer.analyze(&mut file)?;

    if options.verbose {
        for node in &file.nodes {
            log::info!("{}", file.render_node(node));
        }
        log::info!(
            "Finished parsing {} ({}ms)",
            file.name,
            started.elapsed().as_millis()
        );
    }

    Ok(file)
}

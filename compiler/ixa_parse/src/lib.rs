//! Ixa Parse - recursive-descent parser for index expressions.
//!
//! Produces a flat [`ExprArena`]; see [`grammar`] for the accepted syntax.

mod cursor;
mod grammar;

use ixa_ir::{ExprArena, ExprId, Span};
use ixa_lexer::{lex, LexError, Token};

/// Parse failure with the offending location.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        ParseError {
            message: message.into(),
            span,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::new(err.to_string(), err.span())
    }
}

/// A parsed expression and the arena that owns it.
#[derive(Clone, Debug)]
pub struct Parsed {
    pub arena: ExprArena,
    pub root: ExprId,
}

/// Recursive-descent parser over a token list.
pub struct Parser<'src> {
    tokens: Vec<Token>,
    pos: usize,
    source: &'src str,
    arena: ExprArena,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Result<Self, ParseError> {
        Ok(Parser {
            tokens: lex(source)?,
            pos: 0,
            source,
            arena: ExprArena::new(),
        })
    }

    /// Parse a complete expression; trailing tokens are an error.
    pub fn parse(mut self) -> Result<Parsed, ParseError> {
        let root = self.parse_expr()?;
        if let Some(token) = self.current() {
            return Err(ParseError::new(
                format!("unexpected {} after expression", token.kind.describe()),
                token.span,
            ));
        }
        Ok(Parsed {
            arena: self.arena,
            root,
        })
    }
}

/// Lex and parse `source`.
pub fn parse(source: &str) -> Result<Parsed, ParseError> {
    Parser::new(source)?.parse()
}

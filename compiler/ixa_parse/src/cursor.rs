//! Token navigation.

use ixa_ir::Span;
use ixa_lexer::{Token, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    #[inline]
    pub(crate) fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> Option<&TokenKind> {
        self.current().map(|t| &t.kind)
    }

    /// Span of the current token, or an empty span at the end of input.
    pub(crate) fn current_span(&self) -> Span {
        match self.current() {
            Some(token) => token.span,
            None => {
                let end = u32::try_from(self.source.len()).unwrap_or(u32::MAX);
                Span::new(end, end)
            }
        }
    }

    #[inline]
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Consume the current token, returning its span.
    pub(crate) fn advance(&mut self) -> Span {
        let span = self.current_span();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        span
    }

    /// Consume `kind` if it is next.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> Option<Span> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    pub(crate) fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        match self.eat(kind) {
            Some(span) => Ok(span),
            None => Err(self.unexpected(&kind.describe())),
        }
    }

    /// Error for the current token when `expected` was wanted.
    #[cold]
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        let found = match self.current_kind() {
            Some(kind) => kind.describe(),
            None => "end of input".to_owned(),
        };
        ParseError::new(format!("expected {expected}, found {found}"), self.current_span())
    }
}

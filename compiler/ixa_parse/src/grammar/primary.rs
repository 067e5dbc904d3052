//! Primary expressions: literals, identifiers, calls, parentheses, tuples.

use ixa_ir::{Callee, Expr, ExprId, ExprKind, ExprRange, Span};
use ixa_lexer::TokenKind;

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let span = self.current_span();
        match self.current_kind() {
            Some(TokenKind::Int(n)) => {
                let n = *n;
                self.advance();
                Ok(self.arena.alloc_expr(Expr::new(ExprKind::Int(n), span)))
            }
            Some(TokenKind::Ident(name)) => {
                let name = name.clone();
                self.advance();
                if self.check(&TokenKind::LParen) {
                    self.parse_call(name, span)
                } else {
                    Ok(self.arena.alloc_expr(Expr::new(ExprKind::Ident(name), span)))
                }
            }
            Some(TokenKind::LParen) => self.parse_paren(),
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// `name(args)`; the name was already consumed.
    fn parse_call(&mut self, name: String, name_span: Span) -> Result<ExprId, ParseError> {
        let open = self.expect(&TokenKind::LParen)?;
        let mut args = Vec::new();
        while !self.check(&TokenKind::RParen) {
            args.push(self.parse_expr()?);
            check_list_len(args.len(), "arguments", open)?;
            if self.eat(&TokenKind::Comma).is_none() {
                break;
            }
        }
        let end = self.expect(&TokenKind::RParen)?;
        let args = self.arena.alloc_list(args);
        Ok(self.arena.alloc_expr(Expr::new(
            ExprKind::Call {
                func: Callee::resolve(&name),
                args,
            },
            name_span.merge(end),
        )))
    }

    /// `(expr)` or a tuple; a single element needs a trailing comma.
    fn parse_paren(&mut self) -> Result<ExprId, ParseError> {
        let start = self.expect(&TokenKind::LParen)?;
        let first = self.parse_expr()?;
        if self.eat(&TokenKind::Comma).is_none() {
            self.expect(&TokenKind::RParen)?;
            return Ok(first);
        }
        let mut elems = vec![first];
        while !self.check(&TokenKind::RParen) {
            elems.push(self.parse_expr()?);
            check_list_len(elems.len(), "tuple components", start)?;
            if self.eat(&TokenKind::Comma).is_none() {
                break;
            }
        }
        let end = self.expect(&TokenKind::RParen)?;
        let elems = self.arena.alloc_list(elems);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Tuple(elems), start.merge(end))))
    }
}

/// Reject lists an `ExprRange` cannot hold, pointing at the opening paren.
fn check_list_len(len: usize, what: &str, open: Span) -> Result<(), ParseError> {
    if len > ExprRange::MAX_LEN {
        return Err(ParseError::new(
            format!("too many {what}, at most {} are allowed", ExprRange::MAX_LEN),
            open,
        ));
    }
    Ok(())
}

//! Expression grammar.
//!
//! ```text
//! expr     := additive (":" additive (":" additive)?)?
//! additive := mult (("+" | "-" | "±" | "∓") mult)*
//! mult     := unary (("*" | "/" | "%" | "∩" | "&") unary)*
//! unary    := ("-" | "+") unary | "$" primary | postfix
//! postfix  := IDENT "(" args? ")" | primary
//! primary  := INT | IDENT | "(" expr ")" | "(" expr "," (expr ("," expr)*)? ","? ")"
//! ```
//!
//! # Module Structure
//!
//! - `mod.rs`: Entry point (`parse_expr`), ranges and the binary precedence chain
//! - `operators.rs`: Operator matching helpers
//! - `primary.rs`: Literals, identifiers, calls, tuples, escapes

mod operators;
mod primary;

use ixa_ir::{Expr, ExprId, ExprKind};
use ixa_lexer::TokenKind;
use ixa_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression, including a trailing range suffix.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested input cannot overflow
    /// the native stack.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_range())
    }

    /// `a`, `a:b` or `a:s:b`.
    fn parse_range(&mut self) -> Result<ExprId, ParseError> {
        let first = self.parse_additive()?;
        if self.eat(&TokenKind::Colon).is_none() {
            return Ok(first);
        }
        let second = self.parse_additive()?;
        let (step, last) = if self.eat(&TokenKind::Colon).is_some() {
            (second, self.parse_additive()?)
        } else {
            (ExprId::INVALID, second)
        };
        let span = self.span_of(first).merge(self.span_of(last));
        Ok(self.arena.alloc_expr(Expr::new(ExprKind::Range { first, step, last }, span)))
    }

    /// `+ - ± ∓`
    fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = self.match_additive_op() {
            self.advance();
            let right = self.parse_multiplicative()?;
            left = self.alloc_binary(op, left, right);
        }
        Ok(left)
    }

    /// `* / % ∩`
    fn parse_multiplicative(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = self.match_multiplicative_op() {
            self.advance();
            let right = self.parse_unary()?;
            left = self.alloc_binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        if let Some(op) = self.match_unary_op() {
            let start = self.advance();
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            let span = start.merge(self.span_of(operand));
            return Ok(self.arena.alloc_expr(Expr::new(ExprKind::Unary { op, operand }, span)));
        }
        if let Some(start) = self.eat(&TokenKind::Dollar) {
            let inner = self.parse_primary()?;
            let span = start.merge(self.span_of(inner));
            return Ok(self.arena.alloc_expr(Expr::new(ExprKind::Escape(inner), span)));
        }
        self.parse_primary()
    }

    fn alloc_binary(&mut self, op: ixa_ir::BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.span_of(left).merge(self.span_of(right));
        self.arena.alloc_expr(Expr::new(ExprKind::Binary { op, left, right }, span))
    }

    #[inline]
    fn span_of(&self, id: ExprId) -> ixa_ir::Span {
        self.arena.get_expr(id).span
    }
}

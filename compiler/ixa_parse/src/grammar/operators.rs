//! Operator matching helpers.

use ixa_ir::{BinaryOp, UnaryOp};
use ixa_lexer::TokenKind;

use crate::Parser;

impl Parser<'_> {
    pub(crate) fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.current_kind()? {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::PlusMinus => Some(BinaryOp::Stretch),
            TokenKind::MinusPlus => Some(BinaryOp::Shrink),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.current_kind()? {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Rem),
            TokenKind::Cap => Some(BinaryOp::Cap),
            _ => None,
        }
    }

    pub(crate) fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.current_kind()? {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Plus => Some(UnaryOp::Plus),
            _ => None,
        }
    }
}

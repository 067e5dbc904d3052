//! Operator dispatch.
//!
//! Direct enum-based dispatch: the operator set is fixed, so matching on
//! [`Op`] keeps the call sites exhaustive. Operands are already canonical;
//! the generic entry points in the crate root normalize first.

use ixa_value::{arity_mismatch, Canonical, IxResult};

use crate::{cap, shift, stretch};

/// The arithmetic operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Op {
    Plus,
    Minus,
    Cap,
    Stretch,
    Shrink,
}

impl Op {
    pub const fn name(self) -> &'static str {
        match self {
            Op::Plus => "plus",
            Op::Minus => "minus",
            Op::Cap => "cap",
            Op::Stretch => "stretch",
            Op::Shrink => "shrink",
        }
    }

    /// Whether the operator also has a one-operand form.
    pub const fn has_unary(self) -> bool {
        matches!(self, Op::Plus | Op::Minus)
    }

    #[tracing::instrument(level = "trace", skip_all, fields(op = self.name()))]
    pub fn apply_binary(self, left: &Canonical, right: &Canonical) -> IxResult<Canonical> {
        let result = match self {
            Op::Plus => shift::add(left, right),
            Op::Minus => shift::sub(left, right),
            Op::Cap => cap::intersect(left, right),
            Op::Stretch => stretch::stretch(left, right),
            Op::Shrink => stretch::shrink(left, right),
        };
        tracing::trace!(%left, %right, ?result);
        result
    }

    #[tracing::instrument(level = "trace", skip_all, fields(op = self.name()))]
    pub fn apply_unary(self, operand: &Canonical) -> IxResult<Canonical> {
        match self {
            Op::Plus => Ok(operand.clone()),
            Op::Minus => shift::negate(operand),
            Op::Cap | Op::Stretch | Op::Shrink => {
                Err(arity_mismatch(self.name(), "2 arguments", 1))
            }
        }
    }
}

//! Source-text rendering of expression trees.
//!
//! Rewritten trees print as nested calls, for example
//! `forward(plus(2:6, 1))`. Operator nodes that survive rewriting (plain
//! arithmetic, escaped subtrees) print infix with explicit parentheses.

use std::fmt;

use crate::{ExprArena, ExprId, ExprKind};

/// `Display` adapter returned by [`ExprArena::display`].
pub struct DisplayExpr<'a> {
    arena: &'a ExprArena,
    id: ExprId,
}

impl<'a> DisplayExpr<'a> {
    pub(crate) fn new(arena: &'a ExprArena, id: ExprId) -> Self {
        DisplayExpr { arena, id }
    }

    fn child(&self, id: ExprId) -> DisplayExpr<'a> {
        DisplayExpr::new(self.arena, id)
    }

    /// Nested ranges, unary operators and negative literals are parenthesized
    /// inside a range; binary nodes already carry their own parentheses.
    fn fmt_range_operand(&self, f: &mut fmt::Formatter<'_>, id: ExprId) -> fmt::Result {
        match self.arena.get_expr(id).kind {
            ExprKind::Int(n) if n < 0 => write!(f, "({n})"),
            ExprKind::Int(_)
            | ExprKind::Ident(_)
            | ExprKind::Call { .. }
            | ExprKind::Tuple(_)
            | ExprKind::Escape(_)
            | ExprKind::Binary { .. } => write!(f, "{}", self.child(id)),
            ExprKind::Range { .. } | ExprKind::Unary { .. } => {
                write!(f, "({})", self.child(id))
            }
        }
    }

    fn fmt_list(&self, f: &mut fmt::Formatter<'_>, ids: &[ExprId]) -> fmt::Result {
        for (i, id) in ids.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", self.child(*id))?;
        }
        Ok(())
    }
}

impl fmt::Display for DisplayExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.arena.get_expr(self.id).kind {
            ExprKind::Int(n) => write!(f, "{n}"),
            ExprKind::Ident(name) => write!(f, "{name}"),
            ExprKind::Range { first, step, last } => {
                self.fmt_range_operand(f, *first)?;
                write!(f, ":")?;
                if step.is_present() {
                    self.fmt_range_operand(f, *step)?;
                    write!(f, ":")?;
                }
                self.fmt_range_operand(f, *last)
            }
            ExprKind::Tuple(range) => {
                let ids = self.arena.get_list(*range);
                write!(f, "(")?;
                self.fmt_list(f, ids)?;
                if ids.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            ExprKind::Binary { op, left, right } => write!(
                f,
                "({} {} {})",
                self.child(*left),
                op.as_symbol(),
                self.child(*right)
            ),
            ExprKind::Unary { op, operand } => {
                write!(f, "{}{}", op.as_symbol(), self.child(*operand))
            }
            ExprKind::Call { func, args } => {
                write!(f, "{}(", func.name())?;
                self.fmt_list(f, self.arena.get_list(*args))?;
                write!(f, ")")
            }
            ExprKind::Escape(inner) => write!(f, "$({})", self.child(*inner)),
        }
    }
}

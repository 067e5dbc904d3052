//! Ixa Rewrite - replaces operator syntax with calls to the index operators.
//!
//! | syntax | rewritten to |
//! |---|---|
//! | `a + b`, `+a` | `plus(a, b)`, `plus(a)` |
//! | `a - b`, `-a` | `minus(a, b)`, `minus(a)` |
//! | `a ∩ b`, `a & b`, `intersect(a, b)` | `cap(a, b)` |
//! | `a ± k` | `stretch(a, k)` |
//! | `a ∓ k` | `shrink(a, k)` |
//! | `$(e)` | `identity(e)`, `e` copied verbatim |
//!
//! `*`, `/` and `%` are left alone. The result is wrapped in `forward(..)` or
//! `backward(..)` depending on the requested [`Direction`].

use std::fmt;

use ixa_ir::{BinaryOp, Builtin, Callee, Expr, ExprArena, ExprId, ExprKind, Span, UnaryOp};
use ixa_stack::ensure_sufficient_stack;

/// Which direction wrapper the rewritten expression receives.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub const fn builtin(self) -> Builtin {
        match self {
            Direction::Forward => Builtin::Forward,
            Direction::Backward => Builtin::Backward,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.builtin().name())
    }
}

/// A rewritten expression in its own arena.
#[derive(Clone, Debug)]
pub struct Rewritten {
    pub arena: ExprArena,
    pub root: ExprId,
}

impl fmt::Display for Rewritten {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.arena.display(self.root))
    }
}

/// Rewrite `root` and wrap it in the direction call.
#[tracing::instrument(level = "debug", skip_all, fields(%direction))]
pub fn rewrite(arena: &ExprArena, root: ExprId, direction: Direction) -> Rewritten {
    let mut rewriter = Rewriter::new(arena);
    let body = rewriter.rewrite_expr(root);
    let span = arena.get_expr(root).span;
    let root = rewriter.call(direction.builtin(), &[body], span);
    let rewritten = Rewritten {
        arena: rewriter.dst,
        root,
    };
    tracing::debug!(result = %rewritten, "rewrote expression");
    rewritten
}

/// Rewrite `root` without a direction wrapper.
pub fn rewrite_body(arena: &ExprArena, root: ExprId) -> Rewritten {
    let mut rewriter = Rewriter::new(arena);
    let root = rewriter.rewrite_expr(root);
    Rewritten {
        arena: rewriter.dst,
        root,
    }
}

/// Copies a tree from `src` into a fresh arena, substituting operators.
struct Rewriter<'a> {
    src: &'a ExprArena,
    dst: ExprArena,
}

impl<'a> Rewriter<'a> {
    fn new(src: &'a ExprArena) -> Self {
        Rewriter {
            src,
            dst: ExprArena::new(),
        }
    }

    fn rewrite_expr(&mut self, id: ExprId) -> ExprId {
        ensure_sufficient_stack(|| self.rewrite_expr_inner(id))
    }

    fn rewrite_expr_inner(&mut self, id: ExprId) -> ExprId {
        let src = self.src;
        let Expr { kind, span } = src.get_expr(id);
        let span = *span;
        match kind {
            ExprKind::Int(_) | ExprKind::Ident(_) => {
                self.dst.alloc_expr(Expr::new(kind.clone(), span))
            }
            ExprKind::Range { first, step, last } => {
                let (first, step, last) = (*first, *step, *last);
                let first = self.rewrite_expr(first);
                let step = if step.is_present() {
                    self.rewrite_expr(step)
                } else {
                    ExprId::INVALID
                };
                let last = self.rewrite_expr(last);
                self.dst
                    .alloc_expr(Expr::new(ExprKind::Range { first, step, last }, span))
            }
            ExprKind::Tuple(elems) => {
                let elems = self.rewrite_list(*elems);
                let elems = self.dst.alloc_list(elems);
                self.dst.alloc_expr(Expr::new(ExprKind::Tuple(elems), span))
            }
            ExprKind::Binary { op, left, right } => {
                let (op, left, right) = (*op, *left, *right);
                let left = self.rewrite_expr(left);
                let right = self.rewrite_expr(right);
                match substitute_binary(op) {
                    Some(builtin) => self.call(builtin, &[left, right], span),
                    None => self
                        .dst
                        .alloc_expr(Expr::new(ExprKind::Binary { op, left, right }, span)),
                }
            }
            ExprKind::Unary { op, operand } => {
                let op = *op;
                let operand = self.rewrite_expr(*operand);
                let builtin = match op {
                    UnaryOp::Neg => Builtin::Minus,
                    UnaryOp::Plus => Builtin::Plus,
                };
                self.call(builtin, &[operand], span)
            }
            ExprKind::Call { func, args } => {
                let func = match func {
                    Callee::Builtin(Builtin::Intersect) => Callee::Builtin(Builtin::Cap),
                    other => other.clone(),
                };
                let args = self.rewrite_list(*args);
                let args = self.dst.alloc_list(args);
                self.dst.alloc_expr(Expr::new(ExprKind::Call { func, args }, span))
            }
            ExprKind::Escape(inner) => {
                let inner = self.copy_verbatim(*inner);
                self.call(Builtin::Identity, &[inner], span)
            }
        }
    }

    fn rewrite_list(&mut self, list: ixa_ir::ExprRange) -> Vec<ExprId> {
        let ids = self.src.get_list(list).to_vec();
        ids.into_iter().map(|id| self.rewrite_expr(id)).collect()
    }

    /// Copy an escaped subtree without substitution.
    fn copy_verbatim(&mut self, id: ExprId) -> ExprId {
        ensure_sufficient_stack(|| {
            let Expr { kind, span } = self.src.get_expr(id).clone();
            let kind = match kind {
                ExprKind::Int(_) | ExprKind::Ident(_) => kind,
                ExprKind::Range { first, step, last } => ExprKind::Range {
                    first: self.copy_verbatim(first),
                    step: if step.is_present() {
                        self.copy_verbatim(step)
                    } else {
                        ExprId::INVALID
                    },
                    last: self.copy_verbatim(last),
                },
                ExprKind::Tuple(elems) => ExprKind::Tuple(self.copy_list(elems)),
                ExprKind::Binary { op, left, right } => ExprKind::Binary {
                    op,
                    left: self.copy_verbatim(left),
                    right: self.copy_verbatim(right),
                },
                ExprKind::Unary { op, operand } => ExprKind::Unary {
                    op,
                    operand: self.copy_verbatim(operand),
                },
                ExprKind::Call { func, args } => ExprKind::Call {
                    func,
                    args: self.copy_list(args),
                },
                ExprKind::Escape(inner) => ExprKind::Escape(self.copy_verbatim(inner)),
            };
            self.dst.alloc_expr(Expr::new(kind, span))
        })
    }

    fn copy_list(&mut self, list: ixa_ir::ExprRange) -> ixa_ir::ExprRange {
        let ids = self.src.get_list(list).to_vec();
        let copied: Vec<ExprId> = ids.into_iter().map(|id| self.copy_verbatim(id)).collect();
        self.dst.alloc_list(copied)
    }

    fn call(&mut self, builtin: Builtin, args: &[ExprId], span: Span) -> ExprId {
        let args = self.dst.alloc_list(args.iter().copied());
        self.dst.alloc_expr(Expr::new(
            ExprKind::Call {
                func: Callee::Builtin(builtin),
                args,
            },
            span,
        ))
    }
}

/// The operator substitution table; `None` keeps the plain operator.
const fn substitute_binary(op: BinaryOp) -> Option<Builtin> {
    match op {
        BinaryOp::Add => Some(Builtin::Plus),
        BinaryOp::Sub => Some(Builtin::Minus),
        BinaryOp::Cap => Some(Builtin::Cap),
        BinaryOp::Stretch => Some(Builtin::Stretch),
        BinaryOp::Shrink => Some(Builtin::Shrink),
        BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => None,
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

//! Ixa IR - expression tree for index and range arithmetic.
//!
//! Expressions are stored flat in an [`ExprArena`] and referenced through
//! [`ExprId`] indices. Argument and tuple lists live in a side table and are
//! referenced through [`ExprRange`].
//!
//! The same representation is used before and after rewriting: the parser
//! produces `Binary`/`Unary` operator nodes, the rewriter replaces them by
//! `Call` nodes naming a [`Builtin`].

mod arena;
mod ast;
mod expr_id;
mod printer;
mod span;

pub use arena::ExprArena;
pub use ast::{BinaryOp, Builtin, Callee, Expr, ExprKind, UnaryOp};
pub use expr_id::{ExprId, ExprRange};
pub use printer::DisplayExpr;
pub use span::Span;

//! Flat storage for expression trees.

use crate::{DisplayExpr, Expr, ExprId, ExprRange};

/// Owns every node of one expression tree.
///
/// Nodes are appended and never removed; the rewriter builds a fresh arena
/// instead of editing one in place.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    lists: Vec<ExprId>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expression and return its ID.
    ///
    /// # Panics
    /// Panics if the arena already holds `u32::MAX` nodes.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded u32::MAX nodes"));
        self.exprs.push(expr);
        ExprId::new(index)
    }

    /// Append a list of expression IDs (call arguments, tuple components).
    ///
    /// Callers bound the length by [`ExprRange::MAX_LEN`]; the parser
    /// reports longer lists as syntax errors.
    ///
    /// # Panics
    /// Panics if the list is longer than `ExprRange::MAX_LEN` or the list
    /// table exceeds `u32::MAX` entries.
    pub fn alloc_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = u32::try_from(self.lists.len())
            .unwrap_or_else(|_| panic!("expression list table exceeded u32::MAX entries"));
        self.lists.extend(ids);
        let len = u16::try_from(self.lists.len() - start as usize)
            .unwrap_or_else(|_| panic!("expression list longer than u16::MAX"));
        ExprRange::new(start, len)
    }

    /// Get an expression by ID.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this arena.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Get the IDs of a list.
    #[inline]
    pub fn get_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        &self.lists[start..start + range.len()]
    }

    /// Number of expression nodes.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Render the subtree rooted at `id` as source text.
    pub fn display(&self, id: ExprId) -> DisplayExpr<'_> {
        DisplayExpr::new(self, id)
    }
}

//! Stack growth guard for the recursive passes over index expressions.
//!
//! The parser, the rewriter and the evaluator all recurse once per nesting
//! level of an expression. Expressions are normally shallow, but generated
//! input (for example a chain of a few thousand `+` operators) would
//! otherwise overflow the native stack.
//!
//! - **Native targets**: grows the stack on demand with `stacker`.
//! - **WASM targets**: plain call, the runtime manages its own stack.

/// Remaining stack below which a new segment is allocated (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// Wrap the body of every function that recurses into sub-expressions:
///
/// ```text
/// fn eval_expr(&self, id: ExprId) -> IxResult<Value> {
///     ensure_sufficient_stack(|| self.eval_expr_inner(id))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version, calls `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

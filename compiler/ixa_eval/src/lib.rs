//! Ixa Eval - evaluates index expressions to canonical values.
//!
//! The two entry points, [`Evaluator::forward`] and [`Evaluator::backward`],
//! parse a source expression, rewrite its operators into calls to the index
//! operators, wrap it in the requested direction and evaluate it:
//!
//! ```
//! use ixa_eval::Evaluator;
//!
//! let eval = Evaluator::builder().bind_index("r", ixa_value::LinearRange::unit(2, 6)).build();
//! assert_eq!(eval.forward("r + 1")?.to_string(), "3:7");
//! assert_eq!(eval.backward("1 - (3:6)")?.to_string(), "-2:-1:-5");
//! # Ok::<(), ixa_value::IxError>(())
//! ```
//!
//! Errors carry the span of the innermost failing sub-expression.

mod environment;
mod evaluator;
mod interpreter;
mod value;

pub use environment::Environment;
pub use evaluator::{Evaluator, EvaluatorBuilder};
pub use ixa_rewrite::Direction;
pub use value::{HostValue, Value};

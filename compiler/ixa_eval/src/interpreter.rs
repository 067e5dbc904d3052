//! Tree-walking evaluation of one expression arena.

use ixa_ir::{BinaryOp, Builtin, Callee, ExprArena, ExprId, ExprKind, ExprRange, UnaryOp};
use ixa_normalize::from_components;
use ixa_ops::{to_backward, to_forward, Op};
use ixa_stack::ensure_sufficient_stack;
use ixa_value::checked;
use ixa_value::{
    arity_mismatch, missing_argument, undefined_operation, undefined_variable, unknown_function,
    Canonical, IxResult, LinearRange,
};

use crate::{Evaluator, Value};

pub(crate) struct Interpreter<'a> {
    evaluator: &'a Evaluator,
    arena: &'a ExprArena,
}

impl<'a> Interpreter<'a> {
    pub(crate) fn new(evaluator: &'a Evaluator, arena: &'a ExprArena) -> Self {
        Interpreter { evaluator, arena }
    }

    /// Evaluate `id`, attaching its span to errors that have none yet.
    pub(crate) fn eval_expr(&self, id: ExprId) -> IxResult<Value> {
        ensure_sufficient_stack(|| {
            let span = self.arena.get_expr(id).span;
            self.eval_expr_inner(id)
                .map_err(|e| e.with_default_span(span))
        })
    }

    fn eval_expr_inner(&self, id: ExprId) -> IxResult<Value> {
        match &self.arena.get_expr(id).kind {
            ExprKind::Int(n) => Ok(Value::Index(Canonical::Scalar(*n))),
            ExprKind::Ident(name) => self
                .evaluator
                .env()
                .lookup(name)
                .cloned()
                .ok_or_else(|| undefined_variable(name)),
            ExprKind::Range { first, step, last } => self.eval_range(*first, *step, *last),
            ExprKind::Tuple(elems) => self.eval_tuple(*elems),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_canonical(*left)?;
                let right = self.eval_canonical(*right)?;
                eval_plain_binary(*op, &left, &right).map(Value::Index)
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.eval_canonical(*operand)?;
                eval_plain_unary(*op, &operand).map(Value::Index)
            }
            ExprKind::Call { func, args } => self.eval_call(func, *args),
            ExprKind::Escape(inner) => self.eval_expr(*inner),
        }
    }

    fn eval_canonical(&self, id: ExprId) -> IxResult<Canonical> {
        let span = self.arena.get_expr(id).span;
        self.eval_expr(id)?
            .into_canonical(self.evaluator.registry())
            .map_err(|e| e.with_default_span(span))
    }

    /// Range literals take scalar bounds and step.
    fn eval_range(&self, first: ExprId, step: ExprId, last: ExprId) -> IxResult<Value> {
        let first = self.eval_scalar(first, ":")?;
        let step = if step.is_present() {
            self.eval_scalar(step, ":")?
        } else {
            1
        };
        let last = self.eval_scalar(last, ":")?;
        Ok(Value::Index(Canonical::Range(LinearRange::new(first, step, last)?)))
    }

    fn eval_scalar(&self, id: ExprId, operation: &str) -> IxResult<i64> {
        match self.eval_canonical(id)? {
            Canonical::Scalar(x) => Ok(x),
            other => Err(undefined_operation(operation, other.form(), None)
                .with_default_span(self.arena.get_expr(id).span)),
        }
    }

    fn eval_tuple(&self, elems: ExprRange) -> IxResult<Value> {
        let components = self
            .arena
            .get_list(elems)
            .iter()
            .map(|id| self.eval_canonical(*id))
            .collect::<IxResult<Vec<_>>>()?;
        let forms: Vec<&str> = components.iter().map(|c| c.form().name()).collect();
        let type_name = format!("({})", forms.join(", "));
        from_components(&type_name, components.into_iter().map(Ok)).map(Value::Index)
    }

    fn eval_call(&self, func: &Callee, args: ExprRange) -> IxResult<Value> {
        let builtin = match func {
            Callee::Builtin(builtin) => *builtin,
            Callee::Unknown(name) => return Err(unknown_function(name)),
        };
        let ids = self.arena.get_list(args);
        let name = builtin.name();
        tracing::trace!(function = name, args = ids.len(), "call");

        match builtin {
            Builtin::Plus | Builtin::Minus => {
                let op = if builtin == Builtin::Plus { Op::Plus } else { Op::Minus };
                match ids {
                    [] => Err(missing_argument(name)),
                    [x] => op.apply_unary(&self.eval_canonical(*x)?).map(Value::Index),
                    [a, b] => self.apply_binary(op, *a, *b),
                    _ => Err(arity_mismatch(name, "1 or 2 arguments", ids.len())),
                }
            }
            Builtin::Cap | Builtin::Intersect | Builtin::Stretch | Builtin::Shrink => {
                let op = match builtin {
                    Builtin::Stretch => Op::Stretch,
                    Builtin::Shrink => Op::Shrink,
                    _ => Op::Cap,
                };
                match ids {
                    [] => Err(missing_argument(name)),
                    [a, b] => self.apply_binary(op, *a, *b),
                    _ => Err(arity_mismatch(name, "2 arguments", ids.len())),
                }
            }
            Builtin::Forward | Builtin::Backward | Builtin::Normalize | Builtin::Identity => {
                let arg = match ids {
                    [] => return Err(missing_argument(name)),
                    [x] => *x,
                    _ => return Err(arity_mismatch(name, "1 argument", ids.len())),
                };
                match builtin {
                    Builtin::Identity => self.eval_expr(arg),
                    Builtin::Forward => to_forward(&self.eval_canonical(arg)?).map(Value::Index),
                    Builtin::Backward => to_backward(&self.eval_canonical(arg)?).map(Value::Index),
                    _ => self.eval_canonical(arg).map(Value::Index),
                }
            }
        }
    }

    fn apply_binary(&self, op: Op, left: ExprId, right: ExprId) -> IxResult<Value> {
        let left = self.eval_canonical(left)?;
        let right = self.eval_canonical(right)?;
        op.apply_binary(&left, &right).map(Value::Index)
    }
}

/// Operators left in place by the rewriter (`*`, `/`, `%`, and everything
/// inside `$(...)`) work on scalars only.
fn eval_plain_binary(op: BinaryOp, left: &Canonical, right: &Canonical) -> IxResult<Canonical> {
    let symbol = op.as_symbol();
    let (Canonical::Scalar(a), Canonical::Scalar(b)) = (left, right) else {
        return Err(undefined_operation(symbol, left.form(), Some(right.form())));
    };
    let (a, b) = (*a, *b);
    let result = match op {
        BinaryOp::Add => checked::add(a, b, "addition")?,
        BinaryOp::Sub => checked::sub(a, b, "subtraction")?,
        BinaryOp::Mul => checked::mul(a, b, "multiplication")?,
        BinaryOp::Div => checked::div(a, b, "division")?,
        BinaryOp::Rem => checked::rem(a, b, "remainder")?,
        BinaryOp::Cap | BinaryOp::Stretch | BinaryOp::Shrink => {
            return Err(undefined_operation(symbol, left.form(), Some(right.form())));
        }
    };
    Ok(Canonical::Scalar(result))
}

fn eval_plain_unary(op: UnaryOp, operand: &Canonical) -> IxResult<Canonical> {
    match (op, operand) {
        (UnaryOp::Neg, Canonical::Scalar(x)) => checked::neg(*x, "negation").map(Canonical::Scalar),
        (UnaryOp::Plus, Canonical::Scalar(x)) => Ok(Canonical::Scalar(*x)),
        _ => Err(undefined_operation(op.as_symbol(), operand.form(), None)),
    }
}

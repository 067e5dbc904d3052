//! Error types for normalization, the index operators and evaluation.
//!
//! `IxErrorKind` carries the structured category; `IxError` adds the source
//! location (filled in by the evaluator) and remedy notes. The factory
//! functions at the bottom are the public constructors: they pick the kind
//! and attach the notes that tell the user how to fix the expression.

use std::fmt;

use ixa_ir::{Builtin, Span};

use crate::{Canonical, Form};

/// Result of a normalization, an operator or an evaluation.
pub type IxResult<T = Canonical> = Result<T, IxError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IxErrorKind {
    #[error("`{function}` requires an argument")]
    MissingArgument { function: String },

    #[error("no normalization rule for values of type `{type_name}`")]
    UnsupportedType { type_name: String },

    #[error("stretch amount {amount} is not a multiple of the range step {step}")]
    InvalidStretchAmount { amount: i64, step: i64 },

    #[error("shrink amount {amount} is not a multiple of the range step {step}")]
    InvalidShrinkAmount { amount: i64, step: i64 },

    #[error("`{operation}` is not defined for {operands}")]
    UndefinedOperation { operation: String, operands: String },

    #[error("`{operation}` needs operands of equal dimensionality, got {left} and {right}")]
    DimensionMismatch {
        operation: String,
        left: usize,
        right: usize,
    },

    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: String },

    #[error("value {value} of type `{type_name}` does not fit in a 64-bit index")]
    IndexOutOfRange { value: String, type_name: String },

    #[error("range step cannot be zero")]
    ZeroStep,

    #[error("division by zero")]
    DivisionByZero,

    #[error("`{function}` expects {expected}, got {got}")]
    ArityMismatch {
        function: String,
        expected: String,
        got: usize,
    },

    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },

    #[error("unknown function: {name}")]
    UnknownFunction { name: String },

    #[error("{message}")]
    Syntax { message: String },
}

/// An error with its location and remedy notes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IxError {
    pub kind: IxErrorKind,
    /// Source location of the expression that failed, if known.
    pub span: Option<Span>,
    /// Suggestions shown below the message.
    pub notes: Vec<String>,
}

impl IxError {
    pub fn new(kind: IxErrorKind) -> Self {
        IxError {
            kind,
            span: None,
            notes: Vec::new(),
        }
    }

    /// Human-readable message (without notes).
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Attach `span` unless a more precise one was already recorded.
    ///
    /// Errors bubble up through enclosing calls; the innermost call sets the
    /// span first and outer calls leave it alone.
    #[must_use]
    pub fn with_default_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }
}

impl fmt::Display for IxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for IxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl From<IxErrorKind> for IxError {
    fn from(kind: IxErrorKind) -> Self {
        IxError::new(kind)
    }
}

const ESCAPE_HINT: &str = "if this operand is not an index, protect it with `$(...)`";

// Normalization errors

#[cold]
pub fn missing_argument(function: &str) -> IxError {
    IxError::new(IxErrorKind::MissingArgument {
        function: function.to_owned(),
    })
    .with_note(format!("call it with one value, e.g. `{function}(2:6)`"))
}

#[cold]
pub fn unsupported_type(type_name: &str) -> IxError {
    IxError::new(IxErrorKind::UnsupportedType {
        type_name: type_name.to_owned(),
    })
    .with_note(format!("register a normalization rule for `{type_name}`"))
    .with_note(ESCAPE_HINT)
}

#[cold]
pub fn index_out_of_range(value: impl fmt::Display, type_name: &str) -> IxError {
    IxError::new(IxErrorKind::IndexOutOfRange {
        value: value.to_string(),
        type_name: type_name.to_owned(),
    })
}

#[cold]
pub fn zero_step() -> IxError {
    IxError::new(IxErrorKind::ZeroStep)
}

// Operator errors

#[cold]
pub fn invalid_stretch_amount(amount: i64, step: i64) -> IxError {
    IxError::new(IxErrorKind::InvalidStretchAmount { amount, step })
        .with_note(format!("use a multiple of {step} so the result stays on the range's step"))
}

#[cold]
pub fn invalid_shrink_amount(amount: i64, step: i64) -> IxError {
    IxError::new(IxErrorKind::InvalidShrinkAmount { amount, step })
        .with_note(format!("use a multiple of {step} so the result stays on the range's step"))
}

/// An operator applied to a combination of forms it has no rule for.
#[cold]
pub fn undefined_operation(operation: &str, left: Form, right: Option<Form>) -> IxError {
    let operands = match right {
        Some(right) => format!("{left} and {right}"),
        None => left.to_string(),
    };
    IxError::new(IxErrorKind::UndefinedOperation {
        operation: operation.to_owned(),
        operands,
    })
    .with_note("check the operand shapes of the expression")
    .with_note(ESCAPE_HINT)
}

/// `shrink` applied to a scalar or multi index.
#[cold]
pub fn shrink_of_point(target: Form, amount: Form) -> IxError {
    undefined_operation("shrink", target, Some(amount)).with_note(
        "a point cannot be shrunk; stretch it into a range or region first",
    )
}

#[cold]
pub fn dimension_mismatch(operation: &str, left: usize, right: usize) -> IxError {
    IxError::new(IxErrorKind::DimensionMismatch {
        operation: operation.to_owned(),
        left,
        right,
    })
}

#[cold]
pub fn integer_overflow(operation: &str) -> IxError {
    IxError::new(IxErrorKind::IntegerOverflow {
        operation: operation.to_owned(),
    })
}

#[cold]
pub fn division_by_zero() -> IxError {
    IxError::new(IxErrorKind::DivisionByZero)
}

// Evaluation errors

#[cold]
pub fn arity_mismatch(function: &str, expected: &str, got: usize) -> IxError {
    IxError::new(IxErrorKind::ArityMismatch {
        function: function.to_owned(),
        expected: expected.to_owned(),
        got,
    })
}

#[cold]
pub fn undefined_variable(name: &str) -> IxError {
    IxError::new(IxErrorKind::UndefinedVariable {
        name: name.to_owned(),
    })
    .with_note("bind the variable before evaluating the expression")
}

#[cold]
pub fn unknown_function(name: &str) -> IxError {
    let known: Vec<&str> = Builtin::ALL.iter().map(|b| b.name()).collect();
    IxError::new(IxErrorKind::UnknownFunction {
        name: name.to_owned(),
    })
    .with_note(format!("known functions: {}", known.join(", ")))
}

#[cold]
pub fn syntax(message: impl Into<String>, span: Span) -> IxError {
    let mut err = IxError::new(IxErrorKind::Syntax {
        message: message.into(),
    });
    err.span = Some(span);
    err
}

#[cfg(test)]
mod tests;

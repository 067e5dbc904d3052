//! Expression nodes, operators and builtin function names.

use crate::{ExprId, ExprRange, Span};

/// Binary operators of the expression language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Additive
    Add,
    Sub,
    Stretch,
    Shrink,

    // Multiplicative
    Mul,
    Div,
    Rem,
    Cap,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Stretch => "±",
            Self::Shrink => "∓",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Cap => "∩",
        }
    }

    /// Precedence level, higher binds less tightly.
    ///
    /// - 1: `*` `/` `%` `∩`
    /// - 2: `+` `-` `±` `∓`
    ///
    /// The range colon sits below both at level 3 and is not a `BinaryOp`.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div | Self::Rem | Self::Cap => 1,
            Self::Add | Self::Sub | Self::Stretch | Self::Shrink => 2,
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
    Plus,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Plus => "+",
        }
    }
}

/// Functions known to the evaluator.
///
/// The rewriter targets `Plus`..`Shrink`, `Forward`, `Backward` and
/// `Identity`. `Intersect` is the user-facing spelling that gets rewritten
/// to `Cap`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Builtin {
    Plus,
    Minus,
    Cap,
    Intersect,
    Stretch,
    Shrink,
    Forward,
    Backward,
    Normalize,
    Identity,
}

impl Builtin {
    pub const ALL: [Builtin; 10] = [
        Builtin::Plus,
        Builtin::Minus,
        Builtin::Cap,
        Builtin::Intersect,
        Builtin::Stretch,
        Builtin::Shrink,
        Builtin::Forward,
        Builtin::Backward,
        Builtin::Normalize,
        Builtin::Identity,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Cap => "cap",
            Self::Intersect => "intersect",
            Self::Stretch => "stretch",
            Self::Shrink => "shrink",
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::Normalize => "normalize",
            Self::Identity => "identity",
        }
    }

    pub fn from_name(name: &str) -> Option<Builtin> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }
}

/// Target of a call expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Callee {
    Builtin(Builtin),
    /// A name that is not a builtin; reported when evaluated.
    Unknown(String),
}

impl Callee {
    /// Resolve a written function name.
    pub fn resolve(name: &str) -> Callee {
        match Builtin::from_name(name) {
            Some(builtin) => Callee::Builtin(builtin),
            None => Callee::Unknown(name.to_owned()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Callee::Builtin(builtin) => builtin.name(),
            Callee::Unknown(name) => name,
        }
    }
}

/// Expression node: kind plus source span.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ExprKind {
    /// Integer literal.
    Int(i64),

    /// Variable reference.
    Ident(String),

    /// Range literal: `first:last` or `first:step:last`.
    Range {
        first: ExprId,
        /// `ExprId::INVALID` = unit step.
        step: ExprId,
        last: ExprId,
    },

    /// Tuple: `(a, b, c)`. Becomes a multi index or a region.
    Tuple(ExprRange),

    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    Unary {
        op: UnaryOp,
        operand: ExprId,
    },

    Call {
        func: Callee,
        args: ExprRange,
    },

    /// Escaped sub-expression: `$(expr)`. Blocks rewriting of its subtree.
    Escape(ExprId),
}

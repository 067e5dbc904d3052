//! `Evaluator` and its builder.

use ixa_ir::{ExprArena, ExprId};
use ixa_normalize::{AnyIndex, NormalizeRegistry, SharedRegistry};
use ixa_parse::ParseError;
use ixa_rewrite::{Direction, Rewritten};
use ixa_value::{syntax, Canonical, IxError, IxResult};

use crate::interpreter::Interpreter;
use crate::{Environment, HostValue, Value};

/// Evaluates index expressions against a set of bindings.
#[derive(Clone, Debug)]
pub struct Evaluator {
    registry: SharedRegistry<NormalizeRegistry>,
    env: Environment,
}

impl Evaluator {
    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    pub fn registry(&self) -> &NormalizeRegistry {
        &self.registry
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Bind a canonical value after construction.
    pub fn bind_index(&mut self, name: impl Into<String>, value: impl Into<Canonical>) {
        self.env.define(name, Value::Index(value.into()));
    }

    /// Parse, rewrite with a `forward` wrapper, and evaluate.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn forward(&self, source: &str) -> IxResult<Canonical> {
        self.eval_source(source, Direction::Forward)
    }

    /// Parse, rewrite with a `backward` wrapper, and evaluate.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn backward(&self, source: &str) -> IxResult<Canonical> {
        self.eval_source(source, Direction::Backward)
    }

    /// Parse and rewrite without evaluating.
    pub fn rewrite(&self, source: &str, direction: Direction) -> IxResult<Rewritten> {
        let parsed = ixa_parse::parse(source).map_err(syntax_error)?;
        Ok(ixa_rewrite::rewrite(&parsed.arena, parsed.root, direction))
    }

    /// Parse, rewrite and evaluate without a direction wrapper, so ranges
    /// keep the orientation they were written with.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn evaluate(&self, source: &str) -> IxResult<Canonical> {
        let parsed = ixa_parse::parse(source).map_err(syntax_error)?;
        let rewritten = ixa_rewrite::rewrite_body(&parsed.arena, parsed.root);
        self.eval(&rewritten.arena, rewritten.root)
    }

    /// Evaluate a tree as written. Operators that were not rewritten keep
    /// their plain scalar meaning.
    pub fn eval(&self, arena: &ExprArena, root: ExprId) -> IxResult<Canonical> {
        let value = Interpreter::new(self, arena).eval_expr(root)?;
        let span = arena.get_expr(root).span;
        value
            .into_canonical(&self.registry)
            .map_err(|e| e.with_default_span(span))
    }

    fn eval_source(&self, source: &str, direction: Direction) -> IxResult<Canonical> {
        let rewritten = self.rewrite(source, direction)?;
        let result = self.eval(&rewritten.arena, rewritten.root);
        if let Ok(value) = &result {
            tracing::debug!(%value, "evaluated");
        }
        result
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        EvaluatorBuilder::new().build()
    }
}

#[cold]
fn syntax_error(err: ParseError) -> IxError {
    syntax(err.message, err.span)
}

/// Builder for [`Evaluator`].
///
/// Without an explicit registry the builder uses
/// [`NormalizeRegistry::with_builtins`].
#[derive(Default)]
pub struct EvaluatorBuilder {
    registry: Option<SharedRegistry<NormalizeRegistry>>,
    env: Environment,
}

impl EvaluatorBuilder {
    pub fn new() -> Self {
        EvaluatorBuilder::default()
    }

    /// Use a custom normalization registry for host values.
    #[must_use]
    pub fn registry(mut self, registry: SharedRegistry<NormalizeRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Bind a canonical value.
    #[must_use]
    pub fn bind_index(mut self, name: impl Into<String>, value: impl Into<Canonical>) -> Self {
        self.env.define(name, Value::Index(value.into()));
        self
    }

    /// Bind a host value, normalized through the registry when used.
    #[must_use]
    pub fn bind(mut self, name: impl Into<String>, value: impl AnyIndex) -> Self {
        self.env.define(name, Value::Host(HostValue::new(value)));
        self
    }

    pub fn build(self) -> Evaluator {
        Evaluator {
            registry: self
                .registry
                .unwrap_or_else(|| SharedRegistry::new(NormalizeRegistry::with_builtins())),
            env: self.env,
        }
    }
}

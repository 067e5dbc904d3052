//! Ixa command-line front end.
//!
//! `main.rs` only wires process state (arguments, stdout, exit code) to the
//! pieces here: [`RunConfig`] parses the arguments, [`run`] evaluates and
//! [`ErrorEmitter`] renders failures against the expression they came from.

mod args;
mod emitter;

use std::sync::Once;

use ixa_eval::{Direction, Evaluator};
use ixa_value::IxError;

pub use args::{ArgError, Command, LetBinding, RunConfig};
pub use emitter::{ColorMode, ErrorEmitter};

static TRACING_INIT: Once = Once::new();

/// Install the tree-shaped tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// An error together with the text it points into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    pub error: IxError,
    /// The expression the error's span refers to.
    pub source: String,
    /// Which `--let` binding failed, if it was not the main expression.
    pub binding: Option<String>,
}

impl Failure {
    fn in_expression(error: IxError, source: &str) -> Self {
        Failure {
            error,
            source: source.to_owned(),
            binding: None,
        }
    }
}

/// Execute a parsed command line, returning the text to print.
pub fn run(config: &RunConfig) -> Result<String, Failure> {
    match &config.command {
        Command::Help => Ok(usage().to_owned()),
        Command::Eval {
            direction,
            source,
            bindings,
        } => {
            let evaluator = bind_all(bindings)?;
            let result = match direction {
                Direction::Forward => evaluator.forward(source),
                Direction::Backward => evaluator.backward(source),
            };
            result
                .map(|value| value.to_string())
                .map_err(|e| Failure::in_expression(e, source))
        }
        Command::Rewrite { direction, source } => Evaluator::default()
            .rewrite(source, *direction)
            .map(|rewritten| rewritten.to_string())
            .map_err(|e| Failure::in_expression(e, source)),
    }
}

/// Evaluate `--let` bindings in order; later ones may use earlier ones.
fn bind_all(bindings: &[LetBinding]) -> Result<Evaluator, Failure> {
    let mut evaluator = Evaluator::default();
    for binding in bindings {
        let value = evaluator.evaluate(&binding.source).map_err(|error| Failure {
            error,
            source: binding.source.clone(),
            binding: Some(binding.name.clone()),
        })?;
        tracing::debug!(name = %binding.name, %value, "bound");
        evaluator.bind_index(binding.name.clone(), value);
    }
    Ok(evaluator)
}

pub fn usage() -> &'static str {
    "\
Ixa - index and range expressions

Usage: ixa <command> [options]

Commands:
  forward <expr>       Evaluate with non-negative range steps
  backward <expr>      Evaluate with non-positive range steps
  rewrite <expr>       Show the expression after operator rewriting
  help                 Show this help message

Options:
  --let <name>=<expr>  Bind a variable (forward/backward, repeatable)
  --color=<mode>       Error colors: auto, always, never
  --backward           Wrap the rewritten expression in backward (rewrite)

Set RUST_LOG (e.g. RUST_LOG=debug) to trace evaluation."
}

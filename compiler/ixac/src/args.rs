//! Command-line argument parsing.

use ixa_eval::Direction;

use crate::ColorMode;

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    /// `forward`/`backward`: evaluate and print the canonical value.
    Eval {
        direction: Direction,
        source: String,
        bindings: Vec<LetBinding>,
    },
    /// `rewrite`: print the expression after rewriting.
    Rewrite { direction: Direction, source: String },
}

/// A `--let name=expr` binding, evaluated before the main expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetBinding {
    pub name: String,
    pub source: String,
}

impl LetBinding {
    fn parse(text: &str) -> Result<Self, ArgError> {
        let Some((name, source)) = text.split_once('=') else {
            return Err(ArgError::InvalidLet(text.to_owned()));
        };
        let name = name.trim();
        if !is_identifier(name) || source.trim().is_empty() {
            return Err(ArgError::InvalidLet(text.to_owned()));
        }
        Ok(LetBinding {
            name: name.to_owned(),
            source: source.to_owned(),
        })
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{command}` needs an expression")]
    MissingExpression { command: &'static str },

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("`{option}` is not accepted by `{command}`")]
    OptionNotAccepted {
        option: &'static str,
        command: &'static str,
    },

    #[error("`--let` expects `name=expr`, got `{0}`")]
    InvalidLet(String),

    #[error("`--let` expects a value")]
    MissingLetValue,

    #[error("invalid color mode `{0}`, expected auto, always or never")]
    InvalidColor(String),
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub command: Command,
    pub color: ColorMode,
}

impl RunConfig {
    /// Parse the arguments after the program name.
    ///
    /// Expressions may begin with `-` (`-r ∩ s`); only `--` introduces an
    /// option.
    pub fn from_args(args: &[String]) -> Result<RunConfig, ArgError> {
        let Some((command, rest)) = args.split_first() else {
            return Ok(RunConfig::help());
        };
        let (command, mut direction): (&'static str, Direction) = match command.as_str() {
            "help" | "--help" | "-h" => return Ok(RunConfig::help()),
            "forward" => ("forward", Direction::Forward),
            "backward" => ("backward", Direction::Backward),
            "rewrite" => ("rewrite", Direction::Forward),
            other => return Err(ArgError::UnknownCommand(other.to_owned())),
        };
        let is_rewrite = command == "rewrite";

        let mut color = ColorMode::default();
        let mut source: Option<String> = None;
        let mut bindings = Vec::new();

        let mut rest = rest.iter();
        while let Some(arg) = rest.next() {
            if arg == "--let" || arg.starts_with("--let=") {
                if is_rewrite {
                    return Err(ArgError::OptionNotAccepted {
                        option: "--let",
                        command,
                    });
                }
                let value = match arg.strip_prefix("--let=") {
                    Some(value) => value,
                    None => rest.next().ok_or(ArgError::MissingLetValue)?.as_str(),
                };
                bindings.push(LetBinding::parse(value)?);
            } else if let Some(mode) = arg.strip_prefix("--color=") {
                color = ColorMode::parse(mode).ok_or_else(|| ArgError::InvalidColor(mode.to_owned()))?;
            } else if arg == "--backward" {
                if !is_rewrite {
                    return Err(ArgError::OptionNotAccepted {
                        option: "--backward",
                        command,
                    });
                }
                direction = Direction::Backward;
            } else if arg.starts_with("--") {
                return Err(ArgError::UnknownOption(arg.clone()));
            } else if source.is_none() {
                source = Some(arg.clone());
            } else {
                return Err(ArgError::UnexpectedArgument(arg.clone()));
            }
        }

        let source = source.ok_or(ArgError::MissingExpression { command })?;
        let command = if is_rewrite {
            Command::Rewrite { direction, source }
        } else {
            Command::Eval {
                direction,
                source,
                bindings,
            }
        };
        Ok(RunConfig { command, color })
    }

    fn help() -> RunConfig {
        RunConfig {
            command: Command::Help,
            color: ColorMode::default(),
        }
    }
}

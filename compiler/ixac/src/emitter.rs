//! Terminal rendering of evaluation failures.
//!
//! ```text
//! error: stretch amount 3 is not a multiple of the range step 2
//!   |
//!   | r ± 3
//!   | ^^^^^
//!   = note: use a multiple of 2 so the result stays on the range's step
//! ```

use std::io::{self, Write};

use ixa_ir::Span;

use crate::Failure;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// When to emit ANSI colors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Parse the value of `--color=`.
    pub fn parse(text: &str) -> Option<ColorMode> {
        match text {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes failures with the failing sub-expression underlined.
pub struct ErrorEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> ErrorEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        ErrorEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    pub fn emit(&mut self, failure: &Failure) {
        let error = &failure.error;
        self.write_colored("error", colors::ERROR);
        let _ = writeln!(self.writer, ": {}", error.message());

        if let Some(name) = &failure.binding {
            self.write_colored("  -->", colors::GUTTER);
            let _ = writeln!(self.writer, " --let {name}");
        }

        if let Some((line, column, width)) = error.span.and_then(|s| underline(&failure.source, s)) {
            self.write_gutter();
            let _ = writeln!(self.writer);
            self.write_gutter();
            let _ = writeln!(self.writer, " {line}");
            self.write_gutter();
            let _ = write!(self.writer, " {}", " ".repeat(column));
            self.write_colored(&"^".repeat(width), colors::ERROR);
            let _ = writeln!(self.writer);
        }

        for note in &error.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn write_gutter(&mut self) {
        self.write_colored("  |", colors::GUTTER);
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }
}

impl ErrorEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        ErrorEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

/// The source line holding `span.start`, the caret column and the caret
/// count, both in characters.
///
/// Spans that run past the line are cut at its end; empty spans (such as the
/// end of input) get a single caret.
fn underline(source: &str, span: Span) -> Option<(&str, usize, usize)> {
    let range = span.to_range();
    let start = range.start.min(source.len());
    let before = source.get(..start)?;
    let line_start = before.rfind('\n').map_or(0, |i| i.saturating_add(1));
    let line_end = source
        .get(start..)?
        .find('\n')
        .map_or(source.len(), |i| start.saturating_add(i));
    let end = range.end.clamp(start, line_end);

    let line = source.get(line_start..line_end)?;
    let column = source.get(line_start..start)?.chars().count();
    let width = source.get(start..end)?.chars().count().max(1);
    Some((line, column, width))
}

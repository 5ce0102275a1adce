//! Console output for both tools.
//!
//! Result lines are written to a caller-provided sink as the walk proceeds;
//! nothing is buffered beyond the current line. Diagnostics go to standard
//! output with a `[DEBUG]` or `[ERROR]` prefix.

use std::fmt;

use colored::Colorize;

/// Minimum width of the size column in `pdu` lines.
pub const SIZE_COLUMN_WIDTH: usize = 10;

/// A single `pdu` result line: formatted size and root-anchored path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayLine {
    /// Rendered size, raw or with a unit suffix
    pub size: String,

    /// Path shown to the user, starting with the root's base name
    pub path: String,
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<width$}{}",
            self.size,
            self.path,
            width = SIZE_COLUMN_WIDTH
        )
    }
}

/// Debug reporter threaded through the walk.
///
/// Carries the debug switch explicitly instead of relying on process-wide
/// state; a disabled logger formats nothing.
#[derive(Clone, Debug, Default)]
pub struct Logger {
    enabled: bool,
}

impl Logger {
    /// Create a logger that prints only when `enabled` is set.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Print `[DEBUG] <message>` when enabled.
    pub fn debug(&self, message: impl fmt::Display) {
        if self.enabled {
            println!("{} {message}", "[DEBUG]".dimmed());
        }
    }
}

/// Print a fatal error as `[ERROR] <message>`, including its causes.
pub fn print_error(err: &anyhow::Error) {
    println!("{} {err:#}", "[ERROR]".red());
}

//! Terminal output for the sheetscan CLI.
//!
//! Status lines go to stderr with a right-aligned verb column; stdout is
//! left free for machine-readable output such as `--output -`.

use std::io::{self, IsTerminal};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Status printer. Colour is enabled only when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Print a progress line with a green verb, e.g. "    Scanning assets/".
    pub fn status(&self, verb: &str, message: &str) {
        eprintln!("{}", self.format_line(GREEN, verb, message));
    }

    /// Print an informational line with a cyan verb.
    pub fn info(&self, verb: &str, message: &str) {
        eprintln!("{}", self.format_line(CYAN, verb, message));
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn format_line(&self, color: &str, verb: &str, message: &str) -> String {
        let verb = format!("{verb:>VERB_WIDTH$}");
        if self.color {
            format!("{BOLD}{color}{verb}{RESET} {message}")
        } else {
            format!("{verb} {message}")
        }
    }
}

/// Return a path relative to the working directory when possible.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_alignment() {
        let printer = Printer::plain();
        assert_eq!(
            printer.format_line(GREEN, "Wrote", "manifest.json"),
            "       Wrote manifest.json"
        );
        assert_eq!(printer.dim("x"), "x");
    }

    #[test]
    fn test_display_path_outside_cwd() {
        let p = Path::new("/nonexistent/path/to/file");
        assert_eq!(display_path(p), "/nonexistent/path/to/file");
    }
}

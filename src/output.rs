//! Terminal output for the plover-sig CLI.
//!
//! Status lines go to stderr with a right-aligned coloured verb, the way
//! Cargo prints them. stdout carries only rendered signatures or JSON.

use std::io::{self, IsTerminal, Write};

use clap::ValueEnum;

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// When to emit ANSI colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Colour when stderr is a terminal
    #[default]
    Auto,
    /// Always emit escape codes
    Always,
    /// Plain text only
    Never,
}

/// Status printer for stderr.
///
/// Prints Cargo-style status lines with optional ANSI colour. With
/// [`ColorChoice::Auto`] colour is on only when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Printer {
    /// Create a printer, resolving `choice` against stderr.
    pub fn new(choice: ColorChoice) -> Self {
        let color = match choice {
            ColorChoice::Auto => io::stderr().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };
        Self { color }
    }

    /// Print a status line with a green bold verb.
    /// e.g. "      Parsed {plover:lookup:WORD}"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print a completion line with a green bold verb.
    pub fn success(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Print an error line with a red bold verb.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Format a string as dim.
    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    /// Format a string as bold.
    pub fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    /// Format a severity label: bold red for errors, bold yellow otherwise.
    pub fn severity(&self, label: &str, is_error: bool) -> String {
        let color = if is_error { RED } else { YELLOW };
        if self.color {
            format!("{BOLD}{color}{label}{RESET}")
        } else {
            label.to_string()
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// Pluralize a count: `plural(1, "entry", "entries")` → "1 entry".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &std::path::Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "entry", "entries"), "1 entry");
        assert_eq!(plural(0, "entry", "entries"), "0 entries");
        assert_eq!(plural(3, "signature", "signatures"), "3 signatures");
    }

    #[test]
    fn test_plain_printer_does_not_paint() {
        let printer = Printer::new(ColorChoice::Never);
        assert_eq!(printer.dim("x"), "x");
        assert_eq!(printer.bold("x"), "x");
        assert_eq!(printer.severity("error", true), "error");
    }

    #[test]
    fn test_color_printer_paints() {
        let printer = Printer::new(ColorChoice::Always);
        assert_eq!(printer.dim("x"), "\x1b[2mx\x1b[0m");
        assert_eq!(printer.severity("warning", false), "\x1b[1m\x1b[33mwarning\x1b[0m");
    }

    #[test]
    fn test_display_path_absolute() {
        let p = std::path::Path::new("/nonexistent/path/to/entries.yaml");
        assert_eq!(display_path(p), "/nonexistent/path/to/entries.yaml");
    }
}

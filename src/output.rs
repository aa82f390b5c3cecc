//! Terminal output formatting for the gpl2clr CLI.
//!
//! Cargo-style status lines with right-aligned coloured verbs. Progress and
//! results go to stdout; errors go to stderr.

use std::io::{self, IsTerminal, Write};

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

/// Terminal-aware status printer.
///
/// Colour is decided per stream: each is styled only when it is a
/// terminal. Step lines are only printed in verbose mode.
pub struct Printer {
    stdout_color: bool,
    stderr_color: bool,
    verbose: bool,
}

enum Stream {
    Stdout,
    Stderr,
}

impl Printer {
    pub fn new(verbose: bool) -> Self {
        Self {
            stdout_color: io::stdout().is_terminal(),
            stderr_color: io::stderr().is_terminal(),
            verbose,
        }
    }

    /// A printer that never emits ANSI codes.
    pub fn plain(verbose: bool) -> Self {
        Self {
            stdout_color: false,
            stderr_color: false,
            verbose,
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Print a progress step with a cyan bold verb, verbose mode only.
    /// e.g. "     Reading warm.gpl"
    pub fn step(&self, verb: &str, message: &str) {
        if self.verbose {
            self.print_line(Stream::Stdout, CYAN, verb, message);
        }
    }

    /// Print a success/completion line with a green bold verb.
    pub fn success(&self, verb: &str, message: &str) {
        self.print_line(Stream::Stdout, GREEN, verb, message);
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(Stream::Stderr, YELLOW, verb, message);
    }

    /// Print an error line with a red bold verb.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(Stream::Stderr, RED, verb, message);
    }

    /// Format a string as dim/grey, for lines written to stdout.
    pub fn dim(&self, text: &str) -> String {
        if self.stdout_color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn styled(&self, stream: &Stream) -> bool {
        match stream {
            Stream::Stdout => self.stdout_color,
            Stream::Stderr => self.stderr_color,
        }
    }

    fn format_line(&self, stream: &Stream, color: &str, verb: &str, message: &str) -> String {
        if self.styled(stream) {
            format!("{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}")
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }

    fn print_line(&self, stream: Stream, color: &str, verb: &str, message: &str) {
        let line = self.format_line(&stream, color, verb, message);

        let _ = match stream {
            Stream::Stdout => writeln!(io::stdout().lock(), "{line}"),
            Stream::Stderr => writeln!(io::stderr().lock(), "{line}"),
        };
    }
}

/// Pluralize a count: `plural(1, "colour", "colours")` → "1 colour".
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
    fn test_plural_singular() {
        assert_eq!(plural(1, "colour", "colours"), "1 colour");
    }

    #[test]
    fn test_plural_zero() {
        assert_eq!(plural(0, "colour", "colours"), "0 colours");
    }

    #[test]
    fn test_plural_many() {
        assert_eq!(plural(5, "colour", "colours"), "5 colours");
    }

    #[test]
    fn test_display_path_absolute() {
        use std::path::Path;
        // An absolute path outside cwd should stay absolute
        let p = Path::new("/nonexistent/path/to/file.gpl");
        assert_eq!(display_path(p), "/nonexistent/path/to/file.gpl");
    }

    #[test]
    fn test_colour_decided_per_stream() {
        let printer = Printer {
            stdout_color: true,
            stderr_color: false,
            verbose: false,
        };

        let out = printer.format_line(&Stream::Stdout, GREEN, "Converted", "a -> b");
        assert!(out.contains(RESET));

        let err = printer.format_line(&Stream::Stderr, RED, "error", "bad line");
        assert_eq!(err, format!("{:>12} bad line", "error"));
        assert!(!err.contains('\x1b'));
    }

    #[test]
    fn test_plain_printer_does_not_style() {
        let printer = Printer::plain(true);
        assert_eq!(printer.dim("->"), "->");
        assert!(printer.is_verbose());
    }
}

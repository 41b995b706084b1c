//! Status-line output.
//!
//! Every line is prefixed with a tag: `[INFO]`, `[OK]` or `[FAIL]`. Hints
//! follow a failure, indented with `->`.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Writes status lines to a sink.
pub struct Console<W: Write> {
    out: W,
    interactive: bool,
}

impl Console<io::Stdout> {
    /// Console on stdout, with spinners when stdout is a terminal.
    pub fn stdout() -> Self {
        use std::io::IsTerminal;

        let interactive = io::stdout().is_terminal();
        Self {
            out: io::stdout(),
            interactive,
        }
    }
}

impl<W: Write> Console<W> {
    /// Console on an arbitrary sink. Spinners are hidden.
    pub fn new(out: W) -> Self {
        Self {
            out,
            interactive: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn heading(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text.bold());
    }

    pub fn info(&mut self, message: &str) {
        let _ = writeln!(self.out, "{} {}", "[INFO]".cyan(), message);
    }

    pub fn ok(&mut self, message: &str) {
        let _ = writeln!(self.out, "{} {}", "[OK]".green(), message);
    }

    pub fn fail(&mut self, message: &str) {
        let _ = writeln!(self.out, "{} {}", "[FAIL]".red(), message);
    }

    pub fn hint(&mut self, message: &str) {
        let _ = writeln!(self.out, "  {} {}", "->".yellow(), message);
    }

    pub fn line(&mut self, message: &str) {
        let _ = writeln!(self.out, "{}", message);
    }

    pub fn blank(&mut self) {
        let _ = writeln!(self.out);
    }

    /// Spinner for a long-running step. Hidden unless interactive.
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if !self.interactive {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

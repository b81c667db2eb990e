//! Output formatting for the perlup CLI.

use console::style;
use perlup_core::{Error, Fix};

/// Output handler for consistent CLI output.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    quiet: bool,
}

impl Output {
    /// Create an output handler.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print a status message with a step title.
    pub fn status(&self, action: &str, message: &str) {
        if !self.quiet {
            eprintln!("{:>12} {}", style(action).green().bold(), message);
        }
    }

    /// Print an info message.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    /// Print a warning message.
    pub fn warn(&self, message: &str) {
        eprintln!("{}: {}", style("warning").yellow().bold(), message);
    }

    /// Print a list item.
    pub fn list_item(&self, key: &str, value: &str) {
        if !self.quiet {
            eprintln!("  {} {}", style(key).dim(), value);
        }
    }

    /// Print a structured error with context and fixes.
    pub fn print_error(&self, error: &Error) {
        eprintln!();
        eprintln!("{}: {}", style("error").red().bold(), error);

        match error {
            Error::Catalog { path: Some(p), .. } => {
                eprintln!("  {} {}", style("-->").dim(), p.display());
            }
            Error::Io { path: Some(p), .. } => {
                eprintln!("  {} {}", style("-->").dim(), p.display());
            }
            Error::Download { url, source, .. } => {
                eprintln!("  {} {}", style("-->").dim(), url);
                eprintln!("  {} {}", style("caused by:").dim(), source);
            }
            _ => {}
        }

        for fix in error.fixes() {
            self.print_fix(fix);
        }
    }

    /// Print a fix suggestion.
    fn print_fix(&self, fix: &Fix) {
        if let Some(ref cmd) = fix.command {
            eprintln!("{}: run `{}`", style("fix").cyan().bold(), style(cmd).bold());
        } else {
            eprintln!("{}: {}", style("fix").cyan().bold(), fix.description);
        }
    }
}

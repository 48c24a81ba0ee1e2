//! Output formatting for the CLI.

use bodega_cart::{CountSink, Notifier};
use console::style;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!(r#"{{"error": "{}"}}"#, msg.replace('"', "\\\""));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a plain content line.
    pub fn line(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{}", msg);
    }

    /// Print a de-emphasized line.
    pub fn dim(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{}", style(msg).dim());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Cart notices rendered as terminal messages.
pub struct TermNotifier {
    output: Output,
}

impl TermNotifier {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl Notifier for TermNotifier {
    fn notify(&self, message: &str) {
        self.output.success(message);
    }
}

/// The nav badge, rendered as a dim count line after each mutation.
pub struct TermBadge {
    output: Output,
}

impl TermBadge {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl CountSink for TermBadge {
    fn set_count(&self, total: u32) {
        self.output.dim(&format!("{} item(s) in cart", total));
    }
}

//! Output formatting for the console.
//!
//! Menu text and reports go to stdout; warnings and errors go to stderr.
//! In JSON mode only [`Output::json`] and errors print anything.

use console::style;
use serde::Serialize;

/// Output handler for console messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Whether structured output was requested.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Print a plain line.
    pub fn line(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("  {}", msg);
    }

    /// Print an empty line.
    pub fn blank(&self) {
        if self.json {
            return;
        }
        println!();
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("  {} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            let body = serde_json::json!({ "error": msg });
            eprintln!("{}", body);
            return;
        }
        eprintln!("  {} {}", style("✗").red(), style(msg).red());
    }

    /// True when [`debug`](Self::debug) lines are printed.
    pub fn shows_debug(&self) -> bool {
        self.verbose && !self.json
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.shows_debug() {
            return;
        }
        eprintln!("  {} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n  {}", style(msg).bold().underlined());
    }

    /// Print a full-width rule.
    pub fn rule(&self, ch: char) {
        if self.json {
            return;
        }
        println!("{}", ch.to_string().repeat(60));
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row. Widths are minimums; longer values are not cut.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        println!("  {}", format_row(cols, widths));
    }

    /// Print JSON output.
    pub fn json<T: Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{}", json),
            Err(err) => tracing::error!("Failed to serialize output: {}", err),
        }
    }
}

fn format_row(cols: &[&str], widths: &[usize]) -> String {
    let formatted: Vec<String> = cols
        .iter()
        .zip(widths.iter())
        .map(|(col, width)| format!("{:width$}", col, width = width))
        .collect();
    formatted.join("  ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_lines_need_verbose_text_mode() {
        assert!(Output::new(true, false).shows_debug());
        assert!(!Output::new(false, false).shows_debug());
        assert!(!Output::new(true, true).shows_debug());
    }

    #[test]
    fn test_format_row_pads_columns() {
        let row = format_row(&["P001", "Laptop", "3"], &[6, 10, 4]);
        assert_eq!(row, "P001    Laptop      3");
    }

    #[test]
    fn test_format_row_keeps_long_values() {
        let row = format_row(&["Electrónica", "x"], &[4, 1]);
        assert_eq!(row, "Electrónica  x");
    }
}

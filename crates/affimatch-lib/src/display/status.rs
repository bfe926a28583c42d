//! Status display for user feedback
//!
//! Semantic output helpers that write to any [`Write`] so command output can
//! be captured in tests.

use super::styling::{BULLET, StyleManager};
use std::io::{self, Write};

/// Status display manager for semantic user feedback
pub struct StatusDisplay<W: Write> {
    out: W,
    styling: StyleManager,
}

impl<W: Write> StatusDisplay<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            styling: StyleManager::new(color),
        }
    }

    pub fn styling(&self) -> &StyleManager {
        &self.styling
    }

    /// Display a section heading
    ///
    /// Output: `→ Ranking 'laptop'`
    pub fn section(&mut self, title: &str) -> io::Result<()> {
        let line = self.styling.format_working(&self.styling.style_emphasis(title));
        writeln!(self.out, "{line}")
    }

    /// Display a success status with optional details
    ///
    /// Output: `✓ 3 matches: threshold 30`
    pub fn success(&mut self, item: &str, details: &str) -> io::Result<()> {
        let line = self.styling.format_success(&join(item, details));
        writeln!(self.out, "{line}")
    }

    /// Output: `✗ catalog: not found`
    pub fn error(&mut self, item: &str, details: &str) -> io::Result<()> {
        let line = self.styling.format_error(&join(item, details));
        writeln!(self.out, "{line}")
    }

    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        let line = self.styling.format_warning(message);
        writeln!(self.out, "{line}")
    }

    pub fn info(&mut self, message: &str) -> io::Result<()> {
        let line = self.styling.format_info(message);
        writeln!(self.out, "{line}")
    }

    /// Display a simple message without status symbols
    pub fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn subtle(&mut self, text: &str) -> io::Result<()> {
        let line = self.styling.style_subtle(text);
        writeln!(self.out, "{line}")
    }

    /// Display a list of items with bullets
    pub fn list<S: AsRef<str>>(&mut self, items: &[S]) -> io::Result<()> {
        for item in items {
            writeln!(self.out, "  {BULLET} {}", item.as_ref())?;
        }
        Ok(())
    }

    /// Display an aligned `label  value` row
    pub fn field(&mut self, label: &str, value: &str) -> io::Result<()> {
        let label = self.styling.style_subtle(&format!("{label:<12}"));
        writeln!(self.out, "  {label} {value}")
    }

    /// Display a ranked row: position, score and label
    pub fn ranked(&mut self, position: usize, score: f64, label: &str) -> io::Result<()> {
        let score = self.styling.style_score(score);
        writeln!(self.out, "{position:>4}. {score}  {label}")
    }

    /// Raw writer, for machine-readable output
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn join(item: &str, details: &str) -> String {
    if details.is_empty() {
        item.to_string()
    } else {
        format!("{item}: {details}")
    }
}

//! Semantic styling on top of `console`
//!
//! Styling is decided once from the resolved color intent and then applied
//! unconditionally, so output does not depend on what stderr/stdout happen
//! to be attached to.

use console::Style;

pub const CHECKMARK: &str = "✓";
pub const CROSS: &str = "✗";
pub const WARNING_SYMBOL: &str = "!";
pub const INFO_SYMBOL: &str = "·";
pub const BULLET: &str = "•";
pub const ARROW: &str = "→";

/// Style manager bound to a color decision
#[derive(Debug, Clone, Copy)]
pub struct StyleManager {
    color: bool,
}

impl StyleManager {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    fn paint(&self, style: Style, text: &str) -> String {
        style
            .force_styling(self.color)
            .apply_to(text)
            .to_string()
    }

    pub fn style_success(&self, text: &str) -> String {
        self.paint(Style::new().green(), text)
    }

    pub fn style_error(&self, text: &str) -> String {
        self.paint(Style::new().red(), text)
    }

    pub fn style_warning(&self, text: &str) -> String {
        self.paint(Style::new().yellow(), text)
    }

    pub fn style_info(&self, text: &str) -> String {
        self.paint(Style::new().cyan(), text)
    }

    /// Bold
    pub fn style_emphasis(&self, text: &str) -> String {
        self.paint(Style::new().bold(), text)
    }

    pub fn style_subtle(&self, text: &str) -> String {
        self.paint(Style::new().dim(), text)
    }

    /// Color a 0-100 score by how far it clears typical thresholds
    pub fn style_score(&self, score: f64) -> String {
        let text = format!("{score:>6.2}");
        if score >= 70.0 {
            self.style_success(&text)
        } else if score >= 40.0 {
            self.style_warning(&text)
        } else {
            self.style_subtle(&text)
        }
    }

    pub fn format_success(&self, message: &str) -> String {
        format!("{} {}", self.style_success(CHECKMARK), message)
    }

    pub fn format_error(&self, message: &str) -> String {
        format!("{} {}", self.style_error(CROSS), message)
    }

    pub fn format_warning(&self, message: &str) -> String {
        format!("{} {}", self.style_warning(WARNING_SYMBOL), message)
    }

    pub fn format_info(&self, message: &str) -> String {
        format!("{} {}", self.style_info(INFO_SYMBOL), message)
    }

    pub fn format_working(&self, message: &str) -> String {
        format!("{} {}", self.style_info(ARROW), message)
    }
}

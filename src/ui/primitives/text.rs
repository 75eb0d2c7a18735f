use std::fmt;

use crossterm::style::{Color, Stylize};

use crate::ui::theme::colors;

/// Text tagged with a color role; escapes are only emitted on request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Color,
    bold: bool,
}

impl ColoredText {
    fn toned(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::toned(text, colors::PASS)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::toned(text, colors::FAIL)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::toned(text, colors::WARN)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::toned(text, colors::ACCENT)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::toned(text, colors::MUTED)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }
        let styled = self.text.as_str().with(self.color);
        if self.bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

use crossterm::style::{Color, Stylize};

use crate::ui::theme::{colors, glyphs, Glyph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Skipped,
    Arrow,
    Watch,
    Check,
    Config,
}

impl Icon {
    fn style(self) -> (Glyph, Color) {
        match self {
            Icon::Success => (glyphs::PASS, colors::PASS),
            Icon::Error => (glyphs::FAIL, colors::FAIL),
            Icon::Warning => (glyphs::WARN, colors::WARN),
            Icon::Progress => (glyphs::RUNNING, colors::WARN),
            Icon::Skipped => (glyphs::SKIPPED, colors::MUTED),
            Icon::Arrow => (glyphs::CHANGED, colors::MUTED),
            Icon::Watch => (glyphs::WATCH, colors::ACCENT),
            Icon::Check => (glyphs::CHECK, colors::ACCENT),
            Icon::Config => (glyphs::CONFIG, colors::ACCENT),
        }
    }

    pub fn render(self, supports_unicode: bool) -> &'static str {
        self.style().0.pick(supports_unicode)
    }

    pub fn colored(self, supports_color: bool, supports_unicode: bool) -> String {
        let (glyph, color) = self.style();
        let symbol = glyph.pick(supports_unicode);
        if supports_color {
            symbol.with(color).to_string()
        } else {
            symbol.to_string()
        }
    }
}

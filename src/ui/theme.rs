//! Colors and glyphs used by every view
//!
//! Views never hard-code a color or a symbol; they go through `Icon` and
//! `ColoredText`, which read from here.

use crossterm::style::Color;

pub mod colors {
    use super::Color;

    pub const PASS: Color = Color::Green;
    pub const FAIL: Color = Color::Red;
    pub const WARN: Color = Color::Yellow;
    pub const ACCENT: Color = Color::Cyan;
    pub const MUTED: Color = Color::DarkGrey;
}

/// A symbol with its ASCII fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub unicode: &'static str,
    pub ascii: &'static str,
}

impl Glyph {
    pub const fn pick(self, unicode: bool) -> &'static str {
        if unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

pub mod glyphs {
    use super::Glyph;

    pub const PASS: Glyph = Glyph { unicode: "✓", ascii: "[OK]" };
    pub const FAIL: Glyph = Glyph { unicode: "✗", ascii: "[FAIL]" };
    pub const WARN: Glyph = Glyph { unicode: "⚠", ascii: "[WARN]" };
    pub const RUNNING: Glyph = Glyph { unicode: "●", ascii: "[..]" };
    pub const SKIPPED: Glyph = Glyph { unicode: "○", ascii: "[--]" };
    pub const CHANGED: Glyph = Glyph { unicode: "↳", ascii: "[>]" };
    pub const WATCH: Glyph = Glyph { unicode: "⟳", ascii: "[~]" };
    pub const CHECK: Glyph = Glyph { unicode: "🔍", ascii: "[CHECK]" };
    pub const CONFIG: Glyph = Glyph { unicode: "⚙", ascii: "[CONFIG]" };
}

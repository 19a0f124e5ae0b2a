//! Terminal decoration of styled lines, via `colored`.
//!
//! Escape codes come from `colored::Color`, but whether to emit them is the
//! [`Decorator`]'s call alone. `colored`'s process-global switch is only
//! consulted by [`Decorator::auto`].

use std::borrow::Cow;
use uptick_core::{Color, Style};

const RESET: &str = "\u{1b}[0m";

/// Turns text plus a [`Style`] into what gets printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decorator {
    pub use_colors: bool,
}

impl Default for Decorator {
    fn default() -> Self {
        Self::auto()
    }
}

impl Decorator {
    /// Colors on when `colored` says the environment supports them
    /// (stdout is a terminal, `NO_COLOR` unset, `CLICOLOR` honored).
    pub fn auto() -> Self {
        Self {
            use_colors: colored::control::SHOULD_COLORIZE.should_colorize(),
        }
    }

    /// Never emit escape codes.
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    /// Always emit escape codes.
    pub fn colored() -> Self {
        Self { use_colors: true }
    }

    /// Render `text` with `style`.
    pub fn decorate(&self, text: &str, style: &Style) -> String {
        if !self.use_colors || style.is_plain() {
            return text.to_string();
        }

        // Same SGR order as colored: weight, foreground, background.
        let mut codes: Vec<Cow<'static, str>> = Vec::with_capacity(3);
        if style.bold {
            codes.push(Cow::Borrowed("1"));
        }
        if let Some(fg) = style.fg {
            codes.push(terminal_color(fg).to_fg_str());
        }
        if let Some(bg) = style.bg {
            codes.push(terminal_color(bg).to_bg_str());
        }
        format!("\u{1b}[{}m{}{}", codes.join(";"), text, RESET)
    }
}

fn terminal_color(color: Color) -> colored::Color {
    match color {
        Color::Black => colored::Color::Black,
        Color::Red => colored::Color::Red,
        Color::Green => colored::Color::Green,
        Color::Yellow => colored::Color::Yellow,
        Color::Blue => colored::Color::Blue,
        Color::Magenta => colored::Color::Magenta,
        Color::Cyan => colored::Color::Cyan,
        Color::White => colored::Color::White,
        Color::BrightGreen => colored::Color::BrightGreen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_decorator_returns_text_unchanged() {
        let decorator = Decorator::plain();
        assert_eq!(decorator.decorate("hi", &Style::notice()), "hi");
    }

    #[test]
    fn plain_style_is_untouched_even_with_colors() {
        let decorator = Decorator::colored();
        assert_eq!(decorator.decorate("hi", &Style::plain()), "hi");
    }

    #[test]
    fn colored_decorator_adds_escape_codes() {
        let rendered = Decorator::colored().decorate("hi", &Style::notice());
        assert_eq!(rendered, "\u{1b}[1;37;44mhi\u{1b}[0m");
    }

    #[test]
    fn colored_decorator_ignores_global_switch() {
        colored::control::set_override(false);
        let rendered = Decorator::colored().decorate("up", &Style::counter());
        colored::control::unset_override();
        assert_eq!(rendered, "\u{1b}[1;92mup\u{1b}[0m");
    }
}

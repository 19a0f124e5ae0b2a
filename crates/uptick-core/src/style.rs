//! # Style Descriptors
//!
//! Display attributes attached to a line. The core only names them; turning
//! a [`Style`] into terminal escape codes is the decorator's job in the app
//! layer.

use serde::{Deserialize, Serialize};

/// Terminal colors a line may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightGreen,
}

/// Foreground, background, and weight of a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl Style {
    /// No attributes at all.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
        }
    }

    /// Bold white on blue, used by the notice line.
    #[must_use]
    pub const fn notice() -> Self {
        Self {
            fg: Some(Color::White),
            bg: Some(Color::Blue),
            bold: true,
        }
    }

    /// Bold bright green, used by counter lines.
    #[must_use]
    pub const fn counter() -> Self {
        Self {
            fg: Some(Color::BrightGreen),
            bg: None,
            bold: true,
        }
    }

    /// True if rendering this style would change nothing.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && !self.bold
    }
}

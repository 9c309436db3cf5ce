//! The fixed 8-swatch text color palette.

use crate::error::ParseOptionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A selectable text color.
///
/// Colors are a closed set so an out-of-palette value can never reach the
/// session; free-form codes are rejected at the parse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TextColor {
    /// `#ffffff`
    White,
    /// `#ff0000`
    Red,
    /// `#00ff00`
    Green,
    /// `#0000ff`
    Blue,
    /// `#ffff00`
    Yellow,
    /// `#ff00ff`
    Magenta,
    /// `#00ffff`
    Cyan,
    /// `#000000`
    Black,
}

/// Number of swatch columns in the picker grid.
pub const PALETTE_COLUMNS: usize = 4;

impl TextColor {
    /// Every swatch, in picker order.
    pub const ALL: [TextColor; 8] = [
        TextColor::White,
        TextColor::Red,
        TextColor::Green,
        TextColor::Blue,
        TextColor::Yellow,
        TextColor::Magenta,
        TextColor::Cyan,
        TextColor::Black,
    ];

    /// Lowercase `#rrggbb` code.
    pub const fn hex(self) -> &'static str {
        match self {
            Self::White => "#ffffff",
            Self::Red => "#ff0000",
            Self::Green => "#00ff00",
            Self::Blue => "#0000ff",
            Self::Yellow => "#ffff00",
            Self::Magenta => "#ff00ff",
            Self::Cyan => "#00ffff",
            Self::Black => "#000000",
        }
    }

    /// Linear RGBA for the render layer.
    pub const fn rgba(self) -> [f32; 4] {
        match self {
            Self::White => [1.0, 1.0, 1.0, 1.0],
            Self::Red => [1.0, 0.0, 0.0, 1.0],
            Self::Green => [0.0, 1.0, 0.0, 1.0],
            Self::Blue => [0.0, 0.0, 1.0, 1.0],
            Self::Yellow => [1.0, 1.0, 0.0, 1.0],
            Self::Magenta => [1.0, 0.0, 1.0, 1.0],
            Self::Cyan => [0.0, 1.0, 1.0, 1.0],
            Self::Black => [0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Position of this swatch in [`TextColor::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|color| *color == self)
            .unwrap_or_default()
    }

    /// `(column, row)` of this swatch in the picker grid.
    pub fn grid_cell(self) -> (usize, usize) {
        let index = self.index();
        (index % PALETTE_COLUMNS, index / PALETTE_COLUMNS)
    }
}

impl Default for TextColor {
    fn default() -> Self {
        Self::White
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

impl FromStr for TextColor {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|color| color.hex() == lower)
            .ok_or_else(|| ParseOptionError::UnknownColor(s.to_string()))
    }
}

impl TryFrom<String> for TextColor {
    type Error = ParseOptionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TextColor> for String {
    fn from(color: TextColor) -> Self {
        color.hex().to_string()
    }
}

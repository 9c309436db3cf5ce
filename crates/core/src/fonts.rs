//! Font catalog.
//!
//! The editor lets the user pick one of a small, fixed set of font names. The
//! selection is carried as metadata on save; no font file is ever resolved, so
//! every catalog entry maps to "no resource override" and the renderer keeps
//! its built-in face.

use crate::error::ParseOptionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One entry of the font catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FontChoice {
    /// The renderer's built-in face.
    #[serde(rename = "System Default")]
    SystemDefault,
    /// Arial.
    Arial,
    /// Helvetica.
    Helvetica,
    /// Times.
    Times,
    /// Courier.
    Courier,
}

/// Font selected for a fresh session.
pub const DEFAULT_FONT: FontChoice = FontChoice::SystemDefault;

impl FontChoice {
    /// Every catalog entry, in dropdown order.
    pub const ALL: [FontChoice; 5] = [
        FontChoice::SystemDefault,
        FontChoice::Arial,
        FontChoice::Helvetica,
        FontChoice::Times,
        FontChoice::Courier,
    ];

    /// Name shown in the picker and emitted in save metadata.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SystemDefault => "System Default",
            Self::Arial => "Arial",
            Self::Helvetica => "Helvetica",
            Self::Times => "Times",
            Self::Courier => "Courier",
        }
    }

    /// Position of this entry in [`FontChoice::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|font| *font == self)
            .unwrap_or_default()
    }

    /// Resource locator for this font, if one overrides the default face.
    pub fn resource(self) -> Option<&'static str> {
        font_resource(self)
    }
}

/// Look up the resource locator for a catalog entry.
///
/// Always `None`: font loading is disabled and the renderer falls back to its
/// default face. The choice is still tracked for save metadata.
pub fn font_resource(_choice: FontChoice) -> Option<&'static str> {
    None
}

impl Default for FontChoice {
    fn default() -> Self {
        DEFAULT_FONT
    }
}

impl fmt::Display for FontChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for FontChoice {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|font| font.display_name() == s)
            .ok_or_else(|| ParseOptionError::UnknownFont(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_entries_in_order() {
        let names: Vec<_> = FontChoice::ALL.iter().map(|f| f.display_name()).collect();
        assert_eq!(
            names,
            ["System Default", "Arial", "Helvetica", "Times", "Courier"]
        );
        assert_eq!(FontChoice::Times.index(), 3);
    }

    #[test]
    fn no_entry_overrides_the_default_face() {
        for font in FontChoice::ALL {
            assert_eq!(font.resource(), None);
        }
    }

    #[test]
    fn parses_display_names_only() {
        assert_eq!(
            "System Default".parse::<FontChoice>().unwrap(),
            FontChoice::SystemDefault
        );
        assert_eq!("Courier".parse::<FontChoice>().unwrap(), FontChoice::Courier);
        assert!("Comic Sans".parse::<FontChoice>().is_err());
        assert!("courier".parse::<FontChoice>().is_err());
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&FontChoice::SystemDefault).unwrap();
        assert_eq!(json, "\"System Default\"");
        let back: FontChoice = serde_json::from_str("\"Helvetica\"").unwrap();
        assert_eq!(back, FontChoice::Helvetica);
    }
}

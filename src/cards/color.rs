//! The fixed card color palette.

use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// A card color.
///
/// "No color" is expressed as `Option<Color>::None`, never as a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// The whole palette, in print order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    /// Full lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
        }
    }

    /// One-letter label used on printed cards.
    #[must_use]
    pub const fn short_name(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Blue => 'b',
            Color::Green => 'g',
            Color::Yellow => 'y',
        }
    }

    /// Parse a persisted color name.
    ///
    /// Accepts full or one-letter names in any case. `"none"` and the empty
    /// string mean "no color" and yield `Ok(None)`.
    pub fn parse_optional(name: &str) -> Result<Option<Color>, CardError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "" | "none" | "n" => Ok(None),
            "red" | "r" => Ok(Some(Color::Red)),
            "blue" | "b" => Ok(Some(Color::Blue)),
            "green" | "g" => Ok(Some(Color::Green)),
            "yellow" | "y" => Ok(Some(Color::Yellow)),
            _ => Err(CardError::UnknownColor(name.to_string())),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Color {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse_optional(s)?.ok_or_else(|| CardError::UnknownColor(s.to_string()))
    }
}

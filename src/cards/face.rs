//! Card faces - the immutable printed value of a card.
//!
//! A `CardFace` is what matters for play: a color, a number, or both.
//! `edition` and `stamp` are opaque print metadata the rules never read.
//!
//! ## Kinds
//!
//! - **Number card**: number, no color (`"3"`). Fusion base and number-adder.
//! - **Color card**: color, no number (`"r"`). Fusion color donor.
//! - **Colored number**: both (`"3r"`). A complete attack on its own.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::record::CardRecord;
use crate::error::CardError;

/// The immutable value printed on a card.
///
/// Invariant: at least one of `color` / `number` is set, and `number` is
/// positive when present.
///
/// Serialized as a `CardRecord`, so deserializing checks the invariant too.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardRecord", into = "CardRecord")]
pub struct CardFace {
    color: Option<Color>,
    number: Option<u32>,
    edition: Option<String>,
    stamp: Option<String>,
}

impl CardFace {
    /// Build a face, validating the invariant.
    pub fn try_new(color: Option<Color>, number: Option<u32>) -> Result<Self, CardError> {
        if number == Some(0) {
            return Err(CardError::ZeroNumber);
        }
        if color.is_none() && number.is_none() {
            return Err(CardError::Blank);
        }
        Ok(Self {
            color,
            number,
            edition: None,
            stamp: None,
        })
    }

    /// A colorless number card.
    ///
    /// Panics if `number` is zero.
    #[must_use]
    pub fn number_card(number: u32) -> Self {
        assert!(number > 0, "Card number must be positive");
        Self {
            color: None,
            number: Some(number),
            edition: None,
            stamp: None,
        }
    }

    /// A color card with no number.
    #[must_use]
    pub fn color_card(color: Color) -> Self {
        Self {
            color: Some(color),
            number: None,
            edition: None,
            stamp: None,
        }
    }

    /// A card with both a color and a number.
    ///
    /// Panics if `number` is zero.
    #[must_use]
    pub fn colored(color: Color, number: u32) -> Self {
        assert!(number > 0, "Card number must be positive");
        Self {
            color: Some(color),
            number: Some(number),
            edition: None,
            stamp: None,
        }
    }

    /// Attach edition metadata.
    #[must_use]
    pub fn with_edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = Some(edition.into());
        self
    }

    /// Attach stamp metadata.
    #[must_use]
    pub fn with_stamp(mut self, stamp: impl Into<String>) -> Self {
        self.stamp = Some(stamp.into());
        self
    }

    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    #[must_use]
    pub fn number(&self) -> Option<u32> {
        self.number
    }

    #[must_use]
    pub fn edition(&self) -> Option<&str> {
        self.edition.as_deref()
    }

    #[must_use]
    pub fn stamp(&self) -> Option<&str> {
        self.stamp.as_deref()
    }

    /// Color with no number: can only donate its color during fusion.
    #[must_use]
    pub fn is_color_only(&self) -> bool {
        self.color.is_some() && self.number.is_none()
    }

    /// Number with no color: can be a fusion base or a number-adder.
    #[must_use]
    pub fn is_number_only(&self) -> bool {
        self.number.is_some() && self.color.is_none()
    }

    /// Whether two faces match on the fields the rules read.
    ///
    /// Edition and stamp are ignored.
    #[must_use]
    pub fn same_value(&self, other: &CardFace) -> bool {
        self.color == other.color && self.number == other.number
    }
}

/// Prints the proxy label: `"3"`, `"3r"`, or `"r"`.
impl std::fmt::Display for CardFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(number) = self.number {
            write!(f, "{number}")?;
        }
        if let Some(color) = self.color {
            write!(f, "{}", color.short_name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_rejects_blank() {
        assert_eq!(CardFace::try_new(None, None), Err(CardError::Blank));
        assert_eq!(CardFace::try_new(Some(Color::Red), Some(0)), Err(CardError::ZeroNumber));
        assert!(CardFace::try_new(Some(Color::Red), None).is_ok());
        assert!(CardFace::try_new(None, Some(4)).is_ok());
    }

    #[test]
    #[should_panic(expected = "Card number must be positive")]
    fn test_number_zero_panics() {
        let _ = CardFace::number_card(0);
    }

    #[test]
    fn test_kinds() {
        assert!(CardFace::number_card(3).is_number_only());
        assert!(!CardFace::number_card(3).is_color_only());
        assert!(CardFace::color_card(Color::Blue).is_color_only());

        let both = CardFace::colored(Color::Green, 2);
        assert!(!both.is_color_only());
        assert!(!both.is_number_only());
    }

    #[test]
    fn test_labels() {
        assert_eq!(CardFace::number_card(3).to_string(), "3");
        assert_eq!(CardFace::colored(Color::Red, 3).to_string(), "3r");
        assert_eq!(CardFace::color_card(Color::Yellow).to_string(), "y");
    }

    #[test]
    fn test_same_value_ignores_metadata() {
        let plain = CardFace::colored(Color::Red, 5);
        let stamped = CardFace::colored(Color::Red, 5)
            .with_edition("first")
            .with_stamp("gold");

        assert!(plain.same_value(&stamped));
        assert_ne!(plain, stamped);
        assert_eq!(stamped.edition(), Some("first"));
        assert_eq!(stamped.stamp(), Some("gold"));
    }

    #[test]
    fn test_deserialize_validates() {
        let face: CardFace = serde_json::from_str(r#"{"color": "r", "number": 2}"#).unwrap();
        assert_eq!(face, CardFace::colored(Color::Red, 2));

        assert!(serde_json::from_str::<CardFace>(r#"{"stamp": "gold"}"#).is_err());
        assert!(serde_json::from_str::<CardFace>(r#"{"number": 0}"#).is_err());
    }
}

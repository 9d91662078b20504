//! Persisted card records.
//!
//! `CardRecord` mirrors what deck and problem files contain. Every field is
//! optional and missing fields mean "unset"; validation happens only when a
//! record is turned into a `CardFace`.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::face::CardFace;
use crate::error::CardError;

/// A card as written in a JSON file.
///
/// ```
/// use stackfuse::cards::{CardFace, CardRecord, Color};
///
/// let record: CardRecord = serde_json::from_str(r#"{"color": "red", "number": 3}"#).unwrap();
/// let face = CardFace::try_from(record).unwrap();
/// assert_eq!(face, CardFace::colored(Color::Red, 3));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardRecord {
    pub color: Option<String>,
    pub number: Option<u32>,
    pub edition: Option<String>,
    pub stamp: Option<String>,
}

impl TryFrom<CardRecord> for CardFace {
    type Error = CardError;

    fn try_from(record: CardRecord) -> Result<Self, Self::Error> {
        let color = match record.color.as_deref() {
            Some(name) => Color::parse_optional(name)?,
            None => None,
        };
        let mut face = CardFace::try_new(color, record.number)?;
        if let Some(edition) = record.edition {
            face = face.with_edition(edition);
        }
        if let Some(stamp) = record.stamp {
            face = face.with_stamp(stamp);
        }
        Ok(face)
    }
}

impl From<CardFace> for CardRecord {
    fn from(face: CardFace) -> Self {
        Self::from(&face)
    }
}

impl From<&CardFace> for CardRecord {
    fn from(face: &CardFace) -> Self {
        Self {
            color: face.color().map(|c| c.name().to_string()),
            number: face.number(),
            edition: face.edition().map(str::to_string),
            stamp: face.stamp().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_unset() {
        let record: CardRecord = serde_json::from_str(r#"{"number": 4}"#).unwrap();
        let face = CardFace::try_from(record).unwrap();

        assert_eq!(face.color(), None);
        assert_eq!(face.number(), Some(4));
        assert_eq!(face.edition(), None);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let record: CardRecord =
            serde_json::from_str(r#"{"color": "blue", "zone": "deck", "type": "color"}"#).unwrap();
        let face = CardFace::try_from(record).unwrap();
        assert_eq!(face, CardFace::color_card(Color::Blue));
    }

    #[test]
    fn test_none_color_string() {
        let record = CardRecord {
            color: Some("none".to_string()),
            number: Some(2),
            ..CardRecord::default()
        };
        assert_eq!(CardFace::try_from(record), Ok(CardFace::number_card(2)));
    }

    #[test]
    fn test_blank_record_rejected() {
        assert_eq!(CardFace::try_from(CardRecord::default()), Err(CardError::Blank));
    }

    #[test]
    fn test_metadata_carried() {
        let record: CardRecord =
            serde_json::from_str(r#"{"color": "green", "number": 1, "edition": "alpha", "stamp": "x"}"#)
                .unwrap();
        let face = CardFace::try_from(record).unwrap();

        assert_eq!(face.edition(), Some("alpha"));
        assert_eq!(face.stamp(), Some("x"));
        assert_eq!(CardRecord::from(&face).color.as_deref(), Some("green"));
    }
}

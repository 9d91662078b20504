//! Persisted problem tree records.
//!
//! A node is written either with a nested card or with the card fields
//! inline:
//!
//! ```json
//! { "card": { "color": "red", "number": 5 }, "children": [ ... ] }
//! { "id": "boss", "color": "red", "number": 5, "loot": 3, "children": [ ... ] }
//! ```
//!
//! Missing fields default to unset (no label, no loot, no children).

use serde::{Deserialize, Serialize};

use crate::cards::{CardFace, CardRecord};
use crate::error::CardError;

/// One node of a persisted problem tree, with its subtree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemRecord {
    /// Optional node name.
    #[serde(rename = "id")]
    pub label: Option<String>,
    /// Nested card. Takes precedence over the inline fields.
    pub card: Option<CardRecord>,
    /// Inline card color.
    pub color: Option<String>,
    /// Inline card number.
    pub number: Option<u32>,
    /// Loot for defeating this node.
    pub loot: u32,
    pub children: Vec<ProblemRecord>,
}

impl ProblemRecord {
    /// A leaf record with a nested card.
    #[must_use]
    pub fn leaf(card: CardRecord) -> Self {
        Self {
            card: Some(card),
            ..Self::default()
        }
    }

    /// Add a child record.
    #[must_use]
    pub fn with_child(mut self, child: ProblemRecord) -> Self {
        self.children.push(child);
        self
    }

    /// Set the loot.
    #[must_use]
    pub fn with_loot(mut self, loot: u32) -> Self {
        self.loot = loot;
        self
    }

    /// Resolve the node's card from the nested or inline fields.
    pub(crate) fn face(
        card: Option<CardRecord>,
        color: Option<String>,
        number: Option<u32>,
    ) -> Result<CardFace, CardError> {
        let record = card.unwrap_or(CardRecord {
            color,
            number,
            ..CardRecord::default()
        });
        CardFace::try_from(record)
    }
}

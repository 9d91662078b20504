//! Card instances - a face with an identity.
//!
//! Zones hold `Card`s. Two cards may share a face ("two red 3s") and still
//! be distinct members of different zones; the `EntityId` tells them apart.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::face::CardFace;
use crate::core::entity::EntityId;

/// A physical card in a session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique entity ID for this instance.
    pub id: EntityId,

    /// The printed value.
    pub face: CardFace,
}

impl Card {
    /// Create a card instance.
    #[must_use]
    pub fn new(id: EntityId, face: CardFace) -> Self {
        Self { id, face }
    }

    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.face.color()
    }

    #[must_use]
    pub fn number(&self) -> Option<u32> {
        self.face.number()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.face, self.id.0)
    }
}

//! The draw pile.
//!
//! A `Deck` is a closed `Zone` (it never accepts incoming moves) plus the
//! immutable list of faces it was built from. When it runs dry mid-draw it
//! is refilled from that list with fresh card identities and reshuffled, so
//! drawing never starves while the original list is non-empty.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::zone::Zone;
use crate::cards::{Card, CardFace};
use crate::core::entity::EntityAllocator;
use crate::core::rng::GameRng;

/// A shuffled, self-refilling draw pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    zone: Zone,
    original: Vec<CardFace>,
    reshuffles: u32,
}

impl Deck {
    /// Build a deck from faces and shuffle it.
    ///
    /// Capacity is the number of faces.
    pub fn new(faces: Vec<CardFace>, ids: &mut EntityAllocator, rng: &mut GameRng) -> Self {
        let mut deck = Self {
            zone: Zone::deck(faces.len()),
            original: faces,
            reshuffles: 0,
        };
        deck.populate(ids);
        deck.shuffle(rng);
        deck
    }

    /// Randomize the current order in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.zone.cards_mut());
    }

    /// Draw up to `n` cards from the end of the order.
    ///
    /// If the deck empties before `n` cards are drawn it is refilled from the
    /// original faces and reshuffled, then drawing continues. Fewer than `n`
    /// come back only when the original list is empty. Drawn cards belong to
    /// the caller.
    pub fn draw(&mut self, n: usize, ids: &mut EntityAllocator, rng: &mut GameRng) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(n);
        while drawn.len() < n {
            if self.zone.is_empty() {
                if self.original.is_empty() {
                    break;
                }
                self.reshuffle(ids, rng);
            }
            match self.zone.pop() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Refill from the original faces and shuffle.
    ///
    /// Cards still in the deck are dropped first; every refilled card gets a
    /// fresh id, so ids already drawn stay unique.
    pub fn reshuffle(&mut self, ids: &mut EntityAllocator, rng: &mut GameRng) {
        self.populate(ids);
        self.shuffle(rng);
        self.reshuffles += 1;
        debug!(cards = self.zone.len(), reshuffles = self.reshuffles, "deck reshuffled");
    }

    fn populate(&mut self, ids: &mut EntityAllocator) {
        let cards = self
            .original
            .iter()
            .map(|face| Card::new(ids.alloc(), face.clone()))
            .collect();
        self.zone.refill(cards);
    }

    /// Times the deck has been refilled from its original faces.
    #[must_use]
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    /// The faces the deck was built from, in build order.
    #[must_use]
    pub fn original(&self) -> &[CardFace] {
        &self.original
    }

    /// The deck as a zone (read-only).
    #[must_use]
    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    pub(crate) fn zone_mut(&mut self) -> &mut Zone {
        &mut self.zone
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.zone.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zone.is_empty()
    }
}

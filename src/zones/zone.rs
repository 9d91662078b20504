//! Bounded, ordered card zones and the move primitive.
//!
//! A `Zone` owns its cards. The capacity invariant `len <= max_size` holds
//! after every mutation: `add` hands the card back instead of overflowing,
//! and `move_card` checks everything before touching either zone.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::config::ZoneKind;
use crate::core::entity::EntityId;
use crate::error::ZoneError;

/// An ordered, capacity-bounded collection of cards.
///
/// ```
/// use stackfuse::cards::{Card, CardFace};
/// use stackfuse::core::{EntityId, ZoneKind};
/// use stackfuse::zones::{move_card, Zone};
///
/// let mut hand = Zone::hand(2);
/// let mut stack = Zone::stack(1);
///
/// hand.add(Card::new(EntityId(1), CardFace::number_card(3))).unwrap();
/// hand.add(Card::new(EntityId(2), CardFace::number_card(5))).unwrap();
///
/// assert!(move_card(EntityId(1), &mut hand, &mut stack).is_ok());
/// // The stack is full now; the second move is rejected and nothing changes.
/// assert!(move_card(EntityId(2), &mut hand, &mut stack).is_err());
/// assert_eq!(hand.len(), 1);
/// assert_eq!(stack.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    kind: ZoneKind,
    cards: Vec<Card>,
    max_size: usize,
    accepts_incoming: bool,
}

impl Zone {
    /// Create an empty zone that accepts incoming moves.
    #[must_use]
    pub fn new(kind: ZoneKind, max_size: usize) -> Self {
        Self {
            kind,
            cards: Vec::new(),
            max_size,
            accepts_incoming: true,
        }
    }

    /// An empty hand.
    #[must_use]
    pub fn hand(max_size: usize) -> Self {
        Self::new(ZoneKind::Hand, max_size)
    }

    /// An empty stack.
    #[must_use]
    pub fn stack(max_size: usize) -> Self {
        Self::new(ZoneKind::Stack, max_size)
    }

    /// An empty discard pile.
    #[must_use]
    pub fn discard(max_size: usize) -> Self {
        Self::new(ZoneKind::Discard, max_size)
    }

    /// A deck zone. Never accepts incoming moves.
    #[must_use]
    pub fn deck(max_size: usize) -> Self {
        Self {
            accepts_incoming: false,
            ..Self::new(ZoneKind::Deck, max_size)
        }
    }

    #[must_use]
    pub fn kind(&self) -> ZoneKind {
        self.kind
    }

    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Whether `move_card` may ever put cards into this zone.
    #[must_use]
    pub fn accepts_incoming(&self) -> bool {
        self.accepts_incoming
    }

    /// Cards in order (index 0 first added).
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.max_size
    }

    /// Room left before the zone is full.
    #[must_use]
    pub fn free_slots(&self) -> usize {
        self.max_size.saturating_sub(self.cards.len())
    }

    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Append a card.
    ///
    /// If the zone is full the card is handed back unchanged. The
    /// `accepts_incoming` flag is not checked here; it only gates moves.
    pub fn add(&mut self, card: Card) -> Result<(), Card> {
        if self.is_full() {
            return Err(card);
        }
        self.cards.push(card);
        Ok(())
    }

    /// Remove the first card with this id. `None` if absent.
    pub fn remove(&mut self, id: EntityId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(index))
    }

    /// Remove and return the last card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove every card, returning them in order.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Replace the contents, truncating to capacity.
    pub(crate) fn refill(&mut self, mut cards: Vec<Card>) {
        cards.truncate(self.max_size);
        self.cards = cards;
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }
}

/// Move a card from one zone to another.
///
/// Succeeds iff the card is in `from`, `to` accepts incoming moves, and `to`
/// has room. On success the card is removed from `from` and appended to `to`;
/// on failure neither zone changes.
pub fn move_card(id: EntityId, from: &mut Zone, to: &mut Zone) -> Result<(), ZoneError> {
    if !from.contains(id) {
        return Err(ZoneError::NotInZone {
            card: id,
            zone: from.kind,
        });
    }
    if !to.accepts_incoming {
        return Err(ZoneError::Closed(to.kind));
    }
    if to.is_full() {
        return Err(ZoneError::Full {
            zone: to.kind,
            max_size: to.max_size,
        });
    }

    if let Some(card) = from.remove(id) {
        to.cards.push(card);
    }
    Ok(())
}

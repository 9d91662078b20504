//! Serialized session snapshots.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::state::Session;
use crate::core::config::{SessionConfig, ZoneKind};
use crate::core::entity::EntityAllocator;
use crate::core::rng::{GameRng, GameRngState};
use crate::error::SessionError;
use crate::problem::ProblemTree;
use crate::stack::{Loot, Resolver};
use crate::zones::{Deck, Memory, Zone};

/// Everything needed to resume a session exactly where it stopped.
///
/// The RNG is stored as its word position, so the restored session
/// shuffles the same way the original would have.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub config: SessionConfig,
    pub rng: GameRngState,
    pub ids: EntityAllocator,
    pub deck: Deck,
    pub hand: Zone,
    pub stack: Zone,
    pub discard: Zone,
    pub memory: Memory,
    pub tree: ProblemTree,
    pub loot: Loot,
}

impl Checkpoint {
    /// Snapshot a session.
    #[must_use]
    pub fn capture(session: &Session) -> Self {
        let [hand, stack, discard] = session.zones.clone();
        Self {
            config: session.config.clone(),
            rng: session.rng.state(),
            ids: session.ids.clone(),
            deck: session.deck.clone(),
            hand,
            stack,
            discard,
            memory: session.memory.clone(),
            tree: session.tree.clone(),
            loot: session.loot,
        }
    }

    /// Check the invariants a live session keeps.
    ///
    /// Every zone is within capacity and of the kind its slot expects, card
    /// ids are unique across zones and were issued by `ids`, memory is
    /// within capacity, and the tree links are sound.
    pub fn validate(&self) -> Result<(), SessionError> {
        let zones = [
            (ZoneKind::Deck, self.deck.zone()),
            (ZoneKind::Hand, &self.hand),
            (ZoneKind::Stack, &self.stack),
            (ZoneKind::Discard, &self.discard),
        ];

        let mut seen = FxHashSet::default();
        for (kind, zone) in zones {
            if zone.kind() != kind {
                return Err(corrupt(format!("{kind} slot holds a {} zone", zone.kind())));
            }
            if zone.len() > zone.max_size() {
                return Err(corrupt(format!(
                    "{kind} holds {} cards, max {}",
                    zone.len(),
                    zone.max_size()
                )));
            }
            for card in zone.cards() {
                if card.id.raw() >= self.ids.allocated() {
                    return Err(corrupt(format!("{} in the {kind} was never allocated", card.id)));
                }
                if !seen.insert(card.id) {
                    return Err(corrupt(format!("{} appears in more than one place", card.id)));
                }
            }
        }

        if self.memory.len() > self.memory.capacity() {
            return Err(corrupt(format!(
                "memory holds {} records, max {}",
                self.memory.len(),
                self.memory.capacity()
            )));
        }
        self.tree
            .check_links()
            .map_err(|id| corrupt(format!("broken tree links at {id}")))
    }

    /// Validate and rebuild the session. The resolver comes from the stored
    /// config.
    pub fn into_session(self) -> Result<Session, SessionError> {
        self.validate()?;
        Ok(Session {
            resolver: Resolver::new(self.config.colorless, self.config.fusion),
            rng: GameRng::from_state(&self.rng),
            ids: self.ids,
            deck: self.deck,
            zones: [self.hand, self.stack, self.discard],
            memory: self.memory,
            tree: self.tree,
            loot: self.loot,
            config: self.config,
        })
    }
}

fn corrupt(reason: String) -> SessionError {
    SessionError::CorruptCheckpoint(reason)
}

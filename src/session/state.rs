//! The session: sole owner of all game state.

use tracing::{debug, trace};

use super::checkpoint::Checkpoint;
use super::view::SessionView;
use crate::cards::{Card, CardFace};
use crate::core::config::{SessionConfig, TreeShape, ZoneKind};
use crate::core::entity::{EntityAllocator, EntityId};
use crate::core::rng::GameRng;
use crate::error::{SessionError, ZoneError};
use crate::problem::{CardGenerator, ProblemTree};
use crate::stack::{Attack, AttackOutcome, Loot, Resolution, Resolver};
use crate::zones::{move_card, Deck, Memory, Zone};

const HAND: usize = 0;
const STACK: usize = 1;
const DISCARD: usize = 2;

/// Index of a non-deck zone in `Session::zones`.
fn slot(kind: ZoneKind) -> Option<usize> {
    match kind {
        ZoneKind::Deck => None,
        ZoneKind::Hand => Some(HAND),
        ZoneKind::Stack => Some(STACK),
        ZoneKind::Discard => Some(DISCARD),
    }
}

/// One game in progress.
///
/// Owns the deck, hand, stack, discard, memory, problem tree, and loot.
/// Commands mutate it in place and run to completion; nothing here is
/// shared with other sessions.
///
/// ```
/// use stackfuse::cards::{CardFace, Color};
/// use stackfuse::core::{SessionConfig, ZoneKind};
/// use stackfuse::problem::ProblemTree;
/// use stackfuse::session::Session;
///
/// let mut tree = ProblemTree::new();
/// tree.set_root(CardFace::colored(Color::Red, 2), 1);
///
/// let deck = vec![CardFace::number_card(2), CardFace::color_card(Color::Red)];
/// let config = SessionConfig::default().with_hand_size(2);
/// let mut session = Session::new(config, deck, tree);
///
/// // Play the 2 first, then the red.
/// let mut hand: Vec<_> = session.zone(ZoneKind::Hand).cards().to_vec();
/// hand.sort_by_key(|card| card.number().is_none());
/// for card in &hand {
///     session.play(card.id).unwrap();
/// }
///
/// let resolution = session.commit_stack();
/// assert_eq!(resolution.hits(), 1);
/// assert!(session.is_cleared());
/// assert_eq!(session.loot().value(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    pub(super) config: SessionConfig,
    pub(super) rng: GameRng,
    pub(super) ids: EntityAllocator,
    pub(super) deck: Deck,
    /// Hand, stack, discard.
    pub(super) zones: [Zone; 3],
    pub(super) memory: Memory,
    pub(super) tree: ProblemTree,
    pub(super) loot: Loot,
    pub(super) resolver: Resolver,
}

impl Session {
    /// Start a session: shuffle the deck and deal the opening hand.
    #[must_use]
    pub fn new(config: SessionConfig, faces: Vec<CardFace>, tree: ProblemTree) -> Self {
        let mut rng = GameRng::new(config.seed);
        let mut ids = EntityAllocator::new();
        let deck = Deck::new(faces, &mut ids, &mut rng);

        let mut session = Self {
            zones: [
                Zone::hand(config.hand_size),
                Zone::stack(config.stack_size),
                Zone::discard(config.discard_size),
            ],
            memory: Memory::new(config.memory_size),
            resolver: Resolver::new(config.colorless, config.fusion),
            loot: Loot::new(),
            config,
            rng,
            ids,
            deck,
            tree,
        };
        let dealt = session.refill_hand();
        debug!(
            deck = session.deck.len(),
            hand = dealt,
            nodes = session.tree.len(),
            "session started"
        );
        session
    }

    /// Start a session against a procedurally generated tree.
    ///
    /// The tree draws from its own RNG stream, so the deck order does not
    /// depend on the tree shape.
    #[must_use]
    pub fn with_random_tree<G>(
        config: SessionConfig,
        faces: Vec<CardFace>,
        shape: &TreeShape,
        generator: &mut G,
    ) -> Self
    where
        G: CardGenerator + ?Sized,
    {
        let mut rng = GameRng::new(config.seed).for_context("problem-tree");
        let tree = ProblemTree::generate_random_tree(shape, generator, &mut rng);
        Self::new(config, faces, tree)
    }

    // === Queries ===

    /// The config this session was started with.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current contents of a zone, in order.
    #[must_use]
    pub fn zone(&self, kind: ZoneKind) -> &Zone {
        match slot(kind) {
            Some(index) => &self.zones[index],
            None => self.deck.zone(),
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn tree(&self) -> &ProblemTree {
        &self.tree
    }

    /// Attack history, most recent first.
    #[must_use]
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    #[must_use]
    pub fn loot(&self) -> Loot {
        self.loot
    }

    /// True once every problem node is defeated.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.tree.is_cleared()
    }

    /// Borrowed snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> SessionView<'_> {
        SessionView::new(self)
    }

    // === Commands ===

    /// Move a card between two zones.
    ///
    /// On error neither zone changes. The deck can be a source but never a
    /// destination.
    pub fn move_card(&mut self, id: EntityId, from: ZoneKind, to: ZoneKind) -> Result<(), ZoneError> {
        let result = if from == to {
            Err(ZoneError::SameZone(from))
        } else {
            match (slot(from), slot(to)) {
                (Some(f), Some(t)) => {
                    let (source, dest) = self.zone_pair(f, t);
                    move_card(id, source, dest)
                }
                (None, Some(t)) => move_card(id, self.deck.zone_mut(), &mut self.zones[t]),
                (Some(f), None) => move_card(id, &mut self.zones[f], self.deck.zone_mut()),
                (None, None) => Err(ZoneError::SameZone(from)),
            }
        };

        if let Err(err) = &result {
            trace!(card = %id, from = ?from, to = ?to, %err, "move rejected");
        }
        result
    }

    /// Move a card from the hand onto the stack.
    pub fn play(&mut self, id: EntityId) -> Result<(), ZoneError> {
        self.move_card(id, ZoneKind::Hand, ZoneKind::Stack)
    }

    /// Move a card from the hand to the discard.
    pub fn discard(&mut self, id: EntityId) -> Result<(), ZoneError> {
        self.move_card(id, ZoneKind::Hand, ZoneKind::Discard)
    }

    /// Draw up to `n` cards into the hand. Returns how many were drawn.
    ///
    /// Never draws more than the hand has room for.
    pub fn draw(&mut self, n: usize) -> usize {
        let hand = &mut self.zones[HAND];
        let wanted = n.min(hand.free_slots());
        let mut drawn = 0;
        for card in self.deck.draw(wanted, &mut self.ids, &mut self.rng) {
            if hand.add(card).is_err() {
                break;
            }
            drawn += 1;
        }
        drawn
    }

    /// Draw until the hand holds `hand_size` cards. Returns how many were drawn.
    pub fn refill_hand(&mut self) -> usize {
        let missing = self.zones[HAND].free_slots();
        self.draw(missing)
    }

    /// Put a new card rebuilt from memory record `index` onto the stack.
    ///
    /// The record stays in memory. Returns the new card's id.
    pub fn replay_memory(&mut self, index: usize) -> Result<EntityId, SessionError> {
        let record = self
            .memory
            .get(index)
            .copied()
            .ok_or(SessionError::NoMemoryRecord(index))?;
        let face = record.to_face()?;

        let stack = &mut self.zones[STACK];
        let full = ZoneError::Full {
            zone: ZoneKind::Stack,
            max_size: stack.max_size(),
        };
        if stack.is_full() {
            return Err(full.into());
        }
        let id = self.ids.alloc();
        stack.add(Card::new(id, face)).map_err(|_| full)?;
        debug!(index, card = %id, "replayed memory record");
        Ok(id)
    }

    /// Resolve a single attack against the tree, outside of the stack.
    pub fn attack(&mut self, attack: Attack) -> AttackOutcome {
        self.resolver
            .attack(attack, &mut self.tree, &mut self.memory, &mut self.loot)
    }

    /// Resolve and clear the stack.
    ///
    /// On an empty stack this does nothing. Otherwise the spent cards leave
    /// play and, if `refill_after_commit` is set, the hand is topped up.
    pub fn commit_stack(&mut self) -> Resolution {
        if self.zones[STACK].is_empty() {
            return Resolution::default();
        }

        let resolution = self.resolver.resolve_stack(
            &mut self.zones[STACK],
            &mut self.tree,
            &mut self.memory,
            &mut self.loot,
        );
        if self.config.refill_after_commit {
            self.refill_hand();
        }
        debug!(
            loot = self.loot.value(),
            cleared = self.is_cleared(),
            "stack committed"
        );
        resolution
    }

    // === Checkpoints ===

    /// Encode the whole session, RNG state included.
    pub fn checkpoint(&self) -> Result<Vec<u8>, SessionError> {
        Ok(bincode::serialize(&Checkpoint::capture(self))?)
    }

    /// Resume a session from `checkpoint` bytes.
    ///
    /// Bytes that decode but break a session invariant are rejected with
    /// `SessionError::CorruptCheckpoint`.
    pub fn restore(bytes: &[u8]) -> Result<Self, SessionError> {
        let checkpoint: Checkpoint = bincode::deserialize(bytes)?;
        checkpoint.into_session()
    }

    fn zone_pair(&mut self, from: usize, to: usize) -> (&mut Zone, &mut Zone) {
        if from < to {
            let (head, tail) = self.zones.split_at_mut(to);
            (&mut head[from], &mut tail[0])
        } else {
            let (head, tail) = self.zones.split_at_mut(from);
            (&mut tail[0], &mut head[to])
        }
    }
}

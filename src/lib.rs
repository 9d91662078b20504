//! # stackfuse
//!
//! Game-state core for a single-player stack-fusion card game.
//!
//! The player draws colored and numbered cards into a hand, plays them onto a
//! stack, and commits. Committed cards are fused into attacks and resolved
//! against a tree of opponent cards: an attack defeats the first exposed node
//! with the same color and number, which exposes that node's children and
//! awards its loot. Every attack is remembered, hit or miss.
//!
//! ## Design Principles
//!
//! 1. **One owner**: a `Session` holds every zone, the tree, memory, and loot.
//!    Commands run to completion; nothing is shared between sessions.
//!
//! 2. **Invariants at the boundary**: zones never exceed capacity, a card id
//!    lives in at most one zone, and a rejected move changes nothing.
//!
//! 3. **Derived, not stored**: node exposure is computed from defeated flags.
//!
//! 4. **Deterministic**: all randomness flows from a seeded `GameRng`, and a
//!    checkpoint restores it exactly.
//!
//! ## Modules
//!
//! - `core`: entity ids, RNG, configuration
//! - `cards`: colors, card faces, persisted records, the standard deck
//! - `zones`: bounded zones, the deck, memory
//! - `problem`: the problem tree and its generators
//! - `stack`: fusion and attack resolution
//! - `session`: the session, its view, and checkpoints
//! - `loader`: JSON decks, trees, and configs
//! - `error`: error types

pub mod core;
pub mod error;
pub mod cards;
pub mod zones;
pub mod problem;
pub mod stack;
pub mod session;
pub mod loader;

// Re-export commonly used types
pub use crate::core::{
    ColorlessRule, EntityAllocator, EntityId, FusionRules, GameRng, GameRngState, SessionConfig,
    TreeShape, ZoneKind,
};

pub use crate::error::{CardError, LoadError, SessionError, ZoneError};

pub use crate::cards::{standard_deck, Card, CardFace, CardRecord, Color};

pub use crate::zones::{move_card, Deck, Memory, MemoryRecord, Zone};

pub use crate::problem::{CardGenerator, NodeId, ProblemNode, ProblemRecord, ProblemTree, RandomCards};

pub use crate::stack::{fuse, Attack, AttackOutcome, Loot, Resolution, Resolver};

pub use crate::session::{Checkpoint, ExposedNode, Session, SessionView};

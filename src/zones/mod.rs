//! Zone system for card locations.
//!
//! One `Zone` type covers every card collection; roles (hand, stack,
//! discard, deck) differ only in capacity and whether incoming moves are
//! accepted. `Deck` wraps a closed zone with shuffle and refill, and
//! `Memory` keeps the attack history.
//!
//! ## Key Types
//!
//! - `Zone`: bounded, ordered card collection
//! - `move_card`: the only sanctioned transfer between zones
//! - `Deck`: shuffled draw pile that refills from its original faces
//! - `Memory`: most-recent-first attack history

pub mod deck;
pub mod memory;
pub mod zone;

pub use deck::Deck;
pub use memory::{Memory, MemoryRecord};
pub use zone::{move_card, Zone};

// Re-export zone kind from core for convenience
pub use crate::core::config::ZoneKind;

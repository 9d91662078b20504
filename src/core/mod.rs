//! Core types: card identity, RNG, configuration.
//!
//! These are the building blocks every other module depends on.

pub mod entity;
pub mod rng;
pub mod config;

pub use entity::{EntityAllocator, EntityId};
pub use rng::{GameRng, GameRngState};
pub use config::{ColorlessRule, FusionRules, SessionConfig, TreeShape, ZoneKind};

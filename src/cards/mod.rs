//! Card system: palette, faces, instances, and persisted records.
//!
//! ## Key Types
//!
//! - `Color`: the fixed four-color palette
//! - `CardFace`: immutable printed value (color and/or number)
//! - `Card`: a face with an `EntityId`, the unit zones hold
//! - `CardRecord`: permissive persisted form of a face
//!
//! `standard_deck()` builds the fixed 116-card print deck.

pub mod color;
pub mod deck_list;
pub mod face;
pub mod instance;
pub mod record;

pub use color::Color;
pub use deck_list::standard_deck;
pub use face::CardFace;
pub use instance::Card;
pub use record::CardRecord;

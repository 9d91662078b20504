//! Error types.
//!
//! Zone and card errors leave state untouched: a rejected move changes
//! neither zone, a rejected card is never constructed.

use std::path::PathBuf;

use crate::core::{EntityId, ZoneKind};

/// Errors building a card face.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    /// The card has neither a color nor a number.
    #[error("card has neither a color nor a number")]
    Blank,

    /// Card numbers are positive.
    #[error("card number must be positive")]
    ZeroNumber,

    /// The color name is not in the palette.
    #[error("unknown color: {0}")]
    UnknownColor(String),
}

/// Errors moving cards between zones.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZoneError {
    /// The card is not a member of the source zone.
    #[error("{card} is not in the {zone}")]
    NotInZone {
        /// The card that was looked up.
        card: EntityId,
        /// The zone it was expected in.
        zone: ZoneKind,
    },

    /// The destination zone is at capacity.
    #[error("the {zone} is full ({max_size} cards)")]
    Full {
        /// The destination zone.
        zone: ZoneKind,
        /// Its capacity.
        max_size: usize,
    },

    /// The destination zone never accepts incoming cards.
    #[error("the {0} does not accept cards")]
    Closed(ZoneKind),

    /// Source and destination are the same zone.
    #[error("cannot move a card from the {0} into itself")]
    SameZone(ZoneKind),
}

/// Errors loading persisted decks, trees, or configs.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON for the expected shape.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    /// A card record could not be turned into a card.
    #[error("invalid card at {path}: {source}")]
    Card {
        /// Location of the record, e.g. `deck[3]` or `root.children[1].card`.
        path: String,
        /// Why the record was rejected.
        #[source]
        source: CardError,
    },

    /// A problem collection with no problems in it.
    #[error("problem file contains no problems")]
    NoProblems,
}

/// Errors from session commands.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A zone move was rejected.
    #[error(transparent)]
    Zone(#[from] ZoneError),

    /// A card could not be built.
    #[error(transparent)]
    Card(#[from] CardError),

    /// No memory record at the requested index.
    #[error("no memory record at index {0}")]
    NoMemoryRecord(usize),

    /// Checkpoint encoding or decoding failed.
    #[error("checkpoint: {0}")]
    Checkpoint(#[from] bincode::Error),

    /// A checkpoint decoded but describes an impossible session.
    #[error("corrupt checkpoint: {0}")]
    CorruptCheckpoint(String),
}

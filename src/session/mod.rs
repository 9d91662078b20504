//! Game sessions.
//!
//! A `Session` is the single owner of one game's state. The presentation
//! layer sends it commands (`move_card`, `play`, `commit_stack`, ...) and
//! reads back a `SessionView` to redraw. Sessions can be checkpointed to
//! bytes and restored exactly, RNG state included.
//!
//! ## Key Types
//!
//! - `Session`: state plus commands
//! - `SessionView`: borrowed, serializable snapshot
//! - `Checkpoint`: owned snapshot encoded with bincode

mod checkpoint;
mod state;
mod view;

pub use checkpoint::Checkpoint;
pub use state::Session;
pub use view::{ExposedNode, SessionView};

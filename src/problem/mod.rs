//! The problem tree: the opponent's board.
//!
//! ## Key Types
//!
//! - `ProblemTree`: arena of nodes with computed exposure
//! - `ProblemNode` / `NodeId`: a node and its arena index
//! - `ProblemRecord`: persisted nested form
//! - `CardGenerator`: card factory for `ProblemTree::generate_random_tree`
//! - `RandomCards`: the default generator

pub mod generator;
pub mod node;
pub mod record;
pub mod tree;

pub use generator::{CardGenerator, RandomCards};
pub use node::{NodeId, ProblemNode};
pub use record::ProblemRecord;
pub use tree::ProblemTree;

// Re-export tree shape from core for convenience
pub use crate::core::config::TreeShape;

//! Problem tree nodes.
//!
//! Nodes live in the `ProblemTree` arena and refer to each other by
//! `NodeId` index; there are no pointers between nodes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardFace;

/// Index into the `ProblemTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// One opponent card in the problem tree.
///
/// Whether a node is exposed is never stored; `ProblemTree::is_exposed`
/// derives it from the defeated flags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemNode {
    /// The card this node represents.
    pub face: CardFace,

    /// Loot awarded when the node is defeated.
    pub loot: u32,

    /// Optional persisted name, used for lookups.
    pub label: Option<String>,

    /// Parent node. `None` for the root.
    pub parent: Option<NodeId>,

    /// Children, left to right.
    ///
    /// SmallVec optimizes for the usual branching factor of 0-4.
    pub children: SmallVec<[NodeId; 4]>,

    pub(crate) defeated: bool,
}

impl ProblemNode {
    pub(crate) fn new(face: CardFace, loot: u32, label: Option<String>, parent: Option<NodeId>) -> Self {
        Self {
            face,
            loot,
            label,
            parent,
            children: SmallVec::new(),
            defeated: false,
        }
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.defeated
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

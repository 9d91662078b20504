//! Attacks, their outcomes, and the loot counter.

use serde::{Deserialize, Serialize};

use crate::cards::{CardFace, Color};
use crate::problem::NodeId;
use crate::zones::MemoryRecord;

/// One logical attack: a played card or a fused combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attack {
    pub color: Option<Color>,
    pub number: Option<u32>,
}

impl Attack {
    #[must_use]
    pub fn new(color: Option<Color>, number: Option<u32>) -> Self {
        Self { color, number }
    }

    /// The memory record for this attack.
    #[must_use]
    pub fn record(&self) -> MemoryRecord {
        MemoryRecord::new(self.color, self.number)
    }
}

impl From<&CardFace> for Attack {
    fn from(face: &CardFace) -> Self {
        Self::new(face.color(), face.number())
    }
}

impl std::fmt::Display for Attack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.number {
            Some(n) => write!(f, "{n}")?,
            None => f.write_str("-")?,
        }
        match self.color {
            Some(c) => write!(f, " {c}"),
            None => f.write_str(" colorless"),
        }
    }
}

/// Result of resolving one attack against the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// The attack as resolved (after the colorless rule) and as remembered.
    pub attack: Attack,
    /// The node it defeated, if any.
    pub target: Option<NodeId>,
    /// Loot gained.
    pub loot: u32,
}

impl AttackOutcome {
    #[must_use]
    pub fn hit(&self) -> bool {
        self.target.is_some()
    }
}

/// Accumulated loot for a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Loot(u64);

impl Loot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add loot from a defeated node.
    pub fn add(&mut self, amount: u32) {
        self.0 = self.0.saturating_add(u64::from(amount));
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Loot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Loot: {}", self.0)
    }
}

//! Attack history, most recent first.
//!
//! Memory holds `{color, number}` records, not cards. New records go to the
//! front; once the capacity is exceeded the oldest record drops off the back.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardFace, Color};
use crate::error::CardError;

/// One remembered attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub color: Option<Color>,
    pub number: Option<u32>,
}

impl MemoryRecord {
    #[must_use]
    pub fn new(color: Option<Color>, number: Option<u32>) -> Self {
        Self { color, number }
    }

    /// Rebuild a card face from this record.
    pub fn to_face(&self) -> Result<CardFace, CardError> {
        CardFace::try_new(self.color, self.number)
    }
}

impl From<&CardFace> for MemoryRecord {
    fn from(face: &CardFace) -> Self {
        Self::new(face.color(), face.number())
    }
}

/// Capacity-bounded attack history.
///
/// Backed by `im::Vector` so views and checkpoints clone it in O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    records: Vector<MemoryRecord>,
    capacity: usize,
}

impl Memory {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vector::new(),
            capacity,
        }
    }

    /// Prepend a record, dropping the oldest if over capacity.
    pub fn record(&mut self, record: MemoryRecord) {
        self.records.push_front(record);
        while self.records.len() > self.capacity {
            self.records.pop_back();
        }
    }

    /// Most recent record.
    #[must_use]
    pub fn latest(&self) -> Option<&MemoryRecord> {
        self.records.front()
    }

    /// Record at `index` (0 = most recent).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MemoryRecord> {
        self.records.get(index)
    }

    /// Records, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &MemoryRecord> {
        self.records.iter()
    }

    /// Snapshot of the history. O(1).
    #[must_use]
    pub fn records(&self) -> Vector<MemoryRecord> {
        self.records.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

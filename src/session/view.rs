//! Read-only view for the presentation layer.

use im::Vector;
use serde::Serialize;

use super::state::Session;
use crate::cards::{Card, CardFace};
use crate::core::config::ZoneKind;
use crate::problem::NodeId;
use crate::zones::MemoryRecord;

/// An exposed problem node as shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExposedNode<'a> {
    pub id: NodeId,
    pub face: &'a CardFace,
    pub loot: u32,
    pub label: Option<&'a str>,
}

/// Everything a renderer needs for one frame.
///
/// Borrows from the session, so it cannot outlive the next command.
#[derive(Clone, Debug, Serialize)]
pub struct SessionView<'a> {
    pub deck_size: usize,
    pub hand: &'a [Card],
    pub stack: &'a [Card],
    pub discard: &'a [Card],
    /// In attack priority order.
    pub exposed: Vec<ExposedNode<'a>>,
    /// Most recent first.
    pub memory: Vector<MemoryRecord>,
    pub loot: u64,
    pub cleared: bool,
}

impl<'a> SessionView<'a> {
    pub(super) fn new(session: &'a Session) -> Self {
        let tree = session.tree();
        let exposed = tree
            .exposed_nodes()
            .into_iter()
            .filter_map(|id| {
                tree.get(id).map(|node| ExposedNode {
                    id,
                    face: &node.face,
                    loot: node.loot,
                    label: node.label.as_deref(),
                })
            })
            .collect();

        Self {
            deck_size: session.deck().len(),
            hand: session.zone(ZoneKind::Hand).cards(),
            stack: session.zone(ZoneKind::Stack).cards(),
            discard: session.zone(ZoneKind::Discard).cards(),
            exposed,
            memory: session.memory().records(),
            loot: session.loot().value(),
            cleared: session.is_cleared(),
        }
    }
}

//! Arena-based problem tree.
//!
//! Uses a flat `Vec<ProblemNode>` with index-based references. The tree is
//! built once (from a record or procedurally) and afterwards only changes by
//! nodes being defeated; it never regrows.
//!
//! ## Exposure
//!
//! A node is exposed when it is not defeated and it is either the root or
//! its parent is defeated. The exposed set is computed from the defeated
//! flags on every query, so it cannot drift from the tree shape.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::generator::CardGenerator;
use super::node::{NodeId, ProblemNode};
use super::record::ProblemRecord;
use crate::cards::CardFace;
use crate::core::config::TreeShape;
use crate::core::rng::GameRng;
use crate::error::LoadError;

/// The opponent's board: a tree of cards to defeat.
///
/// ```
/// use stackfuse::cards::{CardFace, Color};
/// use stackfuse::problem::ProblemTree;
///
/// let mut tree = ProblemTree::new();
/// let root = tree.set_root(CardFace::colored(Color::Red, 5), 1);
/// let a = tree.add_child(root, CardFace::colored(Color::Blue, 2), 1);
/// let b = tree.add_child(root, CardFace::colored(Color::Green, 3), 1);
///
/// assert_eq!(tree.exposed_nodes(), vec![root]);
/// tree.defeat(root);
/// assert_eq!(tree.exposed_nodes(), vec![a, b]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemTree {
    /// All nodes; the root, if any, is index 0.
    nodes: Vec<ProblemNode>,

    /// Persisted labels -> node.
    labels: FxHashMap<String, NodeId>,
}

impl ProblemTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from a persisted record.
    ///
    /// Children are added depth-first, left to right.
    pub fn from_record(record: ProblemRecord) -> Result<Self, LoadError> {
        let mut tree = Self::new();
        tree.insert_record(record, None, "root".to_string())?;
        Ok(tree)
    }

    fn insert_record(
        &mut self,
        record: ProblemRecord,
        parent: Option<NodeId>,
        path: String,
    ) -> Result<NodeId, LoadError> {
        let ProblemRecord {
            label,
            card,
            color,
            number,
            loot,
            children,
        } = record;

        let face = ProblemRecord::face(card, color, number).map_err(|source| LoadError::Card {
            path: format!("{path}.card"),
            source,
        })?;
        let id = self.alloc(ProblemNode::new(face, loot, label, parent));

        for (i, child) in children.into_iter().enumerate() {
            let child_id = self.insert_record(child, Some(id), format!("{path}.children[{i}]"))?;
            self.nodes[id.index()].children.push(child_id);
        }
        Ok(id)
    }

    /// Grow a random tree.
    ///
    /// The root is level 1. Every node at a level up to `shape.depth` gets a
    /// card from `generator` and a uniformly random number of children in
    /// `0..=shape.max_children`; children past `shape.depth` are not created.
    /// Depth 0 yields an empty tree.
    pub fn generate_random_tree<G>(shape: &TreeShape, generator: &mut G, rng: &mut GameRng) -> Self
    where
        G: CardGenerator + ?Sized,
    {
        let mut tree = Self::new();
        tree.grow(1, None, shape, generator, rng);
        tree
    }

    fn grow<G>(
        &mut self,
        level: u32,
        parent: Option<NodeId>,
        shape: &TreeShape,
        generator: &mut G,
        rng: &mut GameRng,
    ) -> Option<NodeId>
    where
        G: CardGenerator + ?Sized,
    {
        if level > shape.depth {
            return None;
        }
        let face = generator.generate(rng);
        let id = self.alloc(ProblemNode::new(face, shape.loot, None, parent));

        let count = rng.gen_range_inclusive(0..=shape.max_children);
        for _ in 0..count {
            if let Some(child) = self.grow(level + 1, Some(id), shape, generator, rng) {
                self.nodes[id.index()].children.push(child);
            }
        }
        Some(id)
    }

    fn alloc(&mut self, node: ProblemNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        if let Some(label) = &node.label {
            self.labels.entry(label.clone()).or_insert(id);
        }
        self.nodes.push(node);
        id
    }

    /// Set the root of an empty tree.
    ///
    /// Panics if the tree already has nodes.
    pub fn set_root(&mut self, face: CardFace, loot: u32) -> NodeId {
        assert!(self.nodes.is_empty(), "Tree already has a root");
        self.alloc(ProblemNode::new(face, loot, None, None))
    }

    /// Append a child under `parent`.
    ///
    /// Panics if `parent` is not in the tree.
    pub fn add_child(&mut self, parent: NodeId, face: CardFace, loot: u32) -> NodeId {
        assert!(parent.index() < self.nodes.len(), "Unknown parent {parent}");
        let id = self.alloc(ProblemNode::new(face, loot, None, Some(parent)));
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// The root node ID, if the tree is non-empty.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(NodeId::new(0))
        }
    }

    /// Get a node by ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&ProblemNode> {
        self.nodes.get(id.index())
    }

    /// Look a node up by its persisted label.
    #[must_use]
    pub fn find_label(&self, label: &str) -> Option<NodeId> {
        self.labels.get(label).copied()
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the node can be attacked right now.
    #[must_use]
    pub fn is_exposed(&self, id: NodeId) -> bool {
        let Some(node) = self.get(id) else {
            return false;
        };
        if node.defeated {
            return false;
        }
        match node.parent {
            None => true,
            Some(parent) => self.get(parent).is_some_and(|p| p.defeated),
        }
    }

    /// Every exposed node, depth-first, left to right.
    ///
    /// This order is the attack tie-break: the first matching node listed
    /// here is the one an attack hits.
    #[must_use]
    pub fn exposed_nodes(&self) -> Vec<NodeId> {
        let mut exposed = Vec::new();
        let Some(root) = self.root() else {
            return exposed;
        };

        let mut pending = vec![root];
        while let Some(id) = pending.pop() {
            let Some(node) = self.nodes.get(id.index()) else {
                continue;
            };
            if node.defeated {
                // Reverse so the leftmost child is visited first.
                pending.extend(node.children.iter().rev().copied());
            } else {
                exposed.push(id);
            }
        }
        exposed
    }

    /// Mark a node defeated. Its children become exposed.
    ///
    /// Returns `false` if the node is unknown or already defeated.
    pub fn defeat(&mut self, id: NodeId) -> bool {
        match self.nodes.get_mut(id.index()) {
            Some(node) if !node.defeated => {
                node.defeated = true;
                true
            }
            _ => false,
        }
    }

    /// True once nothing is left to attack.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.nodes.iter().all(|n| n.defeated)
    }

    /// Number of defeated nodes.
    #[must_use]
    pub fn defeated_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.defeated).count()
    }

    /// Deepest level in the tree (root = 1, empty = 0).
    #[must_use]
    pub fn depth(&self) -> u32 {
        let mut depths = vec![0u32; self.nodes.len()];
        for (i, node) in self.nodes.iter().enumerate() {
            depths[i] = node
                .parent
                .and_then(|p| depths.get(p.index()).copied())
                .map_or(1, |d| d + 1);
        }
        depths.into_iter().max().unwrap_or(0)
    }

    /// Verify parent and child links.
    ///
    /// The root is index 0 with no parent. Every other node's parent comes
    /// earlier in the arena and lists it exactly once among its children.
    /// Labels point inside the arena. Returns the first node that breaks a
    /// rule.
    pub fn check_links(&self) -> Result<(), NodeId> {
        let mut listed = vec![false; self.nodes.len()];
        for (id, node) in self.iter() {
            let parent_ok = match node.parent {
                None => id.index() == 0,
                Some(parent) => parent.index() < id.index(),
            };
            if !parent_ok {
                return Err(id);
            }
            for &child in &node.children {
                let back_link = self.get(child).is_some_and(|c| c.parent == Some(id));
                if !back_link || listed[child.index()] {
                    return Err(id);
                }
                listed[child.index()] = true;
            }
        }
        if let Some(orphan) = listed.iter().skip(1).position(|&seen| !seen) {
            return Err(NodeId::new(orphan as u32 + 1));
        }
        match self.labels.values().find(|id| id.index() >= self.nodes.len()) {
            Some(&id) => Err(id),
            None => Ok(()),
        }
    }

    /// Iterate over all nodes in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ProblemNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    /// R -> [A -> [A1, A2], B]
    fn three_level() -> (ProblemTree, [NodeId; 5]) {
        let mut tree = ProblemTree::new();
        let r = tree.set_root(CardFace::colored(Color::Red, 5), 3);
        let a = tree.add_child(r, CardFace::colored(Color::Blue, 2), 1);
        let b = tree.add_child(r, CardFace::colored(Color::Green, 4), 1);
        let a1 = tree.add_child(a, CardFace::colored(Color::Yellow, 1), 2);
        let a2 = tree.add_child(a, CardFace::colored(Color::Red, 1), 2);
        (tree, [r, a, b, a1, a2])
    }

    #[test]
    fn test_check_links() {
        let (tree, [r, a, b, a1, _]) = three_level();
        assert_eq!(tree.check_links(), Ok(()));
        assert_eq!(ProblemTree::new().check_links(), Ok(()));

        let mut dangling = tree.clone();
        dangling.nodes[r.index()].children[0] = NodeId::new(99);
        assert_eq!(dangling.check_links(), Err(r));
        dangling.defeat(r);
        assert_eq!(dangling.exposed_nodes(), vec![b]);
        assert_eq!(dangling.depth(), 3);

        let mut cycle = tree.clone();
        cycle.nodes[a.index()].parent = Some(a1);
        assert_eq!(cycle.check_links(), Err(r));

        let mut twice = tree;
        twice.nodes[r.index()].children.push(a);
        assert_eq!(twice.check_links(), Err(r));
    }

    #[test]
    fn test_fresh_tree_exposes_root_only() {
        let (tree, [r, ..]) = three_level();
        assert_eq!(tree.exposed_nodes(), vec![r]);
        assert!(tree.is_exposed(r));
    }

    #[test]
    fn test_defeating_root_exposes_children_in_order() {
        let (mut tree, [r, a, b, a1, _]) = three_level();

        assert!(tree.defeat(r));
        assert_eq!(tree.exposed_nodes(), vec![a, b]);
        assert!(!tree.is_exposed(a1));
    }

    #[test]
    fn test_grandchildren_listed_before_right_sibling() {
        let (mut tree, [r, a, b, a1, a2]) = three_level();
        tree.defeat(r);
        tree.defeat(a);

        assert_eq!(tree.exposed_nodes(), vec![a1, a2, b]);
    }

    #[test]
    fn test_defeat_twice_is_noop() {
        let (mut tree, [r, ..]) = three_level();
        assert!(tree.defeat(r));
        assert!(!tree.defeat(r));
        assert!(!tree.defeat(NodeId(99)));
        assert_eq!(tree.defeated_count(), 1);
    }

    #[test]
    fn test_cleared_after_all_defeated() {
        let (mut tree, ids) = three_level();
        for id in ids {
            assert!(!tree.is_cleared());
            tree.defeat(id);
        }
        assert!(tree.is_cleared());
        assert!(tree.exposed_nodes().is_empty());
    }

    #[test]
    fn test_empty_tree() {
        let tree = ProblemTree::new();
        assert!(tree.root().is_none());
        assert!(tree.exposed_nodes().is_empty());
        assert!(tree.is_cleared());
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_depth() {
        let (tree, _) = three_level();
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn test_generate_respects_depth_and_branching() {
        let shape = TreeShape::new(4, 3);
        let mut rng = GameRng::new(5);
        let mut cards = crate::problem::RandomCards::default();

        for _ in 0..20 {
            let tree = ProblemTree::generate_random_tree(&shape, &mut cards, &mut rng);
            assert!(tree.depth() <= 4);
            assert!(tree.iter().all(|(_, n)| n.children.len() <= 3));
            assert!(tree.iter().all(|(_, n)| n.loot == 1));
        }
    }

    #[test]
    fn test_generate_depth_zero_is_empty() {
        let shape = TreeShape::new(0, 3);
        let mut rng = GameRng::new(5);
        let mut cards = crate::problem::RandomCards::default();

        let tree = ProblemTree::generate_random_tree(&shape, &mut cards, &mut rng);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_generate_with_deterministic_cards() {
        let shape = TreeShape::new(2, 2);
        let mut rng = GameRng::new(8);
        let mut next = 0;
        let mut counter = |_: &mut GameRng| {
            next += 1;
            CardFace::number_card(next)
        };

        let tree = ProblemTree::generate_random_tree(&shape, &mut counter, &mut rng);

        // Cards are handed out in depth-first creation order.
        for (id, node) in tree.iter() {
            assert_eq!(node.face.number(), Some(id.raw() + 1));
        }
    }

    #[test]
    fn test_same_seed_same_tree() {
        let shape = TreeShape::new(3, 3);
        let mut cards = crate::problem::RandomCards::default();
        let a = ProblemTree::generate_random_tree(&shape, &mut cards, &mut GameRng::new(21));
        let b = ProblemTree::generate_random_tree(&shape, &mut cards, &mut GameRng::new(21));
        assert_eq!(a, b);
    }
}

//! Attack and stack resolution against the problem tree.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::attack::{Attack, AttackOutcome, Loot};
use super::fusion::fuse;
use crate::cards::{Card, Color};
use crate::core::config::{ColorlessRule, FusionRules};
use crate::problem::{NodeId, ProblemTree};
use crate::zones::{Memory, Zone};

/// Result of resolving a whole stack.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// One outcome per attack, in resolution order.
    pub outcomes: Vec<AttackOutcome>,
    /// The cards taken off the stack, in play order.
    pub spent: Vec<Card>,
}

impl Resolution {
    /// Loot gained across all attacks.
    #[must_use]
    pub fn loot(&self) -> u64 {
        self.outcomes.iter().map(|o| u64::from(o.loot)).sum()
    }

    /// Number of attacks that defeated a node.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.outcomes.iter().filter(|o| o.hit()).count()
    }

    /// True when nothing was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Applies attacks to a problem tree under a fixed rule set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Resolver {
    colorless: ColorlessRule,
    fusion: FusionRules,
}

impl Resolver {
    #[must_use]
    pub fn new(colorless: ColorlessRule, fusion: FusionRules) -> Self {
        Self { colorless, fusion }
    }

    #[must_use]
    pub fn colorless(&self) -> ColorlessRule {
        self.colorless
    }

    #[must_use]
    pub fn fusion(&self) -> FusionRules {
        self.fusion
    }

    /// Apply the colorless rule. Under `Wild` a colorless attack stays colorless.
    #[must_use]
    pub fn resolve_color(&self, color: Option<Color>) -> Option<Color> {
        match (color, self.colorless) {
            (Some(c), _) => Some(c),
            (None, ColorlessRule::Fallback(c)) => Some(c),
            (None, ColorlessRule::Wild) => None,
        }
    }

    /// The first exposed node the attack matches.
    ///
    /// Numbers must be equal. Colors must be equal, except that a colorless
    /// attack (only possible under `Wild`) matches any color. Ties go to the
    /// node listed first by `ProblemTree::exposed_nodes`.
    #[must_use]
    pub fn find_target(&self, attack: &Attack, tree: &ProblemTree) -> Option<NodeId> {
        tree.exposed_nodes().into_iter().find(|&id| {
            tree.get(id).is_some_and(|node| {
                node.face.number() == attack.number
                    && (attack.color.is_none() || node.face.color() == attack.color)
            })
        })
    }

    /// Resolve one attack.
    ///
    /// On a hit the target is defeated and its loot added. Hit or miss, the
    /// resolved attack is prepended to memory.
    pub fn attack(
        &self,
        attack: Attack,
        tree: &mut ProblemTree,
        memory: &mut Memory,
        loot: &mut Loot,
    ) -> AttackOutcome {
        let attack = Attack::new(self.resolve_color(attack.color), attack.number);
        let target = self.find_target(&attack, tree);

        let mut gained = 0;
        if let Some(id) = target {
            gained = tree.get(id).map_or(0, |node| node.loot);
            tree.defeat(id);
            loot.add(gained);
        }
        memory.record(attack.record());

        debug!(%attack, hit = target.is_some(), target = ?target, loot = gained, "attack resolved");
        AttackOutcome {
            attack,
            target,
            loot: gained,
        }
    }

    /// Empty the stack, fuse its cards, and resolve every resulting attack.
    ///
    /// Each fused attack is written to memory as fused, before the colorless
    /// rule applies, and then again by [`Resolver::attack`]. A stack attack
    /// therefore leaves two records. An empty stack resolves to nothing and
    /// leaves memory and loot alone.
    pub fn resolve_stack(
        &self,
        stack: &mut Zone,
        tree: &mut ProblemTree,
        memory: &mut Memory,
        loot: &mut Loot,
    ) -> Resolution {
        let spent = stack.take_all();
        let attacks = fuse(spent.iter().map(|c| &c.face), &self.fusion);

        let outcomes: Vec<_> = attacks
            .into_iter()
            .map(|attack| {
                memory.record(attack.record());
                self.attack(attack, tree, memory, loot)
            })
            .collect();

        let resolution = Resolution { outcomes, spent };
        debug!(
            cards = resolution.spent.len(),
            attacks = resolution.outcomes.len(),
            hits = resolution.hits(),
            loot = resolution.loot(),
            "stack resolved"
        );
        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardFace;
    use crate::core::entity::EntityId;

    fn small_tree() -> ProblemTree {
        let mut tree = ProblemTree::new();
        let root = tree.set_root(CardFace::colored(Color::Red, 8), 5);
        tree.add_child(root, CardFace::colored(Color::Blue, 3), 2);
        tree.add_child(root, CardFace::colored(Color::Green, 3), 2);
        tree
    }

    #[test]
    fn test_hit_defeats_and_awards_loot() {
        let resolver = Resolver::default();
        let mut tree = small_tree();
        let mut memory = Memory::new(8);
        let mut loot = Loot::new();

        let outcome = resolver.attack(
            Attack::new(Some(Color::Red), Some(8)),
            &mut tree,
            &mut memory,
            &mut loot,
        );

        assert!(outcome.hit());
        assert_eq!(outcome.target, tree.root());
        assert_eq!(loot.value(), 5);
        assert_eq!(memory.latest(), Some(&Attack::new(Some(Color::Red), Some(8)).record()));
    }

    #[test]
    fn test_miss_still_remembered() {
        let resolver = Resolver::default();
        let mut tree = small_tree();
        let before = tree.clone();
        let mut memory = Memory::new(8);
        let mut loot = Loot::new();

        let outcome = resolver.attack(
            Attack::new(Some(Color::Blue), Some(8)),
            &mut tree,
            &mut memory,
            &mut loot,
        );

        assert!(!outcome.hit());
        assert_eq!(tree, before);
        assert_eq!(loot.value(), 0);
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn test_unexposed_node_not_attackable() {
        let resolver = Resolver::default();
        let mut tree = small_tree();
        let mut memory = Memory::new(8);
        let mut loot = Loot::new();

        let outcome = resolver.attack(
            Attack::new(Some(Color::Blue), Some(3)),
            &mut tree,
            &mut memory,
            &mut loot,
        );
        assert!(!outcome.hit());
    }

    #[test]
    fn test_wild_tie_break_is_first_exposed() {
        let resolver = Resolver::default();
        let mut tree = small_tree();
        let mut memory = Memory::new(8);
        let mut loot = Loot::new();
        let root = tree.root().unwrap();
        tree.defeat(root);
        let blue = tree.exposed_nodes()[0];

        let outcome = resolver.attack(Attack::new(None, Some(3)), &mut tree, &mut memory, &mut loot);

        assert_eq!(outcome.target, Some(blue));
        assert_eq!(outcome.attack.color, None);
        assert_eq!(tree.exposed_nodes().len(), 1);
    }

    #[test]
    fn test_fallback_color() {
        let resolver = Resolver::new(ColorlessRule::Fallback(Color::Red), FusionRules::default());
        let mut tree = small_tree();
        let mut memory = Memory::new(8);
        let mut loot = Loot::new();

        let outcome = resolver.attack(Attack::new(None, Some(8)), &mut tree, &mut memory, &mut loot);

        assert!(outcome.hit());
        assert_eq!(outcome.attack.color, Some(Color::Red));
        assert_eq!(memory.latest().and_then(|r| r.color), Some(Color::Red));
    }

    #[test]
    fn test_fallback_color_can_miss() {
        let resolver = Resolver::new(ColorlessRule::Fallback(Color::Blue), FusionRules::default());
        let mut tree = small_tree();
        let mut memory = Memory::new(8);
        let mut loot = Loot::new();

        let outcome = resolver.attack(Attack::new(None, Some(8)), &mut tree, &mut memory, &mut loot);
        assert!(!outcome.hit());
    }

    #[test]
    fn test_resolve_stack_empties_stack() {
        let resolver = Resolver::default();
        let mut tree = small_tree();
        let mut memory = Memory::new(8);
        let mut loot = Loot::new();
        let mut stack = Zone::stack(4);
        stack.add(Card::new(EntityId(1), CardFace::number_card(8))).unwrap();
        stack.add(Card::new(EntityId(2), CardFace::color_card(Color::Red))).unwrap();

        let resolution = resolver.resolve_stack(&mut stack, &mut tree, &mut memory, &mut loot);

        assert!(stack.is_empty());
        assert_eq!(resolution.outcomes.len(), 1);
        assert_eq!(resolution.hits(), 1);
        assert_eq!(resolution.loot(), 5);
        assert_eq!(resolution.spent.len(), 2);
        assert_eq!(memory.len(), 2);
    }

    #[test]
    fn test_stack_attack_recorded_before_and_after_color_rule() {
        let resolver = Resolver::new(ColorlessRule::Fallback(Color::Red), FusionRules::default());
        let mut tree = small_tree();
        let mut memory = Memory::new(8);
        let mut loot = Loot::new();
        let mut stack = Zone::stack(4);
        stack.add(Card::new(EntityId(1), CardFace::number_card(8))).unwrap();

        let resolution = resolver.resolve_stack(&mut stack, &mut tree, &mut memory, &mut loot);

        assert_eq!(resolution.hits(), 1);
        let records: Vec<_> = memory.iter().copied().collect();
        assert_eq!(
            records,
            vec![
                Attack::new(Some(Color::Red), Some(8)).record(),
                Attack::new(None, Some(8)).record(),
            ]
        );
    }

    #[test]
    fn test_resolve_empty_stack_is_noop() {
        let resolver = Resolver::default();
        let mut tree = small_tree();
        let mut memory = Memory::new(8);
        let mut loot = Loot::new();
        let mut stack = Zone::stack(4);

        let resolution = resolver.resolve_stack(&mut stack, &mut tree, &mut memory, &mut loot);

        assert!(resolution.is_empty());
        assert!(memory.is_empty());
        assert_eq!(loot.value(), 0);
    }
}

//! Session configuration types.
//!
//! A session is configured at startup by providing:
//! - `SessionConfig`: zone capacities, RNG seed, and rule switches
//! - `ColorlessRule`: how an attack without a color is matched
//! - `FusionRules`: limits on stack fusion
//! - `TreeShape`: parameters for procedurally generated problem trees
//!
//! Every field has a default, so configs parsed from partial JSON fill in
//! whatever is missing.

use serde::{Deserialize, Serialize};

use crate::cards::Color;

/// The card zones a session owns.
///
/// Memory is not listed here: it stores attack records, not cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    /// Draw pile. Never accepts incoming moves.
    Deck,
    /// Cards available to play.
    Hand,
    /// Cards played this turn, awaiting resolution.
    Stack,
    /// Cards thrown away from the hand.
    Discard,
}

impl ZoneKind {
    /// All zone kinds, in display order.
    pub const ALL: [ZoneKind; 4] = [ZoneKind::Deck, ZoneKind::Hand, ZoneKind::Stack, ZoneKind::Discard];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ZoneKind::Deck => "deck",
            ZoneKind::Hand => "hand",
            ZoneKind::Stack => "stack",
            ZoneKind::Discard => "discard",
        }
    }
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How an attack that carries no color is matched against problem nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorlessRule {
    /// A colorless attack matches a node of any color with an equal number.
    #[default]
    Wild,
    /// A colorless attack is treated as this color.
    Fallback(Color),
}

/// Limits applied when fusing stack cards into attacks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionRules {
    /// Maximum number-adders one fused attack may absorb. `None` for unlimited.
    pub max_adders: Option<usize>,
}

impl FusionRules {
    /// Whether a fused attack that already absorbed `adders` may take another.
    #[must_use]
    pub fn accepts_adder(&self, adders: usize) -> bool {
        self.max_adders.map_or(true, |max| adders < max)
    }
}

/// Parameters for a procedurally generated problem tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeShape {
    /// Deepest level created. The root is level 1; depth 0 yields an empty tree.
    pub depth: u32,
    /// Each node gets a uniformly random number of children in `0..=max_children`.
    pub max_children: u32,
    /// Loot awarded for defeating each generated node.
    pub loot: u32,
}

impl Default for TreeShape {
    fn default() -> Self {
        Self {
            depth: 3,
            max_children: 2,
            loot: 1,
        }
    }
}

impl TreeShape {
    /// Create a tree shape with the default loot per node.
    #[must_use]
    pub fn new(depth: u32, max_children: u32) -> Self {
        Self {
            depth,
            max_children,
            ..Self::default()
        }
    }

    /// Set the loot per node.
    #[must_use]
    pub fn with_loot(mut self, loot: u32) -> Self {
        self.loot = loot;
        self
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed for shuffles and tree generation.
    pub seed: u64,
    /// Hand capacity. The hand is refilled up to this many cards.
    pub hand_size: usize,
    /// Stack capacity.
    pub stack_size: usize,
    /// Discard capacity.
    pub discard_size: usize,
    /// Memory capacity. The oldest records drop once it is exceeded.
    pub memory_size: usize,
    /// Matching rule for colorless attacks.
    pub colorless: ColorlessRule,
    /// Fusion limits.
    pub fusion: FusionRules,
    /// Draw the hand back up to `hand_size` after a non-empty commit.
    pub refill_after_commit: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            hand_size: 8,
            stack_size: 8,
            discard_size: 128,
            memory_size: 32,
            colorless: ColorlessRule::Wild,
            fusion: FusionRules::default(),
            refill_after_commit: true,
        }
    }
}

impl SessionConfig {
    /// Create a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the hand capacity.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the stack capacity.
    #[must_use]
    pub fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = size;
        self
    }

    /// Set the discard capacity.
    #[must_use]
    pub fn with_discard_size(mut self, size: usize) -> Self {
        self.discard_size = size;
        self
    }

    /// Set the memory capacity.
    #[must_use]
    pub fn with_memory_size(mut self, size: usize) -> Self {
        self.memory_size = size;
        self
    }

    /// Set the colorless matching rule.
    #[must_use]
    pub fn with_colorless(mut self, rule: ColorlessRule) -> Self {
        self.colorless = rule;
        self
    }

    /// Cap the number-adders per fused attack.
    #[must_use]
    pub fn with_max_adders(mut self, max: usize) -> Self {
        self.fusion.max_adders = Some(max);
        self
    }

    /// Enable or disable the post-commit hand refill.
    #[must_use]
    pub fn with_refill_after_commit(mut self, refill: bool) -> Self {
        self.refill_after_commit = refill;
        self
    }

    /// Capacity configured for a card zone.
    ///
    /// The deck is sized by its card list, so it reports `None`.
    #[must_use]
    pub fn capacity(&self, kind: ZoneKind) -> Option<usize> {
        match kind {
            ZoneKind::Deck => None,
            ZoneKind::Hand => Some(self.hand_size),
            ZoneKind::Stack => Some(self.stack_size),
            ZoneKind::Discard => Some(self.discard_size),
        }
    }
}

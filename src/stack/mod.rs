//! Stack resolution.
//!
//! Cards played onto the stack are fused into attacks and resolved against
//! the problem tree's exposed nodes. Every attack, hit or miss, is written
//! to memory; hits defeat a node and add its loot.
//!
//! ## Example Usage
//!
//! ```
//! use stackfuse::cards::{Card, CardFace, Color};
//! use stackfuse::core::EntityId;
//! use stackfuse::problem::ProblemTree;
//! use stackfuse::stack::{Loot, Resolver};
//! use stackfuse::zones::{Memory, Zone};
//!
//! let mut tree = ProblemTree::new();
//! tree.set_root(CardFace::colored(Color::Red, 8), 3);
//!
//! let mut stack = Zone::stack(4);
//! stack.add(Card::new(EntityId(0), CardFace::number_card(5))).unwrap();
//! stack.add(Card::new(EntityId(1), CardFace::number_card(3))).unwrap();
//! stack.add(Card::new(EntityId(2), CardFace::color_card(Color::Red))).unwrap();
//!
//! let mut memory = Memory::new(16);
//! let mut loot = Loot::new();
//! let resolution = Resolver::default().resolve_stack(&mut stack, &mut tree, &mut memory, &mut loot);
//!
//! assert_eq!(resolution.hits(), 1);
//! assert_eq!(loot.value(), 3);
//! assert!(tree.is_cleared());
//! ```

mod attack;
mod fusion;
mod resolver;

pub use attack::{Attack, AttackOutcome, Loot};
pub use fusion::fuse;
pub use resolver::{Resolution, Resolver};

//! Fusing played cards into attacks.
//!
//! The stack is reversed into a LIFO buffer and popped from its tail, so the
//! first card played surfaces first. Each popped card either attacks alone or
//! becomes the base of a fused attack:
//!
//! - A card without a number (a color card) attacks alone, unfused.
//! - A card with a number is a base. The fused attack starts with its number
//!   and no color; a colored base drops its own color. Then the next card is
//!   peeked, again and again:
//!   1. color slot empty and the peeked card is a color card: take its color;
//!   2. otherwise, adders still allowed and the peeked card has a number:
//!      add its number, ignoring any color it carries;
//!   3. otherwise stop; the peeked card stays for the next round.
//!
//! So a base absorbs at most one color donor and a chain of number-adders.

use crate::cards::{CardFace, Color};
use crate::core::config::FusionRules;

use super::attack::Attack;

/// A fused attack being assembled.
#[derive(Debug)]
struct Fused {
    number: u32,
    color: Option<Color>,
    adders: usize,
}

impl Fused {
    fn absorb(&mut self, next: &CardFace, rules: &FusionRules) -> bool {
        if self.color.is_none() && next.is_color_only() {
            self.color = next.color();
            return true;
        }
        match next.number() {
            Some(n) if rules.accepts_adder(self.adders) => {
                self.number = self.number.saturating_add(n);
                self.adders += 1;
                true
            }
            _ => false,
        }
    }
}

/// Fuse cards (in play order) into attacks, in resolution order.
///
/// ```
/// use stackfuse::cards::{CardFace, Color};
/// use stackfuse::core::FusionRules;
/// use stackfuse::stack::{fuse, Attack};
///
/// let played = [CardFace::number_card(8), CardFace::color_card(Color::Red)];
/// let attacks = fuse(played.iter(), &FusionRules::default());
/// assert_eq!(attacks, vec![Attack::new(Some(Color::Red), Some(8))]);
/// ```
pub fn fuse<'a, I>(played: I, rules: &FusionRules) -> Vec<Attack>
where
    I: IntoIterator<Item = &'a CardFace>,
{
    let mut pending: Vec<&CardFace> = played.into_iter().collect();
    pending.reverse();

    let mut attacks = Vec::new();
    while let Some(card) = pending.pop() {
        let Some(number) = card.number() else {
            attacks.push(Attack::from(card));
            continue;
        };

        let mut fused = Fused {
            number,
            color: None,
            adders: 0,
        };
        while let Some(next) = pending.last() {
            if !fused.absorb(next, rules) {
                break;
            }
            pending.pop();
        }
        attacks.push(Attack::new(fused.color, Some(fused.number)));
    }
    attacks
}

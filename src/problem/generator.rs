//! Card factories for procedurally generated trees.

use std::ops::RangeInclusive;

use crate::cards::{CardFace, Color};
use crate::core::rng::GameRng;

/// Produces the card for each generated problem node.
///
/// Implemented for any `FnMut(&mut GameRng) -> CardFace`, so tests can pass
/// a closure that ignores the RNG and yields a fixed sequence.
pub trait CardGenerator {
    /// Produce the next card.
    fn generate(&mut self, rng: &mut GameRng) -> CardFace;
}

impl<F> CardGenerator for F
where
    F: FnMut(&mut GameRng) -> CardFace,
{
    fn generate(&mut self, rng: &mut GameRng) -> CardFace {
        self(rng)
    }
}

/// Uniformly random colored number cards.
#[derive(Clone, Debug)]
pub struct RandomCards {
    numbers: RangeInclusive<u32>,
    palette: Vec<Color>,
}

impl Default for RandomCards {
    /// Any palette color, numbers 1 to 10.
    fn default() -> Self {
        Self {
            numbers: 1..=10,
            palette: Color::ALL.to_vec(),
        }
    }
}

impl RandomCards {
    /// Random cards over the given numbers and palette.
    ///
    /// Panics if the range starts at zero or is empty, or the palette is empty.
    #[must_use]
    pub fn new(numbers: RangeInclusive<u32>, palette: Vec<Color>) -> Self {
        assert!(*numbers.start() > 0, "Card numbers must be positive");
        assert!(!numbers.is_empty(), "Number range must not be empty");
        assert!(!palette.is_empty(), "Palette must not be empty");
        Self { numbers, palette }
    }
}

impl CardGenerator for RandomCards {
    fn generate(&mut self, rng: &mut GameRng) -> CardFace {
        let number = rng.gen_range_inclusive(self.numbers.clone());
        let color = rng.choose(&self.palette).copied().unwrap_or(Color::Red);
        CardFace::colored(color, number)
    }
}

//! The fixed print deck.

use super::color::Color;
use super::face::CardFace;

/// Copies of each distinct card in the print deck.
pub const COPIES: usize = 4;

/// Highest number printed.
pub const MAX_NUMBER: u32 = 5;

/// Build the standard deck in print order.
///
/// For each number `1..=5`: four colorless copies, then four copies in each
/// color. After that, four color-only cards per color. 116 cards in total.
#[must_use]
pub fn standard_deck() -> Vec<CardFace> {
    let mut cards = Vec::with_capacity(standard_deck_len());

    for number in 1..=MAX_NUMBER {
        cards.extend(std::iter::repeat_with(|| CardFace::number_card(number)).take(COPIES));
        for color in Color::ALL {
            cards.extend(std::iter::repeat_with(|| CardFace::colored(color, number)).take(COPIES));
        }
    }

    for color in Color::ALL {
        cards.extend(std::iter::repeat_with(|| CardFace::color_card(color)).take(COPIES));
    }

    cards
}

/// Number of cards `standard_deck` returns.
#[must_use]
pub const fn standard_deck_len() -> usize {
    let per_number = COPIES * (1 + Color::ALL.len());
    MAX_NUMBER as usize * per_number + COPIES * Color::ALL.len()
}

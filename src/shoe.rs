//! The shoe cards are drawn from.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::card::{Card, DECK_SIZE, standard_deck};
use crate::error::EmptyShoeError;

/// Smallest supported number of decks in a shoe.
pub const MIN_DECKS: u8 = 1;
/// Largest supported number of decks in a shoe.
pub const MAX_DECKS: u8 = 2;
/// Deck count used when an unsupported count is requested.
pub const DEFAULT_DECKS: u8 = 1;

/// Maps a requested deck count onto the supported range.
///
/// Counts outside `MIN_DECKS..=MAX_DECKS` fall back to [`DEFAULT_DECKS`]
/// rather than being rejected.
#[must_use]
pub const fn normalize_decks(decks: u8) -> u8 {
    if decks < MIN_DECKS || decks > MAX_DECKS {
        DEFAULT_DECKS
    } else {
        decks
    }
}

/// An ordered, shuffled pool of cards built from one or two decks.
///
/// Cards are drawn from the front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shoe {
    cards: VecDeque<Card>,
}

impl Shoe {
    /// Builds and shuffles a shoe of `decks` standard decks.
    ///
    /// The deck count is normalized with [`normalize_decks`].
    pub fn new<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let decks = normalize_decks(decks);
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            cards.extend(standard_deck());
        }

        cards.shuffle(rng);
        Self {
            cards: cards.into(),
        }
    }

    /// Creates a shoe that deals `cards` in the given order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Removes and returns the card at the front of the shoe.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoeError`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, EmptyShoeError> {
        self.cards.pop_front().ok_or(EmptyShoeError)
    }

    /// Returns the number of undrawn cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the undrawn cards in dealing order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::card::{Rank, Suit};

    fn multiplicity(shoe: &Shoe, card: Card) -> usize {
        shoe.cards().filter(|c| **c == card).count()
    }

    #[test]
    fn single_and_double_deck_sizes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(Shoe::new(1, &mut rng).remaining(), 52);
        assert_eq!(Shoe::new(2, &mut rng).remaining(), 104);
    }

    #[test]
    fn invalid_deck_count_defaults_to_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert_eq!(Shoe::new(0, &mut rng).remaining(), DECK_SIZE);
        assert_eq!(Shoe::new(7, &mut rng).remaining(), DECK_SIZE);
        assert_eq!(normalize_decks(3), DEFAULT_DECKS);
        assert_eq!(normalize_decks(2), 2);
    }

    #[test]
    fn every_card_appears_once_per_deck() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let shoe = Shoe::new(2, &mut rng);
        for card in standard_deck() {
            assert_eq!(multiplicity(&shoe, card), 2, "{card}");
        }
    }

    #[test]
    fn draw_takes_from_the_front() {
        let first = Card::new(Suit::Hearts, Rank::Ace);
        let second = Card::new(Suit::Clubs, Rank::Two);
        let mut shoe = Shoe::from_cards(alloc::vec![first, second]);

        assert_eq!(shoe.draw(), Ok(first));
        assert_eq!(shoe.remaining(), 1);
        assert_eq!(shoe.draw(), Ok(second));
        assert!(shoe.is_empty());
        assert_eq!(shoe.draw(), Err(EmptyShoeError));
    }

    #[test]
    fn same_seed_gives_same_order() {
        let a = Shoe::new(1, &mut ChaCha8Rng::seed_from_u64(9));
        let b = Shoe::new(1, &mut ChaCha8Rng::seed_from_u64(9));
        let c = Shoe::new(1, &mut ChaCha8Rng::seed_from_u64(10));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

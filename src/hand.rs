//! Hands and the participants holding them.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Highest score that does not bust.
pub const BLACKJACK: u16 = 21;

fn evaluate_cards(cards: &[Card]) -> (u16, bool) {
    let mut value: u16 = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += u16::from(card.value());
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// The ordered cards held by one participant during a round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards` in order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the end of the hand.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes every card, keeping the allocation.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Returns the cards in the order they were received.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the score of the hand.
    ///
    /// Aces count as 11 and are demoted to 1, one at a time, while the total
    /// exceeds 21. The score is recomputed from every card on each call.
    #[must_use]
    pub fn score(&self) -> u16 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score() == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Renders every card for display, e.g. `["ACE ♥", "TEN ♣"]`.
    #[must_use]
    pub fn display_cards(&self) -> Vec<String> {
        self.cards.iter().map(ToString::to_string).collect()
    }
}

/// Which side of the table a participant plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The human player.
    Player,
    /// The house.
    Dealer,
}

/// A named seat at the table holding one hand.
///
/// Player and dealer share this type; the dealer's drawing rule lives in
/// [`crate::game::dealer_should_hit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    role: Role,
    name: String,
    hand: Hand,
}

impl Participant {
    /// Name the dealer is shown with.
    pub const DEALER_NAME: &'static str = "Dealer";

    /// Creates the player seat with a display name.
    #[must_use]
    pub fn player(name: impl Into<String>) -> Self {
        Self {
            role: Role::Player,
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// Creates the dealer seat.
    #[must_use]
    pub fn dealer() -> Self {
        Self {
            role: Role::Dealer,
            name: Self::DEALER_NAME.into(),
            hand: Hand::new(),
        }
    }

    /// Returns the role of this seat.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns the score of the hand.
    #[must_use]
    pub fn score(&self) -> u16 {
        self.hand.score()
    }
}

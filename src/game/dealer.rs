extern crate alloc;

use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::EmptyShoeError;
use crate::hand::Role;
use crate::result::RoundResult;

use super::{Game, GameState};

/// Score at which the dealer stops drawing.
pub const DEALER_STAND_THRESHOLD: u16 = 17;

/// Dealer drawing rule: hit below 17, stand otherwise.
///
/// Soft and hard totals are treated alike.
#[must_use]
pub const fn dealer_should_hit(score: u16) -> bool {
    score < DEALER_STAND_THRESHOLD
}

impl Game {
    /// Dealer draws until the drawing rule says stand.
    ///
    /// Returns the cards drawn by the dealer.
    pub(super) fn dealer_play(&mut self) -> Result<Vec<Card>, EmptyShoeError> {
        let mut drawn_cards = Vec::new();

        while dealer_should_hit(self.dealer_score()) {
            let card = self.draw_to(Role::Dealer)?;
            drawn_cards.push(card);
        }

        debug!(
            drawn = drawn_cards.len(),
            dealer_score = self.dealer_score(),
            "dealer stands"
        );
        Ok(drawn_cards)
    }

    /// Ends the round and records it in the history.
    pub(super) fn resolve(&mut self) {
        let result = RoundResult::from_hands(self.player.hand(), self.dealer.hand());
        info!(
            outcome = ?result.outcome,
            player_score = result.player_score,
            dealer_score = result.dealer_score,
            "round resolved"
        );

        self.state = GameState::Resolved;
        self.history.record(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use crate::options::GameOptions;
    use crate::result::Outcome;
    use crate::shoe::Shoe;

    fn shoe(cards: &[(Suit, Rank)]) -> Shoe {
        Shoe::from_cards(cards.iter().map(|&(s, r)| Card::new(s, r)).collect())
    }

    #[test]
    fn threshold() {
        assert!(dealer_should_hit(12));
        assert!(dealer_should_hit(16));
        assert!(!dealer_should_hit(17));
        assert!(!dealer_should_hit(21));
        assert!(!dealer_should_hit(25));
    }

    #[test]
    fn dealer_on_seventeen_draws_nothing() {
        let mut game = Game::new(GameOptions::default(), 1);
        game.deal_from(shoe(&[
            (Suit::Hearts, Rank::Ten),
            (Suit::Clubs, Rank::Ten),
            (Suit::Hearts, Rank::King),
            (Suit::Clubs, Rank::Seven),
            (Suit::Spades, Rank::Two),
        ]))
        .unwrap();

        let drawn = game.stand().unwrap();
        assert!(drawn.is_empty());
        assert_eq!(game.cards_remaining(), 1);
        assert_eq!(
            game.history().all()[0].outcome,
            Outcome::PlayerHigher
        );
    }

    #[test]
    fn soft_seventeen_stands() {
        let mut game = Game::new(GameOptions::default(), 1);
        game.deal_from(shoe(&[
            (Suit::Hearts, Rank::Ten),
            (Suit::Clubs, Rank::Ace),
            (Suit::Hearts, Rank::Eight),
            (Suit::Clubs, Rank::Six),
            (Suit::Spades, Rank::Two),
        ]))
        .unwrap();

        assert!(game.stand().unwrap().is_empty());
        assert_eq!(game.dealer_score(), 17);
    }

    #[test]
    fn dealer_runs_out_of_cards() {
        let mut game = Game::new(GameOptions::default(), 1);
        game.deal_from(shoe(&[
            (Suit::Hearts, Rank::Ten),
            (Suit::Clubs, Rank::Seven),
            (Suit::Hearts, Rank::Eight),
            (Suit::Clubs, Rank::Five),
            (Suit::Spades, Rank::Two),
        ]))
        .unwrap();

        assert_eq!(game.stand(), Err(EmptyShoeError));
        assert_eq!(game.state(), GameState::DealerTurn);
        assert_eq!(game.dealer_score(), 14);
        assert!(game.history().is_empty());
    }

    #[test]
    fn stand_resumes_dealer_after_refill() {
        let mut game = Game::new(GameOptions::default(), 1);
        game.deal_from(shoe(&[
            (Suit::Hearts, Rank::Ten),
            (Suit::Clubs, Rank::Seven),
            (Suit::Hearts, Rank::Eight),
            (Suit::Clubs, Rank::Five),
            (Suit::Spades, Rank::Two),
        ]))
        .unwrap();
        assert_eq!(game.stand(), Err(EmptyShoeError));

        let mut snapshot = game.snapshot();
        snapshot.shoe.push(Card::new(Suit::Spades, Rank::King));
        let mut game = Game::restore(snapshot, 2).unwrap();
        assert_eq!(game.state(), GameState::DealerTurn);

        let drawn = game.stand().unwrap();
        assert_eq!(drawn, [Card::new(Suit::Spades, Rank::King)]);
        assert!(game.is_over());
        assert_eq!(game.dealer_score(), 24);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.history().all()[0].outcome, Outcome::DealerBust);
        assert_eq!(game.stand(), Ok(Vec::new()));
    }
}

use tracing::debug;

use crate::error::EmptyShoeError;
use crate::hand::{BLACKJACK, Role};
use crate::shoe::Shoe;

use super::{Game, GameState};

/// Seats in dealing order for one pass around the table.
const DEAL_ORDER: [Role; 2] = [Role::Player, Role::Dealer];

impl Game {
    /// Starts a new round from a freshly shuffled shoe.
    ///
    /// The shoe is rebuilt with the configured deck count, both hands are
    /// cleared, and two cards are dealt to each side, player first. A player
    /// 21 on the deal resolves the round straight away.
    ///
    /// # Errors
    ///
    /// Never fails with a freshly built shoe; the error is kept for
    /// [`Game::deal_from`].
    pub fn start_round(&mut self) -> Result<(), EmptyShoeError> {
        let shoe = Shoe::new(self.options.decks, &mut self.rng);
        self.deal_from(shoe)
    }

    /// Starts a new round dealing from `shoe` in its given order.
    ///
    /// # Errors
    ///
    /// Returns an error if `shoe` holds fewer than four cards. The game is
    /// then left waiting for a new round.
    pub fn deal_from(&mut self, shoe: Shoe) -> Result<(), EmptyShoeError> {
        self.shoe = shoe;
        self.player.hand_mut().clear();
        self.dealer.hand_mut().clear();
        self.state = GameState::WaitingForRound;

        for _ in 0..2 {
            for role in DEAL_ORDER {
                self.draw_to(role)?;
            }
        }

        self.state = GameState::PlayerTurn;
        debug!(
            player_score = self.player_score(),
            cards_remaining = self.cards_remaining(),
            "round dealt"
        );

        if self.player_score() == BLACKJACK {
            debug!("player dealt 21, resolving");
            self.resolve();
        }

        Ok(())
    }
}

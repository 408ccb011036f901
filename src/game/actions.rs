extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::EmptyShoeError;
use crate::hand::Role;

use super::{Game, GameState};

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// Returns the card drawn, or `None` when it is not the player's turn.
    /// A bust resolves the round against the dealer's dealt hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe is empty.
    pub fn hit(&mut self) -> Result<Option<Card>, EmptyShoeError> {
        if self.state != GameState::PlayerTurn {
            return Ok(None);
        }

        let card = self.draw_to(Role::Player)?;

        if self.player.hand().is_bust() {
            self.resolve();
        }

        Ok(Some(card))
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer then draws to 17 and the round is resolved. Returns the
    /// cards the dealer drew. Standing again on the dealer's turn resumes an
    /// interrupted dealer draw; otherwise nothing happens outside the
    /// player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe runs out while the dealer must draw. The
    /// round then stays on the dealer's turn, unresolved.
    pub fn stand(&mut self) -> Result<Vec<Card>, EmptyShoeError> {
        if !matches!(self.state, GameState::PlayerTurn | GameState::DealerTurn) {
            return Ok(Vec::new());
        }

        self.state = GameState::DealerTurn;
        let drawn = self.dealer_play()?;
        self.resolve();

        Ok(drawn)
    }
}

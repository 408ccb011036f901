//! Game state types.

use serde::{Deserialize, Serialize};

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// No round has been dealt yet, or the last deal ran out of cards.
    WaitingForRound,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and its result is recorded.
    Resolved,
}

impl GameState {
    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved)
    }
}

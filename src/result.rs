//! Round outcome types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::hand::{BLACKJACK, Hand};

/// Who took the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// The player won.
    Player,
    /// The dealer won.
    Dealer,
    /// Neither side won.
    Tie,
}

impl Winner {
    /// Returns the label shown in statistics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Dealer => "Dealer",
            Self::Tie => "Tie",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a round was decided, in resolution priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player finished closer to 21.
    PlayerHigher,
    /// Dealer finished closer to 21.
    DealerHigher,
    /// Equal scores.
    Push,
}

impl Outcome {
    /// Decides a round from the final scores.
    ///
    /// A player bust loses regardless of the dealer's score.
    #[must_use]
    pub const fn decide(player_score: u16, dealer_score: u16) -> Self {
        if player_score > BLACKJACK {
            Self::PlayerBust
        } else if dealer_score > BLACKJACK {
            Self::DealerBust
        } else if player_score > dealer_score {
            Self::PlayerHigher
        } else if player_score < dealer_score {
            Self::DealerHigher
        } else {
            Self::Push
        }
    }

    /// Returns the side that won.
    #[must_use]
    pub const fn winner(self) -> Winner {
        match self {
            Self::PlayerBust | Self::DealerHigher => Winner::Dealer,
            Self::DealerBust | Self::PlayerHigher => Winner::Player,
            Self::Push => Winner::Tie,
        }
    }
}

/// Result of the current round as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// The round has not been resolved yet.
    InProgress,
    /// The round is over.
    Resolved {
        /// How the round was decided.
        outcome: Outcome,
        /// Final player score.
        player_score: u16,
        /// Final dealer score.
        dealer_score: u16,
    },
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InProgress => f.write_str("Game in progress"),
            Self::Resolved {
                outcome,
                player_score,
                dealer_score,
            } => match outcome {
                Outcome::PlayerBust => write!(f, "You lost (You went over: {player_score})!"),
                Outcome::DealerBust => write!(f, "You won (Dealer went over: {dealer_score})!"),
                Outcome::PlayerHigher => f.write_str("You won!"),
                Outcome::DealerHigher => f.write_str("You lost!"),
                Outcome::Push => f.write_str("Tie!"),
            },
        }
    }
}

/// Summary of a finished round kept for statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// How the round was decided.
    pub outcome: Outcome,
    /// Final player score.
    pub player_score: u16,
    /// Final dealer score.
    pub dealer_score: u16,
    /// Player's cards as display strings.
    pub player_hand: Vec<String>,
    /// Dealer's cards as display strings.
    pub dealer_hand: Vec<String>,
}

impl RoundResult {
    /// Captures the final hands of a resolved round.
    #[must_use]
    pub fn from_hands(player: &Hand, dealer: &Hand) -> Self {
        let player_score = player.score();
        let dealer_score = dealer.score();
        Self {
            outcome: Outcome::decide(player_score, dealer_score),
            player_score,
            dealer_score,
            player_hand: player.display_cards(),
            dealer_hand: dealer.display_cards(),
        }
    }

    /// Returns the side that won.
    #[must_use]
    pub const fn winner(&self) -> Winner {
        self.outcome.winner()
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Winner: {} | Player Score: {} | Dealer Score: {}",
            self.winner(),
            self.player_score,
            self.dealer_score
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn resolution_priority() {
        assert_eq!(Outcome::decide(20, 17), Outcome::PlayerHigher);
        assert_eq!(Outcome::decide(22, 18), Outcome::PlayerBust);
        assert_eq!(Outcome::decide(22, 25), Outcome::PlayerBust);
        assert_eq!(Outcome::decide(19, 23), Outcome::DealerBust);
        assert_eq!(Outcome::decide(17, 19), Outcome::DealerHigher);
        assert_eq!(Outcome::decide(18, 18), Outcome::Push);
    }

    #[test]
    fn winners() {
        assert_eq!(Outcome::PlayerBust.winner(), Winner::Dealer);
        assert_eq!(Outcome::DealerBust.winner(), Winner::Player);
        assert_eq!(Outcome::Push.winner(), Winner::Tie);
    }

    #[test]
    fn result_wording() {
        let resolved = |outcome, player_score, dealer_score| GameResult::Resolved {
            outcome,
            player_score,
            dealer_score,
        };
        assert_eq!(GameResult::InProgress.to_string(), "Game in progress");
        assert_eq!(
            resolved(Outcome::PlayerBust, 24, 18).to_string(),
            "You lost (You went over: 24)!"
        );
        assert_eq!(
            resolved(Outcome::DealerBust, 19, 23).to_string(),
            "You won (Dealer went over: 23)!"
        );
        assert_eq!(resolved(Outcome::PlayerHigher, 20, 17).to_string(), "You won!");
        assert_eq!(resolved(Outcome::DealerHigher, 17, 20).to_string(), "You lost!");
        assert_eq!(resolved(Outcome::Push, 18, 18).to_string(), "Tie!");
    }

    #[test]
    fn round_result_summary_line() {
        let result = RoundResult {
            outcome: Outcome::PlayerHigher,
            player_score: 20,
            dealer_score: 17,
            player_hand: Vec::new(),
            dealer_hand: Vec::new(),
        };
        assert_eq!(
            result.to_string(),
            "Winner: Player | Player Score: 20 | Dealer Score: 17"
        );
    }
}

//! Versioned, field-by-field snapshots of a game.
//!
//! A snapshot carries everything observable about a [`Game`]: options, state,
//! the undrawn shoe in order, both hands and the full history. The random
//! number generator is not captured; [`Game::restore`] takes a new seed for
//! future shuffles.

extern crate alloc;

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::card::{Card, Rank, Suit};
use crate::error::SnapshotError;
use crate::game::{Game, GameState};
use crate::hand::Hand;
use crate::history::History;
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::shoe::{MAX_DECKS, MIN_DECKS, Shoe};

/// Snapshot format version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Full state of a [`Game`] at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Format version, see [`SNAPSHOT_VERSION`].
    pub version: u32,
    /// Game options, including the deck count for the next round.
    pub options: GameOptions,
    /// Current game state.
    pub state: GameState,
    /// Undrawn cards in dealing order.
    pub shoe: Vec<Card>,
    /// Player's cards.
    pub player_hand: Hand,
    /// Dealer's cards.
    pub dealer_hand: Hand,
    /// Finished rounds, oldest first.
    pub history: History,
}

const fn card_index(card: &Card) -> usize {
    card.suit as usize * Rank::ALL.len() + card.rank as usize
}

impl GameSnapshot {
    /// Checks that the snapshot describes a game this build can play on.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        if !(MIN_DECKS..=MAX_DECKS).contains(&self.options.decks) {
            return Err(SnapshotError::InvalidDeckCount(self.options.decks));
        }

        let mut counts = [0_u8; Suit::ALL.len() * Rank::ALL.len()];
        let in_play = self
            .shoe
            .iter()
            .chain(self.player_hand.cards())
            .chain(self.dealer_hand.cards());
        for card in in_play {
            let count = &mut counts[card_index(card)];
            *count = count.saturating_add(1);
            if *count > MAX_DECKS {
                return Err(SnapshotError::CardOverflow(*card));
            }
        }

        // A natural 21 or a bust ends the player's turn. A resolved round
        // must be the last one recorded.
        let dealt = self.player_hand.len() >= 2 && self.dealer_hand.len() >= 2;
        let consistent = match self.state {
            GameState::WaitingForRound => true,
            GameState::PlayerTurn => {
                dealt && !self.player_hand.is_bust() && !self.player_hand.is_blackjack()
            }
            GameState::DealerTurn => dealt,
            GameState::Resolved => {
                dealt
                    && self.history.all().last()
                        == Some(&RoundResult::from_hands(&self.player_hand, &self.dealer_hand))
            }
        };
        if !consistent {
            return Err(SnapshotError::InconsistentState);
        }

        Ok(())
    }
}

impl Game {
    /// Captures the full observable state of the game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            version: SNAPSHOT_VERSION,
            options: self.options().clone(),
            state: self.state(),
            shoe: self.shoe().cards().copied().collect(),
            player_hand: self.player_hand().clone(),
            dealer_hand: self.dealer_hand().clone(),
            history: self.history().clone(),
        }
    }

    /// Rebuilds a game from a snapshot, seeding future shuffles with `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot fails [`GameSnapshot::validate`].
    pub fn restore(snapshot: GameSnapshot, seed: u64) -> Result<Self, SnapshotError> {
        snapshot.validate()?;

        let GameSnapshot {
            options,
            state,
            shoe,
            player_hand,
            dealer_hand,
            history,
            ..
        } = snapshot;

        Ok(Self::from_parts(
            options,
            state,
            Shoe::from_cards(shoe),
            player_hand,
            dealer_hand,
            history,
            seed,
        ))
    }
}

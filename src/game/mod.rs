//! Game engine and state management.

extern crate alloc;

use alloc::string::{String, ToString};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::EmptyShoeError;
use crate::hand::{Hand, Participant, Role};
use crate::history::History;
use crate::options::GameOptions;
use crate::result::{GameResult, Outcome};
use crate::shoe::{Shoe, normalize_decks};

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use dealer::{DEALER_STAND_THRESHOLD, dealer_should_hit};
pub use state::GameState;

/// A single-player blackjack table that plays one round at a time.
///
/// The game owns the shoe, both participants, and the history of finished
/// rounds. Every command runs to completion before returning; callers poll
/// the accessors afterwards to render the table.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left in the current round's shoe.
    shoe: Shoe,
    /// Game options; `decks` applies to the next shoe.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    player: Participant,
    dealer: Participant,
    /// Finished rounds, oldest first.
    history: History,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// No cards are dealt until [`Game::start_round`] is called.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Game, GameOptions, GameState};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::WaitingForRound);
    ///
    /// game.start_round().unwrap();
    /// assert_eq!(game.player_hand().len(), 2);
    /// assert_eq!(game.dealer_hand().len(), 2);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let options = GameOptions {
            decks: normalize_decks(options.decks),
            ..options
        };
        let shoe = Shoe::new(options.decks, &mut rng);

        Self {
            shoe,
            player: Participant::player(options.player_name.clone()),
            dealer: Participant::dealer(),
            options,
            state: GameState::WaitingForRound,
            history: History::new(),
            rng,
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the deck count the next round will be dealt from.
    #[must_use]
    pub const fn deck_count(&self) -> u8 {
        self.options.decks
    }

    /// Changes the deck count for the next round.
    ///
    /// The live shoe is left alone. Counts other than 1 or 2 fall back to 1.
    pub fn set_deck_count(&mut self, decks: u8) {
        self.options.decks = normalize_decks(decks);
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns who is expected to act, if anyone.
    #[must_use]
    pub const fn turn(&self) -> Option<Role> {
        match self.state {
            GameState::PlayerTurn => Some(Role::Player),
            GameState::DealerTurn => Some(Role::Dealer),
            GameState::WaitingForRound | GameState::Resolved => None,
        }
    }

    /// Returns whether the player may hit or stand.
    #[must_use]
    pub const fn is_player_turn(&self) -> bool {
        matches!(self.state, GameState::PlayerTurn)
    }

    /// Returns whether the current round is over.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_resolved()
    }

    /// Returns the player seat.
    #[must_use]
    pub const fn player(&self) -> &Participant {
        &self.player
    }

    /// Returns the dealer seat.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        self.player.hand()
    }

    /// Returns the dealer's hand.
    ///
    /// Nothing is hidden here; the caller decides whether to show the hole card.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        self.dealer.hand()
    }

    /// Returns the player's score.
    #[must_use]
    pub fn player_score(&self) -> u16 {
        self.player.score()
    }

    /// Returns the dealer's score.
    #[must_use]
    pub fn dealer_score(&self) -> u16 {
        self.dealer.score()
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the live shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns every finished round.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Returns the result of the current round.
    #[must_use]
    pub fn game_result(&self) -> GameResult {
        if !self.is_over() {
            return GameResult::InProgress;
        }

        let player_score = self.player_score();
        let dealer_score = self.dealer_score();
        GameResult::Resolved {
            outcome: Outcome::decide(player_score, dealer_score),
            player_score,
            dealer_score,
        }
    }

    /// Returns the result of the current round as display text.
    #[must_use]
    pub fn result_text(&self) -> String {
        self.game_result().to_string()
    }

    fn draw_to(&mut self, role: Role) -> Result<Card, EmptyShoeError> {
        let card = self.shoe.draw()?;
        match role {
            Role::Player => self.player.hand_mut().add(card),
            Role::Dealer => self.dealer.hand_mut().add(card),
        }
        Ok(card)
    }

    /// Assembles a game from restored parts. Callers validate beforehand.
    pub(crate) fn from_parts(
        options: GameOptions,
        state: GameState,
        shoe: Shoe,
        player_hand: Hand,
        dealer_hand: Hand,
        history: History,
        seed: u64,
    ) -> Self {
        let mut player = Participant::player(options.player_name.clone());
        *player.hand_mut() = player_hand;
        let mut dealer = Participant::dealer();
        *dealer.hand_mut() = dealer_hand;

        Self {
            shoe,
            options,
            state,
            player,
            dealer,
            history,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

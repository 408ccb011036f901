//! Game configuration options.

extern crate alloc;

use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::shoe::{DEFAULT_DECKS, normalize_decks};

/// Name the player is shown with unless configured otherwise.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(2)
///     .with_player_name("Alice");
/// assert_eq!(options.decks, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// Number of decks in each new shoe (1 or 2).
    pub decks: u8,
    /// Display name of the player.
    pub player_name: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: DEFAULT_DECKS,
            player_name: DEFAULT_PLAYER_NAME.into(),
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// Counts other than 1 or 2 fall back to 1.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// assert_eq!(GameOptions::default().with_decks(2).decks, 2);
    /// assert_eq!(GameOptions::default().with_decks(6).decks, 1);
    /// ```
    #[must_use]
    pub fn with_decks(mut self, decks: u8) -> Self {
        self.decks = normalize_decks(decks);
        self
    }

    /// Sets the player's display name.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_name("Gamer");
    /// assert_eq!(options.player_name, "Gamer");
    /// ```
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }
}

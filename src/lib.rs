//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one round at a time: dealing
//! from a shuffled one- or two-deck shoe, player hits and stands, the dealer's
//! draw-to-17 rule, and resolution. Every finished round is appended to a
//! [`History`], and the whole table can be captured as a [`GameSnapshot`] and
//! written to disk with [`SaveFile`].
//!
//! # Example
//!
//! ```
//! use bjround::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default().with_decks(2), 42);
//! game.start_round()?;
//! if game.is_player_turn() {
//!     game.stand()?;
//! }
//! assert!(game.is_over());
//! assert_eq!(game.history().len(), 1);
//! # Ok::<(), bjround::EmptyShoeError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod history;
pub mod options;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod persistence;
pub mod result;
pub mod shoe;
pub mod snapshot;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use error::PersistenceError;
pub use error::{EmptyShoeError, SnapshotError};
pub use game::{DEALER_STAND_THRESHOLD, Game, GameState, dealer_should_hit};
pub use hand::{BLACKJACK, Hand, Participant, Role};
pub use history::{History, HistorySummary, RECENT_RESULTS_LIMIT};
pub use options::GameOptions;
#[cfg(feature = "std")]
pub use persistence::SaveFile;
pub use result::{GameResult, Outcome, RoundResult, Winner};
pub use shoe::Shoe;
pub use snapshot::{GameSnapshot, SNAPSHOT_VERSION};

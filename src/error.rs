//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Drawing from a shoe that has no cards left.
///
/// Every round starts from a freshly built shoe, so this only surfaces when a
/// pre-arranged shoe is too short or the engine state is corrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the shoe is empty, a new round must be started")]
pub struct EmptyShoeError;

/// Errors that can occur when restoring a game from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The snapshot was written by an incompatible format version.
    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the snapshot.
        found: u32,
        /// Version this build understands.
        expected: u32,
    },
    /// Deck count outside the supported range.
    #[error("invalid deck count {0}")]
    InvalidDeckCount(u8),
    /// A card occurs more often than the deck count allows.
    #[error("card {0} appears more often than the deck count allows")]
    CardOverflow(Card),
    /// The recorded state does not match the hands.
    #[error("recorded state contradicts the dealt hands")]
    InconsistentState,
}

/// Errors that can occur when saving or loading a game.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading or writing the save file failed.
    #[error("save file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The save file could not be encoded or decoded.
    #[error("save file is malformed: {0}")]
    Format(#[from] serde_json::Error),
    /// The save file decoded but does not describe a valid game.
    #[error("save file is invalid: {0}")]
    Snapshot(#[from] SnapshotError),
}

//! Saving and loading games as JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::PersistenceError;
use crate::game::Game;
use crate::snapshot::GameSnapshot;

/// Save location used when the shell does not pick one.
pub const DEFAULT_SAVE_PATH: &str = "saves/gamestate.json";

/// A save file at an explicit path.
///
/// ```no_run
/// use bjround::{Game, GameOptions, SaveFile};
///
/// let save = SaveFile::new("saves/table.json");
/// let game = Game::new(GameOptions::default(), 7);
/// save.save(&game)?;
/// let restored = save.load(8)?;
/// assert_eq!(restored.snapshot(), game.snapshot());
/// # Ok::<(), bjround::PersistenceError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    /// Creates a save file handle for `path`. Nothing is touched on disk.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns a handle for [`DEFAULT_SAVE_PATH`], relative to the working
    /// directory.
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(DEFAULT_SAVE_PATH)
    }

    /// Returns the path of the save file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns whether a save exists at the path.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Writes the full state of `game`.
    ///
    /// The snapshot is written to a sibling temporary file and renamed into
    /// place, so an existing save is either replaced whole or left as is.
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or any filesystem step fails.
    pub fn save(&self, game: &Game) -> Result<(), PersistenceError> {
        let json = serde_json::to_vec_pretty(&game.snapshot())?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let staging = self.staging_path();
        if let Err(err) = fs::write(&staging, &json).and_then(|()| fs::rename(&staging, &self.path))
        {
            warn!(path = %self.path.display(), error = %err, "save failed");
            let _ = fs::remove_file(&staging);
            return Err(err.into());
        }

        info!(
            path = %self.path.display(),
            rounds = game.history().len(),
            "game saved"
        );
        Ok(())
    }

    /// Reads a saved game, seeding its future shuffles with `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable, is not a valid
    /// snapshot, or describes an inconsistent game.
    pub fn load(&self, seed: u64) -> Result<Game, PersistenceError> {
        let bytes = fs::read(&self.path)?;
        let snapshot: GameSnapshot = serde_json::from_slice(&bytes)?;
        let game = Game::restore(snapshot, seed)?;

        info!(
            path = %self.path.display(),
            rounds = game.history().len(),
            "game loaded"
        );
        Ok(game)
    }

    /// Replaces `game` with the saved one.
    ///
    /// On error `game` is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Same as [`SaveFile::load`].
    pub fn load_into(&self, game: &mut Game, seed: u64) -> Result<(), PersistenceError> {
        *game = self.load(seed)?;
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(ToOwned::to_owned)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for SaveFile {
    fn default() -> Self {
        Self::default_location()
    }
}

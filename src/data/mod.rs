//! Plain state types shared by the logic layer: the per-cell display states,
//! their fixed integer codes and the error type.

use core::fmt;

/// Status code for a covered square, the initial state of every square.
pub const COVERED: i8 = -1;
/// Status code for a square the player has flagged as a mine.
pub const MINE_GUESS: i8 = -2;
/// Status code for a square the player has marked as uncertain.
pub const QUESTION: i8 = -3;
/// Status code for an unguessed mine shown at the end of a lost game.
pub const MINE: i8 = 9;
/// Status code for a wrongly flagged square shown at the end of a lost game.
pub const INCORRECT_GUESS: i8 = 10;
/// Status code for the mine the player actually uncovered.
pub const EXPLODED_MINE: i8 = 11;

/// Display state of a single square as seen by the player.
///
/// `Covered`, `MineGuess` and `Question` are the hidden states a square
/// cycles through before being uncovered. `Revealed` squares carry their
/// adjacent-mine count. `Mine`, `IncorrectGuess` and `ExplodedMine` only
/// appear once a game has been lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellStatus {
    Covered,
    MineGuess,
    Question,
    Revealed { adjacent: u8 },
    Mine,
    IncorrectGuess,
    ExplodedMine,
}

impl CellStatus {
    /// Fixed integer encoding used by renderers: negative values for the
    /// hidden states, `0..=8` for revealed adjacency counts and `9..=11` for
    /// the end-of-game states. See the module-level constants.
    pub fn code(self) -> i8 {
        match self {
            CellStatus::Covered => COVERED,
            CellStatus::MineGuess => MINE_GUESS,
            CellStatus::Question => QUESTION,
            CellStatus::Revealed { adjacent } => adjacent as i8,
            CellStatus::Mine => MINE,
            CellStatus::IncorrectGuess => INCORRECT_GUESS,
            CellStatus::ExplodedMine => EXPLODED_MINE,
        }
    }
}

/// Errors returned by field construction and population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Dimensions or mine count outside the supported range.
    InvalidConfiguration,
    /// An out-of-range location was passed where the contract requires an
    /// in-range one.
    OutOfRange,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidConfiguration => write!(f, "invalid field configuration"),
            FieldError::OutOfRange => write!(f, "location is outside the field"),
        }
    }
}

impl std::error::Error for FieldError {}

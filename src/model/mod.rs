//! Presentation-facing types: the serializable square view and the
//! parameters a frontend configures a game with.

use serde::{Deserialize, Serialize};

use crate::data::CellStatus;

/// Wire view of a single square, serialized with a `state` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum Cell {
    #[serde(rename = "covered")]
    Covered,
    #[serde(rename = "mine_guess")]
    MineGuess,
    #[serde(rename = "question")]
    Question,
    #[serde(rename = "revealed")]
    Revealed { adjacent: u8 },
    #[serde(rename = "mine")]
    Mine,
    #[serde(rename = "incorrect_guess")]
    IncorrectGuess,
    #[serde(rename = "exploded_mine")]
    ExplodedMine,
}

impl From<CellStatus> for Cell {
    fn from(value: CellStatus) -> Self {
        match value {
            CellStatus::Covered => Self::Covered,
            CellStatus::MineGuess => Self::MineGuess,
            CellStatus::Question => Self::Question,
            CellStatus::Revealed { adjacent } => Self::Revealed { adjacent },
            CellStatus::Mine => Self::Mine,
            CellStatus::IncorrectGuess => Self::IncorrectGuess,
            CellStatus::ExplodedMine => Self::ExplodedMine,
        }
    }
}

/// Parameters for a new game. Defaults to the classic 9x9 board with 10
/// mines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GameParams {
    pub rows: usize,
    pub cols: usize,
    pub mines: usize,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            rows: 9,
            cols: 9,
            mines: 10,
        }
    }
}

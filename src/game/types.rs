use serde::{Deserialize, Serialize};

/// A seat at the board. X always makes the first move of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// Who sits at the O seat. In `HumanVsComputer` the session plays O
/// itself and ignores cell activations arriving on O's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    HumanVsHuman,
    HumanVsComputer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Why a move was rejected. The board is left untouched in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    CellOccupied,
    GameOver,
    InvalidIndex,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::CellOccupied => write!(f, "Cell is already marked"),
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::InvalidIndex => write!(f, "Cell index out of bounds"),
        }
    }
}

impl std::error::Error for MoveError {}

//! Turn phases and game status.
//!
//! A turn moves through `Idle -> Selecting -> (Chained)* -> Idle`.
//! The phase carries the selected square, so a selection can never
//! exist without its phase and vice versa.

use super::{Color, Square};
use serde::{Deserialize, Serialize};

/// Where the side on move is within its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing selected.
    #[default]
    Idle,
    /// A piece is selected and may move, be reselected or be cancelled.
    Selecting(Square),
    /// The piece just captured and must capture again.
    Chained(Square),
}

impl Phase {
    /// The selected square, if any.
    pub fn selected(&self) -> Option<Square> {
        match self {
            Phase::Idle => None,
            Phase::Selecting(square) | Phase::Chained(square) => Some(*square),
        }
    }

    /// Returns true while a capture chain is in progress.
    pub fn is_chained(&self) -> bool {
        matches!(self, Phase::Chained(_))
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Won(Color),
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(color) => Some(*color),
        }
    }

    /// Returns true once the game has a winner.
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Won(_))
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(color) => write!(f, "{} wins", color),
        }
    }
}

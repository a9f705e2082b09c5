//! First-class action types for checkers.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::{Color, Piece, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in checkers: the piece on `from` travels to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{from} -> {to}")]
pub struct Move {
    /// Square the piece leaves.
    pub from: Square,
    /// Square the piece lands on.
    pub to: Square,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

/// Shape of a validated move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// One diagonal step onto an empty square.
    Step,
    /// Two diagonal steps over an opposing piece.
    Jump {
        /// Square of the piece being jumped.
        captured: Square,
    },
}

/// What happened on the board when a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Square emptied by a capture.
    pub captured: Option<Square>,
    /// True if the moving man was crowned on arrival.
    pub promoted: bool,
}

/// Full record of an executed move, as reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// The move that was executed.
    pub action: Move,
    /// The piece as it stands on the destination.
    pub piece: Piece,
    /// Board effects of the move.
    pub outcome: MoveOutcome,
    /// True if the piece must keep capturing before the turn passes.
    pub chained: bool,
    /// Set when the move ended the game.
    pub winner: Option<Color>,
}

/// Accepted result of a controller operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// A piece was selected from idle.
    Selected(Square),
    /// The selection was cancelled.
    Deselected,
    /// Another piece of the mover's color became the selection.
    Reselected(Square),
    /// A move was executed.
    Moved(MoveReport),
}

/// Reason a selection or move was rejected.
///
/// A rejected operation never changes game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// Index outside 0-63.
    #[display("Square index {} is off the board", _0)]
    OutOfBounds(usize),

    /// Light square; pieces never stand there.
    #[display("Square {} is not playable", _0)]
    NotPlayable(Square),

    /// No piece on the square.
    #[display("Square {} is empty", _0)]
    EmptySquare(Square),

    /// The piece belongs to the side not on move.
    #[display("The piece on {} is not {}'s", _0, _1)]
    NotYourPiece(Square, Color),

    /// A move was attempted without a selected piece.
    #[display("No piece is selected")]
    NothingSelected,

    /// The move starts from a square other than the selected one.
    #[display("The piece on {} is not the selected piece", _0)]
    NotSelected(Square),

    /// A piece is already selected; use the move operation instead.
    #[display("Square {} is already selected", _0)]
    AlreadySelected(Square),

    /// The piece on the given square must finish its capture chain.
    #[display("The piece on {} must keep capturing", _0)]
    ChainInProgress(Square),

    /// Destination already holds a piece.
    #[display("Square {} is occupied", _0)]
    DestinationOccupied(Square),

    /// A man tried to move toward its own edge.
    #[display("A man cannot move backward to {}", _0)]
    WrongDirection(Square),

    /// A simple step was attempted in the middle of a capture chain.
    #[display("Only jumps are allowed while capturing")]
    StepDuringChain,

    /// Destination is not one or two diagonal steps away.
    #[display("{} is not a diagonal step or jump away", _0)]
    NotDiagonal(Square),

    /// A jump over an empty square.
    #[display("There is nothing to capture on {}", _0)]
    NothingToCapture(Square),

    /// A jump over a piece of the mover's own color.
    #[display("Cannot capture own piece on {}", _0)]
    OwnPieceInTheWay(Square),

    /// The game has ended.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

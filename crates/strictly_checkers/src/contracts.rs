//! Contract-based validation for checkers.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::controller::GameController;
use super::invariants::{CheckersInvariants, InvariantSet};
use super::rules::MoveValidator;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the move starts from the selected piece.
pub struct MovesSelectedPiece;

impl MovesSelectedPiece {
    /// Checks that `action` starts from the selection.
    #[instrument(skip(game))]
    pub fn check(action: &Move, game: &GameController) -> Result<(), MoveError> {
        match game.selected() {
            None => Err(MoveError::NothingSelected),
            Some(selected) if selected == action.from => Ok(()),
            Some(selected) if game.is_chained() => Err(MoveError::ChainInProgress(selected)),
            Some(_) => Err(MoveError::NotSelected(action.from)),
        }
    }
}

/// Precondition: the board rules allow the move.
pub struct LegalMove;

impl LegalMove {
    /// Runs the move validator.
    #[instrument(skip(game))]
    pub fn check(action: &Move, game: &GameController) -> Result<(), MoveError> {
        MoveValidator::validate_move(game.board(), game.turn(), *action).map(|_| ())
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: a move never adds pieces to the board.
pub struct PieceCountMonotonic;

impl PieceCountMonotonic {
    /// Returns true if `after` holds no more pieces than `before`.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameController, after: &GameController) -> bool {
        let before_count = before.board().piece_count();
        let after_count = after.board().piece_count();
        let valid = after_count <= before_count;
        if !valid {
            warn!(before_count, after_count, "Piece count increased");
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - The move starts from the selected (or chained) piece
/// - The board rules allow it
///
/// Postconditions:
/// - Piece count did not increase
/// - All checkers invariants hold
pub struct MoveContract;

impl Contract<GameController, Move> for MoveContract {
    fn pre(game: &GameController, action: &Move) -> Result<(), MoveError> {
        MovesSelectedPiece::check(action, game)?;
        LegalMove::check(action, game)
    }

    fn post(before: &GameController, after: &GameController) -> Result<(), MoveError> {
        if !PieceCountMonotonic::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: piece count increased".to_string(),
            ));
        }

        CheckersInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

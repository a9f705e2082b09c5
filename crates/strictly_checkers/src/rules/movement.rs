//! Move legality.

use super::super::action::{Move, MoveError, MoveKind};
use super::super::turn::TurnManager;
use super::super::{Board, Cell, Square};
use tracing::instrument;

/// Decides whether a proposed move is legal. Never mutates anything.
pub struct MoveValidator;

impl MoveValidator {
    /// Validates `action` for the side on move and classifies it.
    ///
    /// Checks run in a fixed order and the first failure is reported:
    /// ownership, destination, direction, geometry, then the jumped square.
    /// While the turn is chained, men may jump backward but may not step.
    #[instrument(skip(board, turn), fields(active = %turn.active_color(), chained = turn.is_chained()))]
    pub fn validate_move(
        board: &Board,
        turn: &TurnManager,
        action: Move,
    ) -> Result<MoveKind, MoveError> {
        let Move { from, to } = action;
        let chained = turn.is_chained();

        let piece = board.get(from).piece().ok_or(MoveError::EmptySquare(from))?;
        if piece.color != turn.active_color() {
            return Err(MoveError::NotYourPiece(from, turn.active_color()));
        }
        if let Some(locked) = turn.selected().filter(|_| chained)
            && locked != from
        {
            return Err(MoveError::ChainInProgress(locked));
        }

        if !to.is_playable() {
            return Err(MoveError::NotPlayable(to));
        }
        if !board.is_empty(to) {
            return Err(MoveError::DestinationOccupied(to));
        }

        let (dr, dc) = from.delta(to);
        if !piece.is_king() && !chained && dr.signum() != piece.color.forward() {
            return Err(MoveError::WrongDirection(to));
        }

        match (dr.abs(), dc.abs()) {
            (1, 1) if chained => Err(MoveError::StepDuringChain),
            (1, 1) => Ok(MoveKind::Step),
            (2, 2) => {
                let captured = from.midpoint(to).ok_or(MoveError::NotDiagonal(to))?;
                match board.get(captured) {
                    Cell::Empty => Err(MoveError::NothingToCapture(captured)),
                    Cell::Occupied(jumped) if jumped.color == piece.color => {
                        Err(MoveError::OwnPieceInTheWay(captured))
                    }
                    Cell::Occupied(_) => Ok(MoveKind::Jump { captured }),
                }
            }
            _ => Err(MoveError::NotDiagonal(to)),
        }
    }

    /// Boolean face of [`MoveValidator::validate_move`].
    pub fn is_legal_move(board: &Board, turn: &TurnManager, from: Square, to: Square) -> bool {
        Self::validate_move(board, turn, Move::new(from, to)).is_ok()
    }

    /// All squares the piece on `from` could legally move to right now.
    #[instrument(skip(board, turn))]
    pub fn legal_destinations(board: &Board, turn: &TurnManager, from: Square) -> Vec<Square> {
        Square::playable()
            .filter(|&to| Self::is_legal_move(board, turn, from, to))
            .collect()
    }
}

//! The game controller: the only surface a UI talks to.
//!
//! Every operation validates completely before touching state. Moves run on
//! a copy of the game that is committed only once its postconditions hold,
//! so a rejected operation leaves the controller exactly as it was.

use super::action::{Move, MoveError, MoveReport, Transition};
use super::contracts::{Contract, MoveContract};
use super::phases::{GameStatus, Phase};
use super::rules::{self, CaptureResolver, MoveValidator};
use super::turn::TurnManager;
use super::{Board, Cell, Color, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Orchestrates selection, validation, execution, chaining and termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameController {
    pub(crate) board: Board,
    pub(crate) turn: TurnManager,
    status: GameStatus,
}

impl GameController {
    /// Creates a game in the starting layout with White on move.
    #[instrument]
    pub fn new() -> Self {
        Self::from_position(Board::new(), Color::White)
    }

    /// Creates a game from an arbitrary position with `active` on move.
    #[instrument(skip(board))]
    pub fn from_position(board: Board, active: Color) -> Self {
        Self {
            board,
            turn: TurnManager::starting_with(active),
            status: rules::status(&board, active),
        }
    }

    /// Selects the piece on `index` when nothing is selected.
    ///
    /// # Errors
    ///
    /// Fails if the game is over, a piece is already selected, or the square
    /// is off the board, light, empty or holds an opposing piece.
    #[instrument(skip(self), fields(active = %self.turn.active_color()))]
    pub fn select(&mut self, index: usize) -> Result<Transition, MoveError> {
        self.ensure_in_progress()?;
        let square = Self::square(index)?;
        if !square.is_playable() {
            return Err(MoveError::NotPlayable(square));
        }
        self.ensure_own_piece(square)?;

        self.turn.select(square)?;
        debug!(%square, "Piece selected");
        Ok(Transition::Selected(square))
    }

    /// Acts on `index` given the current selection.
    ///
    /// - the selected square or a light square cancels the selection;
    /// - another piece of the mover's color becomes the selection;
    /// - anything else is treated as a destination and validated as a move.
    ///
    /// The first two are refused while a capture chain is in progress.
    ///
    /// # Errors
    ///
    /// Fails if the game is over, nothing is selected, the index is off the
    /// board, or the move is illegal. State is unchanged on failure.
    #[instrument(skip(self), fields(active = %self.turn.active_color(), phase = ?self.turn.phase()))]
    pub fn attempt_move(&mut self, index: usize) -> Result<Transition, MoveError> {
        self.ensure_in_progress()?;
        let selected = self.turn.selected().ok_or(MoveError::NothingSelected)?;
        let square = Self::square(index)?;

        if square == selected || !square.is_playable() {
            self.turn.deselect()?;
            debug!(%selected, "Selection cancelled");
            return Ok(Transition::Deselected);
        }

        if self.board.get(square).holds(self.turn.active_color()) {
            self.turn.reselect(square)?;
            debug!(%square, "Piece reselected");
            return Ok(Transition::Reselected(square));
        }

        self.execute(Move::new(selected, square))
    }

    /// Single entry point for a click: selects when idle, otherwise attempts a move.
    #[instrument(skip(self))]
    pub fn click(&mut self, index: usize) -> Result<Transition, MoveError> {
        match self.turn.phase() {
            Phase::Idle => self.select(index),
            Phase::Selecting(_) | Phase::Chained(_) => self.attempt_move(index),
        }
    }

    /// Returns the winner if the game is over in the current position.
    #[instrument(skip(self))]
    pub fn is_game_over(&self) -> Option<Color> {
        rules::check_winner(&self.board, self.turn.active_color())
    }

    /// Status as of the last completed turn.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Resets the board to the starting layout with White to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board.reset();
        self.turn.reset();
        self.status = GameStatus::InProgress;
        info!("Game restarted");
    }

    /// Gets the cell at `index`, or `None` if off the board.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        Square::new(index).map(|square| self.board.get(square))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the turn state.
    pub fn turn(&self) -> &TurnManager {
        &self.turn
    }

    /// Side on move.
    pub fn active_color(&self) -> Color {
        self.turn.active_color()
    }

    /// Selected square, if any.
    pub fn selected(&self) -> Option<Square> {
        self.turn.selected()
    }

    /// Returns true while the selected piece must keep capturing.
    pub fn is_chained(&self) -> bool {
        self.turn.is_chained()
    }

    /// Squares the selected piece may legally move to.
    #[instrument(skip(self))]
    pub fn legal_destinations(&self) -> Vec<Square> {
        self.selected()
            .map(|from| MoveValidator::legal_destinations(&self.board, &self.turn, from))
            .unwrap_or_default()
    }

    /// Validates and executes a move for the selected piece.
    #[instrument(skip(self))]
    fn execute(&mut self, action: Move) -> Result<Transition, MoveError> {
        MoveContract::pre(self, &action)?;

        let mut next = *self;
        let outcome = CaptureResolver::apply_move(&mut next.board, action.from, action.to);
        let chained = outcome.captured.is_some()
            && CaptureResolver::has_further_capture(&next.board, action.to);

        if chained {
            next.turn.enter_chain(action.to)?;
        } else {
            next.turn.complete_turn()?;
            next.status = rules::status(&next.board, next.turn.active_color());
        }

        // Postcondition: verify contract in debug builds
        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        let piece = next
            .board
            .get(action.to)
            .piece()
            .ok_or(MoveError::EmptySquare(action.to))?;
        *self = next;

        let winner = self.status.winner();
        if let Some(winner) = winner {
            info!(%winner, "Game over");
        }
        debug!(?outcome, chained, "Move executed");

        Ok(Transition::Moved(MoveReport {
            action,
            piece,
            outcome,
            chained,
            winner,
        }))
    }

    fn ensure_in_progress(&self) -> Result<(), MoveError> {
        if self.status.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }

    fn ensure_own_piece(&self, square: Square) -> Result<(), MoveError> {
        let piece = self.board.get(square).piece().ok_or(MoveError::EmptySquare(square))?;
        if piece.color != self.turn.active_color() {
            return Err(MoveError::NotYourPiece(square, self.turn.active_color()));
        }
        Ok(())
    }

    fn square(index: usize) -> Result<Square, MoveError> {
        Square::new(index).ok_or(MoveError::OutOfBounds(index))
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

//! Turn order and selection state machine.

use super::action::MoveError;
use super::phases::Phase;
use super::{Color, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tracks whose turn it is and how far into that turn they are.
///
/// Knows nothing about the board: callers decide whether a square may be
/// selected, the manager only enforces which phase transitions exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnManager {
    active: Color,
    phase: Phase,
}

impl TurnManager {
    /// White to move, nothing selected.
    #[instrument]
    pub fn new() -> Self {
        Self::starting_with(Color::White)
    }

    /// Idle turn for the given side.
    pub fn starting_with(active: Color) -> Self {
        Self {
            active,
            phase: Phase::Idle,
        }
    }

    /// Side on move.
    pub fn active_color(&self) -> Color {
        self.active
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Selected square, if any.
    pub fn selected(&self) -> Option<Square> {
        self.phase.selected()
    }

    /// Returns true while the turn is locked into a capture chain.
    pub fn is_chained(&self) -> bool {
        self.phase.is_chained()
    }

    /// Idle -> Selecting.
    #[instrument(skip(self), fields(active = %self.active))]
    pub fn select(&mut self, square: Square) -> Result<(), MoveError> {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Selecting(square);
                Ok(())
            }
            Phase::Selecting(current) => Err(MoveError::AlreadySelected(current)),
            Phase::Chained(current) => Err(MoveError::ChainInProgress(current)),
        }
    }

    /// Selecting -> Selecting with a different square.
    #[instrument(skip(self), fields(active = %self.active))]
    pub fn reselect(&mut self, square: Square) -> Result<(), MoveError> {
        match self.phase {
            Phase::Selecting(_) => {
                self.phase = Phase::Selecting(square);
                Ok(())
            }
            Phase::Idle => Err(MoveError::NothingSelected),
            Phase::Chained(current) => Err(MoveError::ChainInProgress(current)),
        }
    }

    /// Selecting -> Idle. A chain cannot be abandoned.
    #[instrument(skip(self), fields(active = %self.active))]
    pub fn deselect(&mut self) -> Result<(), MoveError> {
        match self.phase {
            Phase::Selecting(_) => {
                self.phase = Phase::Idle;
                Ok(())
            }
            Phase::Idle => Err(MoveError::NothingSelected),
            Phase::Chained(current) => Err(MoveError::ChainInProgress(current)),
        }
    }

    /// Selecting or Chained -> Chained on the landing square.
    #[instrument(skip(self), fields(active = %self.active))]
    pub fn enter_chain(&mut self, square: Square) -> Result<(), MoveError> {
        match self.phase {
            Phase::Selecting(_) | Phase::Chained(_) => {
                self.phase = Phase::Chained(square);
                Ok(())
            }
            Phase::Idle => Err(MoveError::NothingSelected),
        }
    }

    /// Selecting or Chained -> Idle, handing the move to the opponent.
    #[instrument(skip(self), fields(active = %self.active))]
    pub fn complete_turn(&mut self) -> Result<(), MoveError> {
        if self.phase == Phase::Idle {
            return Err(MoveError::NothingSelected);
        }
        self.phase = Phase::Idle;
        self.active = self.active.opponent();
        debug!(next = %self.active, "Turn passed");
        Ok(())
    }

    /// White to move, nothing selected.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for TurnManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(index: usize) -> Square {
        Square::new(index).unwrap()
    }

    #[test]
    fn test_starts_idle_with_white() {
        let turn = TurnManager::new();
        assert_eq!(turn.active_color(), Color::White);
        assert_eq!(turn.phase(), Phase::Idle);
        assert_eq!(turn.selected(), None);
    }

    #[test]
    fn test_select_then_complete_flips_turn() {
        let mut turn = TurnManager::new();
        turn.select(sq(40)).unwrap();
        assert_eq!(turn.selected(), Some(sq(40)));

        turn.complete_turn().unwrap();
        assert_eq!(turn.active_color(), Color::Black);
        assert_eq!(turn.phase(), Phase::Idle);
    }

    #[test]
    fn test_chain_blocks_cancel_and_reselect() {
        let mut turn = TurnManager::new();
        turn.select(sq(42)).unwrap();
        turn.enter_chain(sq(24)).unwrap();

        assert_eq!(turn.deselect(), Err(MoveError::ChainInProgress(sq(24))));
        assert_eq!(turn.reselect(sq(40)), Err(MoveError::ChainInProgress(sq(24))));
        assert_eq!(turn.select(sq(40)), Err(MoveError::ChainInProgress(sq(24))));
        assert_eq!(turn.active_color(), Color::White);
        assert!(turn.is_chained());

        turn.complete_turn().unwrap();
        assert_eq!(turn.active_color(), Color::Black);
        assert!(!turn.is_chained());
    }

    #[test]
    fn test_idle_rejects_transitions() {
        let mut turn = TurnManager::new();
        assert_eq!(turn.deselect(), Err(MoveError::NothingSelected));
        assert_eq!(turn.complete_turn(), Err(MoveError::NothingSelected));
        assert_eq!(turn.enter_chain(sq(24)), Err(MoveError::NothingSelected));
        assert_eq!(turn, TurnManager::new());
    }

    #[test]
    fn test_deselect_returns_to_idle() {
        let mut turn = TurnManager::new();
        turn.select(sq(40)).unwrap();
        turn.reselect(sq(42)).unwrap();
        assert_eq!(turn.selected(), Some(sq(42)));
        turn.deselect().unwrap();
        assert_eq!(turn, TurnManager::new());
    }
}

//! First-class invariants for checkers.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and serve as documentation of system guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for 2- and 3-tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect_violations(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect_violations(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect_violations(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

pub mod piece_limit;
pub mod playable_squares;
pub mod selection_turn;

pub use piece_limit::PieceLimitInvariant;
pub use playable_squares::PlayableSquaresInvariant;
pub use selection_turn::SelectionMatchesTurnInvariant;

/// All checkers invariants as a composable set.
pub type CheckersInvariants = (
    PlayableSquaresInvariant,
    PieceLimitInvariant,
    SelectionMatchesTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell, Color, GameController, Piece, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameController::new();
        assert!(CheckersInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = GameController::new();
        for index in [42, 35, 21, 28] {
            game.click(index).unwrap();
        }
        assert_eq!(game.active_color(), Color::White);
        assert!(CheckersInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut board = Board::new();
        board.set(Square::new(0).unwrap(), Cell::Occupied(Piece::man(Color::Black)));
        let game = GameController::from_position(board, Color::White);

        let violations = CheckersInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = GameController::new();

        type TwoInvariants = (PlayableSquaresInvariant, PieceLimitInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}

//! Selection invariant: the selected piece belongs to the side on move.

use super::super::GameController;
use super::Invariant;

/// Invariant: a selected or chained square holds a piece of the active color.
pub struct SelectionMatchesTurnInvariant;

impl Invariant<GameController> for SelectionMatchesTurnInvariant {
    fn holds(game: &GameController) -> bool {
        game.selected()
            .is_none_or(|square| game.board().get(square).holds(game.active_color()))
    }

    fn description() -> &'static str {
        "Selected piece belongs to the side on move"
    }
}

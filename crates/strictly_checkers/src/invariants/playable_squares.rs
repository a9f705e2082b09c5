//! Playable squares invariant: light squares are always empty.

use super::super::GameController;
use super::Invariant;

/// Invariant: pieces only ever stand on the 32 dark squares.
pub struct PlayableSquaresInvariant;

impl Invariant<GameController> for PlayableSquaresInvariant {
    fn holds(game: &GameController) -> bool {
        game.board()
            .cells()
            .all(|(square, cell)| square.is_playable() || cell.is_empty())
    }

    fn description() -> &'static str {
        "Pieces stand only on playable squares"
    }
}

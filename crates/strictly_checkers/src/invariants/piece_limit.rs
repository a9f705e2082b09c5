//! Piece limit invariant: no side ever has more than it started with.

use super::super::{Color, GameController, PIECES_PER_SIDE};
use super::Invariant;

/// Invariant: each color has at most twelve pieces.
pub struct PieceLimitInvariant;

impl Invariant<GameController> for PieceLimitInvariant {
    fn holds(game: &GameController) -> bool {
        [Color::White, Color::Black]
            .into_iter()
            .all(|color| game.board().count(color) <= PIECES_PER_SIDE)
    }

    fn description() -> &'static str {
        "Each side has at most twelve pieces"
    }
}

//! Game-over detection.

use super::super::phases::GameStatus;
use super::super::{Board, Color};
use super::capture::CaptureResolver;
use tracing::instrument;

/// Returns the winner if the game is over with `to_move` on move.
///
/// A side with no pieces loses. Otherwise the side on move loses when it
/// has neither a step nor a jump available.
#[instrument(skip(board))]
pub fn check_winner(board: &Board, to_move: Color) -> Option<Color> {
    for color in [Color::White, Color::Black] {
        if board.count(color) == 0 {
            return Some(color.opponent());
        }
    }

    if CaptureResolver::has_any_legal_move(board, to_move) {
        None
    } else {
        Some(to_move.opponent())
    }
}

/// Game status with `to_move` on move.
pub fn status(board: &Board, to_move: Color) -> GameStatus {
    check_winner(board, to_move).map_or(GameStatus::InProgress, GameStatus::Won)
}

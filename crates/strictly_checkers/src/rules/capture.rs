//! Capture execution and capture availability.

use super::super::action::MoveOutcome;
use super::super::{Board, Cell, Color, Diagonal, Square};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// Applies validated moves to the board and answers "can this piece capture?".
pub struct CaptureResolver;

impl CaptureResolver {
    /// Moves the piece on `from` to `to`, removing the jumped piece and
    /// crowning a man that lands on its promotion row.
    ///
    /// The move must already be validated. An empty `from` leaves the board untouched.
    #[instrument(skip(board))]
    pub fn apply_move(board: &mut Board, from: Square, to: Square) -> MoveOutcome {
        let Some(piece) = board.get(from).piece() else {
            warn!("Apply called on an empty square");
            return MoveOutcome::default();
        };

        let (dr, dc) = from.delta(to);
        let captured = if dr.abs() == 2 && dc.abs() == 2 {
            from.midpoint(to)
        } else {
            None
        };
        if let Some(square) = captured {
            board.clear(square);
        }

        let promoted = !piece.is_king() && to.row() == piece.color.promotion_row();
        let placed = if promoted { piece.crowned() } else { piece };
        board.clear(from);
        board.set(to, Cell::Occupied(placed));

        debug!(?captured, promoted, "Move applied");
        MoveOutcome { captured, promoted }
    }

    /// Landing squares of every jump available to the piece on `square`.
    ///
    /// Direction is unrestricted: men may jump backward here, as they may
    /// during a chain.
    pub fn jump_targets(board: &Board, square: Square) -> impl Iterator<Item = Square> + '_ {
        let color = board.get(square).piece().map(|piece| piece.color);
        Diagonal::iter().filter_map(move |direction| {
            let color = color?;
            let over = square.offset(direction, 1)?;
            let landing = square.offset(direction, 2)?;
            (board.get(over).holds(color.opponent()) && board.is_empty(landing)).then_some(landing)
        })
    }

    /// Returns true if the piece on `square` can capture again.
    #[instrument(skip(board))]
    pub fn has_further_capture(board: &Board, square: Square) -> bool {
        Self::jump_targets(board, square).next().is_some()
    }

    /// Returns true if `color` has at least one step or jump available.
    ///
    /// Steps respect the forward-only rule for men; jumps do not. A man whose
    /// only capture lies behind it therefore counts as mobile, even though
    /// [`MoveValidator`](super::MoveValidator) refuses that jump outside a
    /// chain. A side left with nothing but such jumps is not declared lost:
    /// the game stays in progress with no move it can make.
    #[instrument(skip(board))]
    pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
        board.pieces(color).any(|(square, piece)| {
            let can_step = Diagonal::iter()
                .filter(|direction| piece.is_king() || direction.row_delta() == color.forward())
                .filter_map(|direction| square.offset(direction, 1))
                .any(|target| board.is_empty(target));
            can_step || Self::has_further_capture(board, square)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Piece;

    fn sq(index: usize) -> Square {
        Square::new(index).unwrap()
    }

    #[test]
    fn test_step_relocates_piece() {
        let mut board = Board::new();
        let outcome = CaptureResolver::apply_move(&mut board, sq(40), sq(33));
        assert_eq!(outcome, MoveOutcome::default());
        assert!(board.is_empty(sq(40)));
        assert_eq!(board.get(sq(33)).piece(), Some(Piece::man(Color::White)));
        assert_eq!(board.piece_count(), 24);
    }

    #[test]
    fn test_jump_clears_midpoint() {
        let mut board = Board::empty()
            .with_piece(sq(42), Piece::man(Color::White))
            .with_piece(sq(33), Piece::man(Color::Black));
        let outcome = CaptureResolver::apply_move(&mut board, sq(42), sq(24));
        assert_eq!(outcome.captured, Some(sq(33)));
        assert!(!outcome.promoted);
        assert!(board.is_empty(sq(33)));
        assert!(board.is_empty(sq(42)));
        assert_eq!(board.get(sq(24)).piece(), Some(Piece::man(Color::White)));
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn test_promotion_on_far_row() {
        let mut board = Board::empty()
            .with_piece(sq(10), Piece::man(Color::White))
            .with_piece(sq(53), Piece::man(Color::Black));
        let white = CaptureResolver::apply_move(&mut board, sq(10), sq(1));
        assert!(white.promoted);
        assert_eq!(board.get(sq(1)).piece(), Some(Piece::king(Color::White)));

        let black = CaptureResolver::apply_move(&mut board, sq(53), sq(62));
        assert!(black.promoted);
        assert_eq!(board.get(sq(62)).piece(), Some(Piece::king(Color::Black)));
    }

    #[test]
    fn test_king_is_not_promoted_again() {
        let mut board = Board::empty().with_piece(sq(10), Piece::king(Color::White));
        let outcome = CaptureResolver::apply_move(&mut board, sq(10), sq(1));
        assert!(!outcome.promoted);
        assert_eq!(board.get(sq(1)).piece(), Some(Piece::king(Color::White)));
    }

    #[test]
    fn test_further_capture_any_direction() {
        // White man on 24 with a black man behind it on 33 and 42 free.
        let board = Board::empty()
            .with_piece(sq(24), Piece::man(Color::White))
            .with_piece(sq(33), Piece::man(Color::Black));
        assert!(CaptureResolver::has_further_capture(&board, sq(24)));
        assert_eq!(CaptureResolver::jump_targets(&board, sq(24)).collect::<Vec<_>>(), vec![sq(42)]);

        let blocked = board.with_piece(sq(42), Piece::man(Color::White));
        assert!(!CaptureResolver::has_further_capture(&blocked, sq(24)));
    }

    #[test]
    fn test_no_capture_over_own_piece_or_edge() {
        let board = Board::empty()
            .with_piece(sq(24), Piece::man(Color::White))
            .with_piece(sq(17), Piece::man(Color::White));
        assert!(!CaptureResolver::has_further_capture(&board, sq(24)));
        assert!(!CaptureResolver::has_further_capture(&board, sq(0)));
    }

    #[test]
    fn test_any_legal_move_from_start() {
        let board = Board::new();
        assert!(CaptureResolver::has_any_legal_move(&board, Color::White));
        assert!(CaptureResolver::has_any_legal_move(&board, Color::Black));
    }

    #[test]
    fn test_blocked_man_has_no_move() {
        // White man on 8: the only forward step is occupied and the jump leaves the board.
        let board = Board::empty()
            .with_piece(sq(8), Piece::man(Color::White))
            .with_piece(sq(1), Piece::man(Color::Black));
        assert!(!CaptureResolver::has_any_legal_move(&board, Color::White));
        // Black steps forward from 1 to 10.
        assert!(CaptureResolver::has_any_legal_move(&board, Color::Black));
    }

    #[test]
    fn test_men_cannot_count_backward_steps() {
        // A white man on row 0 has no forward squares left.
        let board = Board::empty().with_piece(sq(1), Piece::man(Color::White));
        assert!(!CaptureResolver::has_any_legal_move(&board, Color::White));

        let king = Board::empty().with_piece(sq(1), Piece::king(Color::White));
        assert!(CaptureResolver::has_any_legal_move(&king, Color::White));
    }
}

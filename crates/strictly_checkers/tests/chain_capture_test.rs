//! Tests for captures and forced capture chains.

use strictly_checkers::{
    Board, Cell, Color, GameController, MoveError, Piece, Square, Transition,
};

fn sq(index: usize) -> Square {
    Square::new(index).unwrap()
}

/// White man on 42 can jump 33 and then 17. A second white man on 46 and a
/// black man on 5 keep the game going afterwards.
fn double_jump_position() -> GameController {
    let board = Board::empty()
        .with_piece(sq(42), Piece::man(Color::White))
        .with_piece(sq(46), Piece::man(Color::White))
        .with_piece(sq(33), Piece::man(Color::Black))
        .with_piece(sq(17), Piece::man(Color::Black))
        .with_piece(sq(5), Piece::man(Color::Black));
    GameController::from_position(board, Color::White)
}

#[test]
fn test_single_capture_passes_turn() {
    let board = Board::empty()
        .with_piece(sq(42), Piece::man(Color::White))
        .with_piece(sq(33), Piece::man(Color::Black))
        .with_piece(sq(5), Piece::man(Color::Black));
    let mut game = GameController::from_position(board, Color::White);
    let before = game.board().piece_count();

    game.select(42).unwrap();
    let Ok(Transition::Moved(report)) = game.attempt_move(24) else {
        panic!("expected a capture");
    };

    assert_eq!(report.outcome.captured, Some(sq(33)));
    assert!(!report.chained);
    assert_eq!(game.cell(33), Some(Cell::Empty));
    assert_eq!(game.cell(24), Some(Cell::Occupied(Piece::man(Color::White))));
    assert_eq!(game.board().piece_count(), before - 1);
    assert_eq!(game.active_color(), Color::Black);
}

#[test]
fn test_capture_with_follow_up_enters_chain() {
    let mut game = double_jump_position();
    game.select(42).unwrap();

    let Ok(Transition::Moved(report)) = game.attempt_move(24) else {
        panic!("expected a capture");
    };
    assert!(report.chained);
    assert!(game.is_chained());
    assert_eq!(game.selected(), Some(sq(24)));
    assert_eq!(game.active_color(), Color::White);
    assert_eq!(game.legal_destinations(), vec![sq(10)]);
}

#[test]
fn test_chain_rejects_everything_but_the_jump() {
    let mut game = double_jump_position();
    game.select(42).unwrap();
    game.attempt_move(24).unwrap();
    let chained = game;

    assert_eq!(game.attempt_move(24), Err(MoveError::ChainInProgress(sq(24))));
    assert_eq!(game.attempt_move(0), Err(MoveError::ChainInProgress(sq(24))));
    assert_eq!(game.attempt_move(46), Err(MoveError::ChainInProgress(sq(24))));
    assert_eq!(game.attempt_move(33), Err(MoveError::StepDuringChain));
    assert_eq!(game.select(46), Err(MoveError::ChainInProgress(sq(24))));
    assert_eq!(game, chained);

    let Ok(Transition::Moved(report)) = game.attempt_move(10) else {
        panic!("expected the second jump");
    };
    assert_eq!(report.outcome.captured, Some(sq(17)));
    assert!(!report.chained);
    assert!(!game.is_chained());
    assert_eq!(game.active_color(), Color::Black);
    assert_eq!(game.board().count(Color::Black), 1);
}

#[test]
fn test_chain_exemption_applies_to_backward_jumps() {
    // White man jumps forward 49x35 over 42, then must jump backward 35x53 over 44.
    let board = Board::empty()
        .with_piece(sq(49), Piece::man(Color::White))
        .with_piece(sq(42), Piece::man(Color::Black))
        .with_piece(sq(44), Piece::man(Color::Black))
        .with_piece(sq(1), Piece::man(Color::Black));
    let mut game = GameController::from_position(board, Color::White);

    game.select(49).unwrap();
    let Ok(Transition::Moved(first)) = game.attempt_move(35) else {
        panic!("expected a capture");
    };
    assert!(first.chained);

    let Ok(Transition::Moved(second)) = game.attempt_move(53) else {
        panic!("expected a backward capture");
    };
    assert_eq!(second.outcome.captured, Some(sq(44)));
    assert!(!second.chained);
    assert_eq!(game.cell(53), Some(Cell::Occupied(Piece::man(Color::White))));
    assert_eq!(game.active_color(), Color::Black);
}

//! Tests for the game controller's public surface.

use strictly_checkers::{
    Board, Cell, Color, GameController, GameStatus, MoveError, Piece, Square, Transition,
};

fn sq(index: usize) -> Square {
    Square::new(index).unwrap()
}

fn white_man() -> Cell {
    Cell::Occupied(Piece::man(Color::White))
}

#[test]
fn test_fresh_board_simple_move() {
    let mut game = GameController::new();
    assert_eq!(game.active_color(), Color::White);

    game.select(40).expect("white man on 40");
    let Transition::Moved(report) = game.attempt_move(33).expect("forward step") else {
        panic!("expected a move");
    };

    assert_eq!(report.outcome.captured, None);
    assert!(!report.chained);
    assert_eq!(game.cell(40), Some(Cell::Empty));
    assert_eq!(game.cell(33), Some(white_man()));
    assert_eq!(game.active_color(), Color::Black);
    assert_eq!(game.selected(), None);
}

#[test]
fn test_step_into_empty_diagonal_neighbour() {
    let board = Board::empty()
        .with_piece(sq(17), Piece::man(Color::White))
        .with_piece(sq(46), Piece::man(Color::Black));
    let mut game = GameController::from_position(board, Color::White);

    game.select(17).unwrap();
    assert!(matches!(game.attempt_move(8), Ok(Transition::Moved(_))));
    assert_eq!(game.cell(17), Some(Cell::Empty));
    assert_eq!(game.cell(8), Some(white_man()));
}

#[test]
fn test_black_cannot_move_first() {
    let mut game = GameController::new();
    assert_eq!(
        game.select(21),
        Err(MoveError::NotYourPiece(sq(21), Color::White))
    );
    assert_eq!(game.selected(), None);
}

#[test]
fn test_turns_alternate() {
    let mut game = GameController::new();
    for (index, expected) in [
        (42, Color::White),
        (35, Color::Black),
        (21, Color::Black),
        (28, Color::White),
        (46, Color::White),
        (37, Color::Black),
    ] {
        game.click(index).unwrap();
        assert_eq!(game.active_color(), expected, "after clicking {index}");
    }
}

#[test]
fn test_rejected_operations_change_nothing() {
    let mut game = GameController::new();
    game.select(42).unwrap();
    let before = game;

    for index in [100, 24, 26, 28, 17] {
        assert!(game.attempt_move(index).is_err(), "index {index} should be rejected");
        assert_eq!(game, before);
    }
}

#[test]
fn test_promotion_allows_backward_moves() {
    let board = Board::empty()
        .with_piece(sq(10), Piece::man(Color::White))
        .with_piece(sq(46), Piece::man(Color::Black));
    let mut game = GameController::from_position(board, Color::White);

    game.select(10).unwrap();
    let Ok(Transition::Moved(report)) = game.attempt_move(1) else {
        panic!("expected promotion move");
    };
    assert!(report.outcome.promoted);
    assert_eq!(report.piece, Piece::king(Color::White));

    game.select(46).unwrap();
    game.attempt_move(53).unwrap();

    game.select(1).unwrap();
    assert_eq!(game.legal_destinations(), vec![sq(8), sq(10)]);
    assert!(matches!(game.attempt_move(10), Ok(Transition::Moved(_))));
    assert_eq!(game.cell(10), Some(Cell::Occupied(Piece::king(Color::White))));
}

#[test]
fn test_restart_restores_initial_state() {
    let mut game = GameController::new();
    game.click(42).unwrap();
    game.click(35).unwrap();
    game.click(21).unwrap();

    game.restart();
    assert_eq!(game, GameController::new());
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_controller_state_serializes() {
    let mut game = GameController::new();
    game.select(40).unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let restored: GameController = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
    assert_eq!(restored.selected(), Some(sq(40)));
}

//! Strictly Checkers - a type-safe English draughts rules engine
//!
//! The engine owns board state, decides which moves are legal, resolves
//! captures (including forced multi-jump chains), crowns kings, enforces
//! turn order and declares the winner. It has no rendering surface: a UI
//! maps clicks to square indices (0-63) and calls [`GameController`].
//!
//! # Architecture
//!
//! - **Board**: 8x8 cell storage with no rules knowledge
//! - **MoveValidator**: legality of a single move
//! - **CaptureResolver**: executes moves, detects further captures
//! - **TurnManager**: `Idle -> Selecting -> Chained` state machine
//! - **GameController**: orchestration, the only UI-facing surface
//!
//! # Example
//!
//! ```
//! use strictly_checkers::{Color, GameController, Transition};
//!
//! let mut game = GameController::new();
//! assert_eq!(game.active_color(), Color::White);
//!
//! game.select(40).expect("white man on 40");
//! let moved = game.attempt_move(33).expect("forward step");
//! assert!(matches!(moved, Transition::Moved(_)));
//! assert_eq!(game.active_color(), Color::Black);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod controller;
mod invariants;
mod phases;
mod rules;
mod turn;
mod types;

// Crate-level exports - Domain types
pub use types::{BOARD_SIZE, Board, Cell, Color, Diagonal, PIECES_PER_SIDE, Piece, Rank, Square};

// Crate-level exports - Actions and outcomes
pub use action::{Move, MoveError, MoveKind, MoveOutcome, MoveReport, Transition};
pub use phases::{GameStatus, Phase};

// Crate-level exports - Rule components
pub use controller::GameController;
pub use rules::{CaptureResolver, MoveValidator, check_winner};
pub use turn::TurnManager;

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, LegalMove, MoveContract, MovesSelectedPiece, PieceCountMonotonic};
pub use invariants::{
    CheckersInvariants, Invariant, InvariantSet, InvariantViolation, PieceLimitInvariant,
    PlayableSquaresInvariant, SelectionMatchesTurnInvariant,
};

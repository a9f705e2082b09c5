//! Game rules for checkers.
//!
//! This module contains the rule components as pure functions over board
//! state. They are separated from board storage and turn tracking to
//! enable composition into the contract system.

pub mod capture;
pub mod movement;
pub mod termination;

pub use capture::CaptureResolver;
pub use movement::MoveValidator;
pub use termination::{check_winner, status};

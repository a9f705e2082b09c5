//! Terminal harness for the strictly_checkers rules engine.
//!
//! Maps typed commands to square indices, forwards them to a
//! [`strictly_checkers::GameController`] and prints the outcome.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, SessionConfig};
pub use session::{CommandError, Flow, Session, SessionCommand, render_board};

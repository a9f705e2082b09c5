//! Command-line interface for strictly_checkers.

use clap::{Parser, Subcommand};

/// Strictly Checkers - English draughts rules engine in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_checkers")]
#[command(about = "Play or script checkers against the strictly_checkers engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML session config (defaults are used if absent)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Log filter, overriding RUST_LOG and the config file (e.g. "debug")
    #[arg(long, global = true)]
    pub log: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one command per line on stdin
    Play,

    /// Run commands from a file and print the final position
    Script {
        /// File with one command per line ('#' starts a comment)
        file: std::path::PathBuf,
    },
}

//! Strictly Checkers - terminal harness
//!
//! Play English draughts interactively or replay a script of moves.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Cursor};
use std::path::Path;
use strictly_checkers_cli::{Cli, Command, Session, SessionConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = SessionConfig::load(cli.config.as_deref())?;
    init_tracing(cli.log.as_deref(), &config);

    match cli.command {
        Command::Play => run_play(config),
        Command::Script { file } => run_script(config, &file),
    }
}

/// Installs the fmt subscriber, writing to stderr.
///
/// Filter precedence: `--log`, then `RUST_LOG`, then the config file.
fn init_tracing(flag: Option<&str>, config: &SessionConfig) {
    let filter = match flag {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run an interactive session on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: SessionConfig) -> Result<()> {
    info!("Starting interactive session");
    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout, true)
}

/// Run commands from a file, then print the final position
#[instrument(skip(config))]
fn run_script(config: SessionConfig, file: &Path) -> Result<()> {
    let script = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read script {}", file.display()))?;
    info!(lines = script.lines().count(), "Running script");

    let mut session = Session::new(config);
    let mut stdout = io::stdout();
    session.run(Cursor::new(script), &mut stdout, false)?;
    session.write_board(&mut stdout)
}

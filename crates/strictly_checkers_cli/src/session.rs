//! Line-oriented terminal session driving a [`GameController`].
//!
//! The session only translates text into square indices and prints what the
//! engine reports. All rules live in `strictly_checkers`.

use crate::config::SessionConfig;
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_checkers::{
    BOARD_SIZE, Cell, Color, GameController, MoveReport, Piece, Rank, Square, Transition,
};
use tracing::{debug, info, instrument};

/// One line of session input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Select when idle, otherwise attempt a move (a bare square number).
    Click(usize),
    /// `select <n>`
    Select(usize),
    /// `move <n>`
    Move(usize),
    /// `restart`
    Restart,
    /// `board`
    Board,
    /// `state`: the game as JSON.
    State,
    /// `quit`
    Quit,
}

/// Input that is not a session command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// Unrecognised verb.
    #[display("Unknown command '{}'", _0)]
    Unknown(String),
    /// `select` or `move` without a square.
    #[display("'{}' needs a square number", _0)]
    MissingSquare(String),
    /// Square argument is not a number.
    #[display("'{}' is not a square number", _0)]
    BadSquare(String),
}

impl std::error::Error for CommandError {}

fn parse_square(text: &str) -> Result<usize, CommandError> {
    text.parse()
        .map_err(|_| CommandError::BadSquare(text.to_string()))
}

impl FromStr for SessionCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_lowercase();
        let mut square = || {
            words
                .next()
                .ok_or_else(|| CommandError::MissingSquare(verb.clone()))
                .and_then(parse_square)
        };

        match verb.as_str() {
            "select" | "s" => square().map(SessionCommand::Select),
            "move" | "m" => square().map(SessionCommand::Move),
            "restart" => Ok(SessionCommand::Restart),
            "board" => Ok(SessionCommand::Board),
            "state" => Ok(SessionCommand::State),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            _ if verb.chars().all(|c| c.is_ascii_digit()) && !verb.is_empty() => {
                parse_square(&verb).map(SessionCommand::Click)
            }
            _ => Err(CommandError::Unknown(line.trim().to_string())),
        }
    }
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop.
    Quit,
}

/// A terminal session: one game plus its settings.
#[derive(Debug, Clone)]
pub struct Session {
    game: GameController,
    config: SessionConfig,
}

impl Session {
    /// Starts a session with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_game(GameController::new(), config)
    }

    /// Starts a session from an existing game.
    pub fn with_game(game: GameController, config: SessionConfig) -> Self {
        Self { game, config }
    }

    /// Returns the game.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Reads commands until input ends or `quit`.
    ///
    /// Interactive sessions print a prompt before each line.
    #[instrument(skip(self, input, out))]
    pub fn run(
        &mut self,
        input: impl BufRead,
        out: &mut impl Write,
        interactive: bool,
    ) -> anyhow::Result<()> {
        if interactive {
            self.write_board(out)?;
            self.prompt(out)?;
        }

        for line in input.lines() {
            let line = line?;
            let text = line.split('#').next().unwrap_or_default().trim();
            if !text.is_empty() {
                let flow = match text.parse::<SessionCommand>() {
                    Ok(command) => self.execute(command, out)?,
                    Err(e) => {
                        writeln!(out, "error: {}", e)?;
                        Flow::Continue
                    }
                };
                if flow == Flow::Quit {
                    break;
                }
            }
            if interactive {
                self.prompt(out)?;
            }
        }
        Ok(())
    }

    /// Executes one command and writes its result.
    #[instrument(skip(self, out))]
    pub fn execute(
        &mut self,
        command: SessionCommand,
        out: &mut impl Write,
    ) -> anyhow::Result<Flow> {
        let result = match command {
            SessionCommand::Click(index) => self.game.click(index),
            SessionCommand::Select(index) => self.game.select(index),
            SessionCommand::Move(index) => self.game.attempt_move(index),
            SessionCommand::Restart => {
                self.game.restart();
                writeln!(out, "new game")?;
                return self.after_accepted(out);
            }
            SessionCommand::Board => {
                self.write_board(out)?;
                return Ok(Flow::Continue);
            }
            SessionCommand::State => {
                writeln!(out, "{}", serde_json::to_string_pretty(&self.game)?)?;
                return Ok(Flow::Continue);
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        };

        match result {
            Ok(transition) => {
                writeln!(out, "{}", describe(&transition))?;
                if let Transition::Moved(MoveReport {
                    winner: Some(winner),
                    ..
                }) = transition
                {
                    self.finish(winner, out)?;
                }
                self.after_accepted(out)
            }
            Err(e) => {
                debug!(error = %e, "Command rejected");
                writeln!(out, "rejected: {}", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn finish(&mut self, winner: Color, out: &mut impl Write) -> anyhow::Result<()> {
        info!(%winner, "Game finished");
        writeln!(out, "{} wins!", winner)?;
        if *self.config.auto_restart() {
            self.game.restart();
            writeln!(out, "new game")?;
        }
        Ok(())
    }

    fn after_accepted(&self, out: &mut impl Write) -> anyhow::Result<Flow> {
        if *self.config.show_board() {
            self.write_board(out)?;
        }
        Ok(Flow::Continue)
    }

    /// Writes the board and whose turn it is.
    pub fn write_board(&self, out: &mut impl Write) -> anyhow::Result<()> {
        write!(out, "{}", render_board(&self.game))?;
        match self.game.status().winner() {
            Some(winner) => writeln!(out, "{} won. Type 'restart' to play again.", winner)?,
            None if self.game.is_chained() => writeln!(
                out,
                "{} to move, must keep capturing with {}",
                self.game.active_color(),
                self.game.selected().map_or_else(String::new, |sq| sq.to_string())
            )?,
            None => writeln!(out, "{} to move", self.game.active_color())?,
        }
        Ok(())
    }

    fn prompt(&self, out: &mut impl Write) -> anyhow::Result<()> {
        write!(out, "{}> ", self.game.active_color())?;
        out.flush()?;
        Ok(())
    }
}

fn describe(transition: &Transition) -> String {
    match transition {
        Transition::Selected(square) | Transition::Reselected(square) => {
            format!("selected {}", square)
        }
        Transition::Deselected => "selection cleared".to_string(),
        Transition::Moved(report) => {
            let mut text = format!("moved {}", report.action);
            if let Some(captured) = report.outcome.captured {
                text.push_str(&format!(", captured {}", captured));
            }
            if report.outcome.promoted {
                text.push_str(", crowned");
            }
            if report.chained {
                text.push_str(&format!("; {} must keep capturing", report.piece));
            }
            text
        }
    }
}

fn symbol(piece: Piece) -> char {
    match (piece.color, piece.rank) {
        (Color::White, Rank::Man) => 'w',
        (Color::White, Rank::King) => 'W',
        (Color::Black, Rank::Man) => 'b',
        (Color::Black, Rank::King) => 'B',
    }
}

/// Text dump of the board.
///
/// Each row is labelled with the index of its first square. The selected
/// piece is bracketed and its legal destinations are marked `+`.
pub fn render_board(game: &GameController) -> String {
    let destinations = game.legal_destinations();
    let mut result = String::from("    ");
    for col in 0..BOARD_SIZE {
        result.push_str(&format!(" {} ", col));
    }
    result.push('\n');

    for row in 0..BOARD_SIZE {
        result.push_str(&format!("{:>3} ", row * BOARD_SIZE));
        for col in 0..BOARD_SIZE {
            let Some(square) = Square::at(row as i8, col as i8) else {
                continue;
            };
            let cell = match game.board().get(square) {
                Cell::Occupied(piece) if game.selected() == Some(square) => {
                    format!("[{}]", symbol(piece))
                }
                Cell::Occupied(piece) => format!(" {} ", symbol(piece)),
                Cell::Empty if destinations.contains(&square) => " + ".to_string(),
                Cell::Empty if square.is_playable() => " . ".to_string(),
                Cell::Empty => "   ".to_string(),
            };
            result.push_str(&cell);
        }
        result.push('\n');
    }
    result
}

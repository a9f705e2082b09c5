//! Core domain types for checkers.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 8;

/// Number of men each side starts with.
pub const PIECES_PER_SIDE: usize = 12;

/// Side in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Color {
    /// White (moves first, starts on rows 5-7).
    White,
    /// Black (starts on rows 0-2).
    Black,
}

impl Color {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward step for a man of this color.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The row on which a man of this color is crowned.
    pub fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }

    /// Rows holding this color's men at the start of a game.
    fn home_rows(self) -> std::ops::Range<usize> {
        match self {
            Color::White => BOARD_SIZE - 3..BOARD_SIZE,
            Color::Black => 0..3,
        }
    }
}

/// Promotion level of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rank {
    /// Uncrowned piece, steps forward only.
    Man,
    /// Crowned piece, steps in all four diagonal directions.
    King,
}

/// A piece on the board. Pieces have no identity beyond the square they stand on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{color} {rank}")]
pub struct Piece {
    /// Owning side.
    pub color: Color,
    /// Man or king.
    pub rank: Rank,
}

impl Piece {
    /// Creates a piece.
    pub fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    /// An uncrowned piece of the given color.
    pub fn man(color: Color) -> Self {
        Self::new(color, Rank::Man)
    }

    /// A crowned piece of the given color.
    pub fn king(color: Color) -> Self {
        Self::new(color, Rank::King)
    }

    /// Returns true if the piece is crowned.
    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    /// Returns the crowned version of this piece. Kings stay kings.
    pub fn crowned(self) -> Self {
        Self::king(self.color)
    }
}

/// Contents of a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing on the square.
    #[default]
    Empty,
    /// Square holds a piece.
    Occupied(Piece),
}

impl Cell {
    /// Returns the piece on this cell, if any.
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    /// Returns true if nothing stands on the cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns true if a piece of `color` stands on the cell.
    pub fn holds(self, color: Color) -> bool {
        matches!(self, Cell::Occupied(piece) if piece.color == color)
    }
}

/// One of the four diagonal directions, seen from row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Diagonal {
    /// Toward row 0, column 0.
    UpLeft,
    /// Toward row 0, column 7.
    UpRight,
    /// Toward row 7, column 0.
    DownLeft,
    /// Toward row 7, column 7.
    DownRight,
}

impl Diagonal {
    /// Row delta of one step in this direction.
    pub fn row_delta(self) -> i8 {
        match self {
            Diagonal::UpLeft | Diagonal::UpRight => -1,
            Diagonal::DownLeft | Diagonal::DownRight => 1,
        }
    }

    /// Column delta of one step in this direction.
    pub fn col_delta(self) -> i8 {
        match self {
            Diagonal::UpLeft | Diagonal::DownLeft => -1,
            Diagonal::UpRight | Diagonal::DownRight => 1,
        }
    }
}

/// A square on the board, indexed 0-63 in row-major order.
///
/// Row 0 is Black's home edge; row 7 is White's.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("{_0}")]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl TryFrom<u8> for Square {
    type Error = MoveError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::new(index as usize).ok_or(MoveError::OutOfBounds(index as usize))
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> Self {
        square.0
    }
}

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = BOARD_SIZE * BOARD_SIZE;

    /// Creates a square from a board index, or `None` if out of range.
    pub fn new(index: usize) -> Option<Self> {
        (index < Self::COUNT).then_some(Self(index as u8))
    }

    /// Creates a square from signed coordinates, or `None` if off the board.
    pub fn at(row: i8, col: i8) -> Option<Self> {
        let size = BOARD_SIZE as i8;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self((row * size + col) as u8))
        } else {
            None
        }
    }

    /// Board index (0-63).
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Row (0-7).
    pub fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Column (0-7).
    pub fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Dark squares are the only ones pieces may stand on.
    pub fn is_playable(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// The square `steps` diagonal steps away, if it is on the board.
    pub fn offset(self, direction: Diagonal, steps: i8) -> Option<Self> {
        Self::at(
            self.row() as i8 + direction.row_delta() * steps,
            self.col() as i8 + direction.col_delta() * steps,
        )
    }

    /// Signed (row, column) distance from `self` to `other`.
    pub fn delta(self, other: Square) -> (i8, i8) {
        (
            other.row() as i8 - self.row() as i8,
            other.col() as i8 - self.col() as i8,
        )
    }

    /// The square halfway between `self` and `other`, if both deltas are even.
    pub fn midpoint(self, other: Square) -> Option<Self> {
        let (dr, dc) = self.delta(other);
        if dr % 2 != 0 || dc % 2 != 0 {
            return None;
        }
        Self::at(self.row() as i8 + dr / 2, self.col() as i8 + dc / 2)
    }

    /// Iterates over all 64 squares.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }

    /// Iterates over the 32 playable squares.
    pub fn playable() -> impl Iterator<Item = Square> {
        Self::all().filter(|sq| sq.is_playable())
    }
}

/// 8x8 checkers board. Pure storage with no rules knowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    rows: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board in the starting layout.
    #[instrument]
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Self {
            rows: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Builds a board from cells listed in index order (0-63).
    pub fn from_cells(cells: [Cell; Square::COUNT]) -> Self {
        let mut board = Self::empty();
        for (square, cell) in Square::all().zip(cells) {
            board.set(square, cell);
        }
        board
    }

    /// Returns the board with `piece` placed on `square`.
    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        self.set(square, Cell::Occupied(piece));
        self
    }

    /// Gets the cell at the given square.
    pub fn get(&self, square: Square) -> Cell {
        self.rows[square.row()][square.col()]
    }

    /// Sets the cell at the given square.
    pub fn set(&mut self, square: Square, cell: Cell) {
        self.rows[square.row()][square.col()] = cell;
    }

    /// Empties the given square.
    pub fn clear(&mut self, square: Square) {
        self.set(square, Cell::Empty);
    }

    /// Restores the starting layout.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::empty();
        for square in Square::playable() {
            if let Some(color) = Color::iter().find(|c| c.home_rows().contains(&square.row())) {
                self.set(square, Cell::Occupied(Piece::man(color)));
            }
        }
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_empty()
    }

    /// Iterates over every square with its contents.
    pub fn cells(&self) -> impl Iterator<Item = (Square, Cell)> + '_ {
        Square::all().map(|sq| (sq, self.get(sq)))
    }

    /// Iterates over the pieces of one color.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells()
            .filter_map(|(sq, cell)| cell.piece().map(|piece| (sq, piece)))
            .filter(move |(_, piece)| piece.color == color)
    }

    /// Number of pieces of one color.
    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells().filter(|(_, cell)| !cell.is_empty()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

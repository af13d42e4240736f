//! Board and cell model
//!
//! The board is a fixed `size × size` grid of cells. Cells are only ever
//! filled or cleared by the [`Game`](crate::Game) that owns the board.

use std::fmt;

use crate::{
    player::{PlayerId, Symbol},
    GameError, Result,
};

/// A (row, column) coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based row
    pub row: usize,
    /// Zero-based column
    pub col: usize,
}

impl Position {
    /// Creates a new position
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Occupancy of a single cell
///
/// The owner of a cell only exists while it is filled, so the owning player
/// and their symbol live inside the `Filled` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Nobody has played here
    Empty,
    /// Taken by a player
    Filled {
        /// Who filled the cell
        player: PlayerId,
        /// The mark they left
        symbol: Symbol,
    },
}

/// One grid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    state: CellState,
}

impl Cell {
    fn new(row: usize, col: usize) -> Self {
        Cell {
            position: Position::new(row, col),
            state: CellState::Empty,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn row(&self) -> usize {
        self.position.row
    }

    pub fn col(&self) -> usize {
        self.position.col
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn is_empty(&self) -> bool {
        self.state == CellState::Empty
    }

    /// The player occupying this cell, if any
    pub fn owner(&self) -> Option<PlayerId> {
        match self.state {
            CellState::Empty => None,
            CellState::Filled { player, .. } => Some(player),
        }
    }

    /// The symbol shown in this cell, if any
    pub fn symbol(&self) -> Option<Symbol> {
        match self.state {
            CellState::Empty => None,
            CellState::Filled { symbol, .. } => Some(symbol),
        }
    }
}

/// A square grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Creates an empty board with `size` rows and `size` columns
    pub fn new(size: usize) -> Self {
        let cells = (0..size)
            .map(|row| (0..size).map(|col| Cell::new(row, col)).collect())
            .collect();

        Board { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `(row, col)`
    ///
    /// Fails with [`GameError::OutOfBounds`] when either coordinate is not on the board.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell> {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .ok_or(GameError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
    }

    /// Iterates over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Iterates over empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells().filter(|cell| cell.is_empty())
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells().next().is_none()
    }

    /// Renders the board as text, one line per row
    ///
    /// Filled cells show their symbol, empty cells a blank.
    ///
    /// ```
    /// use polytoe::Board;
    ///
    /// let board = Board::new(3);
    /// assert_eq!(board.render().lines().next(), Some("|   |   |   |"));
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in &self.cells {
            out.push('|');
            for cell in row {
                let mark = cell.symbol().map_or(' ', Symbol::as_char);
                out.push(' ');
                out.push(mark);
                out.push_str(" |");
            }
            out.push('\n');
        }
        out
    }

    pub(crate) fn fill(&mut self, position: Position, player: PlayerId, symbol: Symbol) {
        self.cells[position.row][position.col].state = CellState::Filled { player, symbol };
    }

    pub(crate) fn clear(&mut self, position: Position) {
        self.cells[position.row][position.col].state = CellState::Empty;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

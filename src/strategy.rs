//! Winning strategies
//!
//! Each strategy watches one kind of line (rows, columns, diagonals) and keeps
//! a per-line, per-symbol fill counter. Applying a move touches only the lines
//! through that cell, so a win check is O(1) per move instead of a board scan.
//! Undoing a move decrements the same counters.

use std::collections::HashMap;
use std::fmt::Debug;

use crate::{board::Board, player::Move, player::Symbol};

/// Trait for pluggable win conditions
pub trait WinningStrategy: Debug {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Records a freshly applied move and reports whether it completed a line
    fn on_move_applied(&mut self, board: &Board, mv: &Move) -> bool;

    /// Unwinds whatever `on_move_applied` recorded for `mv`
    fn on_move_undone(&mut self, board: &Board, mv: &Move);
}

/// Returns the row, column and diagonal strategies in that order
pub fn standard_strategies() -> Vec<Box<dyn WinningStrategy>> {
    vec![
        Box::new(RowStrategy::new()),
        Box::new(ColumnStrategy::new()),
        Box::new(DiagonalStrategy::new()),
    ]
}

/// Fill counters indexed by symbol, then line id
#[derive(Debug, Clone, Default)]
struct LineCounts {
    counts: HashMap<Symbol, Vec<usize>>,
}

impl LineCounts {
    /// Increments the counter and returns its new value
    fn increment(&mut self, symbol: Symbol, line: usize, lines: usize) -> usize {
        let per_line = self.counts.entry(symbol).or_insert_with(|| vec![0; lines]);
        if per_line.len() < lines {
            per_line.resize(lines, 0);
        }
        per_line[line] += 1;
        per_line[line]
    }

    fn decrement(&mut self, symbol: Symbol, line: usize) {
        if let Some(count) = self
            .counts
            .get_mut(&symbol)
            .and_then(|per_line| per_line.get_mut(line))
        {
            *count = count.saturating_sub(1);
        }
    }

    fn get(&self, symbol: Symbol, line: usize) -> usize {
        self.counts
            .get(&symbol)
            .and_then(|per_line| per_line.get(line))
            .copied()
            .unwrap_or(0)
    }
}

/// Wins when one symbol fills an entire row
#[derive(Debug, Clone, Default)]
pub struct RowStrategy {
    counts: LineCounts,
}

impl RowStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many cells of `row` currently hold `symbol`
    pub fn count(&self, row: usize, symbol: Symbol) -> usize {
        self.counts.get(symbol, row)
    }
}

impl WinningStrategy for RowStrategy {
    fn name(&self) -> &'static str {
        "row"
    }

    fn on_move_applied(&mut self, board: &Board, mv: &Move) -> bool {
        self.counts.increment(mv.symbol(), mv.row(), board.size()) == board.size()
    }

    fn on_move_undone(&mut self, _board: &Board, mv: &Move) {
        self.counts.decrement(mv.symbol(), mv.row());
    }
}

/// Wins when one symbol fills an entire column
#[derive(Debug, Clone, Default)]
pub struct ColumnStrategy {
    counts: LineCounts,
}

impl ColumnStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many cells of `col` currently hold `symbol`
    pub fn count(&self, col: usize, symbol: Symbol) -> usize {
        self.counts.get(symbol, col)
    }
}

impl WinningStrategy for ColumnStrategy {
    fn name(&self) -> &'static str {
        "column"
    }

    fn on_move_applied(&mut self, board: &Board, mv: &Move) -> bool {
        self.counts.increment(mv.symbol(), mv.col(), board.size()) == board.size()
    }

    fn on_move_undone(&mut self, _board: &Board, mv: &Move) {
        self.counts.decrement(mv.symbol(), mv.col());
    }
}

/// Which diagonal a counter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagonal {
    /// `row == col`
    Main = 0,
    /// `row + col == size - 1`
    Anti = 1,
}

impl Diagonal {
    /// The diagonals passing through `mv` on a board of `size`
    fn through(mv: &Move, size: usize) -> impl Iterator<Item = Diagonal> {
        let main = (mv.row() == mv.col()).then_some(Diagonal::Main);
        let anti = (mv.row() + mv.col() + 1 == size).then_some(Diagonal::Anti);
        main.into_iter().chain(anti)
    }
}

/// Wins when one symbol fills either diagonal
///
/// Moves off both diagonals never touch its counters.
#[derive(Debug, Clone, Default)]
pub struct DiagonalStrategy {
    counts: LineCounts,
}

impl DiagonalStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many cells of `diagonal` currently hold `symbol`
    pub fn count(&self, diagonal: Diagonal, symbol: Symbol) -> usize {
        self.counts.get(symbol, diagonal as usize)
    }
}

impl WinningStrategy for DiagonalStrategy {
    fn name(&self) -> &'static str {
        "diagonal"
    }

    fn on_move_applied(&mut self, board: &Board, mv: &Move) -> bool {
        let size = board.size();
        let mut won = false;
        // Both diagonals must be counted even if the first one wins.
        for diagonal in Diagonal::through(mv, size) {
            won |= self.counts.increment(mv.symbol(), diagonal as usize, 2) == size;
        }
        won
    }

    fn on_move_undone(&mut self, board: &Board, mv: &Move) {
        for diagonal in Diagonal::through(mv, board.size()) {
            self.counts.decrement(mv.symbol(), diagonal as usize);
        }
    }
}

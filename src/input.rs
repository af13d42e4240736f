//! Coordinate input collaborators
//!
//! Human players don't own an input stream. A single [`CoordinateInput`] is
//! handed to [`Game::make_move`](crate::Game::make_move) and passed down to
//! whichever move source is on turn.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::{board::Position, player::Player, GameError, Result};

/// Supplies `(row, col)` pairs on demand
pub trait CoordinateInput {
    /// Reads the next coordinate pair for `player`
    fn read_position(&mut self, player: &Player) -> Result<Position>;
}

/// Line-oriented console input
///
/// Prompts on `writer` and expects two whitespace-separated non-negative
/// integers per line on `reader`.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        ConsoleInput { reader, writer }
    }

    /// Asks a yes/no question; anything starting with `y` or `Y` is a yes
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let line = self.prompt_line(prompt)?;
        Ok(line.trim_start().starts_with(['y', 'Y']))
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        writeln!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> CoordinateInput for ConsoleInput<R, W> {
    fn read_position(&mut self, player: &Player) -> Result<Position> {
        let line = self.prompt_line(&format!(
            "It is {}'s turn. Enter row and column (e.g. '0 2'):",
            player.name()
        ))?;
        parse_position(&line)
    }
}

/// Parses `"<row> <col>"` into a position
pub fn parse_position(line: &str) -> Result<Position> {
    let coords = line
        .split_whitespace()
        .map(|part| {
            part.parse::<usize>()
                .map_err(|_| GameError::Input(format!("'{}' is not a non-negative integer", part)))
        })
        .collect::<Result<Vec<_>>>()?;

    match coords.as_slice() {
        [row, col] => Ok(Position::new(*row, *col)),
        _ => Err(GameError::Input(format!(
            "expected two numbers, got {}",
            coords.len()
        ))),
    }
}

/// Replays a fixed queue of positions
///
/// Useful for tests and for replaying a recorded game.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    positions: VecDeque<Position>,
}

impl ScriptedInput {
    pub fn new<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        ScriptedInput {
            positions: positions
                .into_iter()
                .map(|(row, col)| Position::new(row, col))
                .collect(),
        }
    }

    /// Queues another position at the back
    pub fn push(&mut self, row: usize, col: usize) {
        self.positions.push_back(Position::new(row, col));
    }

    pub fn remaining(&self) -> usize {
        self.positions.len()
    }
}

impl CoordinateInput for ScriptedInput {
    fn read_position(&mut self, player: &Player) -> Result<Position> {
        let position = self.positions.pop_front();
        if position.is_none() {
            log::debug!("No scripted move left for {}", player.name());
        }
        position.ok_or(GameError::InputClosed)
    }
}

//! Players, their marks, and the moves they make
//!
//! A [`Player`] is plain identity data fixed before the game starts. How a
//! player chooses a cell lives separately in [`crate::source`].

use std::fmt;

use crate::board::Position;

/// Unique identifier of a player within a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single printable mark, unique across the players of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(char);

impl Symbol {
    pub fn new(mark: char) -> Self {
        Symbol(mark)
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Symbol {
    fn from(mark: char) -> Self {
        Symbol(mark)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How hard a bot tries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BotDifficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Whether a player is driven by a person or by the computer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// Moves come from the input collaborator
    Human,
    /// Moves come from a bot policy
    Bot(BotDifficulty),
}

impl PlayerKind {
    pub fn is_bot(&self) -> bool {
        matches!(self, PlayerKind::Bot(_))
    }
}

/// A participant in the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    symbol: Symbol,
    kind: PlayerKind,
}

impl Player {
    /// Creates a player with an explicit kind
    pub fn new(id: u64, name: impl Into<String>, symbol: impl Into<Symbol>, kind: PlayerKind) -> Self {
        Player {
            id: PlayerId(id),
            name: name.into(),
            symbol: symbol.into(),
            kind,
        }
    }

    /// Creates a human player
    pub fn human(id: u64, name: impl Into<String>, symbol: impl Into<Symbol>) -> Self {
        Self::new(id, name, symbol, PlayerKind::Human)
    }

    /// Creates a bot player with the given difficulty
    pub fn bot(
        id: u64,
        name: impl Into<String>,
        symbol: impl Into<Symbol>,
        difficulty: BotDifficulty,
    ) -> Self {
        Self::new(id, name, symbol, PlayerKind::Bot(difficulty))
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_bot(&self) -> bool {
        self.kind.is_bot()
    }

    /// Builds a move by this player at `position`
    pub fn move_at(&self, position: Position) -> Move {
        Move::new(position, self.id, self.symbol)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

/// One turn's cell assignment
///
/// Moves are immutable once created; their order is their index in the
/// game's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    position: Position,
    player: PlayerId,
    symbol: Symbol,
}

impl Move {
    pub fn new(position: Position, player: PlayerId, symbol: Symbol) -> Self {
        Move {
            position,
            player,
            symbol,
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

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.symbol, self.position)
    }
}

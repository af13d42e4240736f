//! # polytoe
//!
//! An N-player Tic-Tac-Toe engine: a square board of any size, pluggable
//! winning strategies, human and bot players, and move undo.
//!
//! ## Features
//!
//! - Boards of any size with `size - 1` players by default (configurable)
//! - Row, column and diagonal winning strategies with O(1) win checks per move
//! - Human players fed by a single injected input, bots that pick their own cells
//! - Undo that also unwinds the strategies' line counters
//!
//! ## Basic Usage
//!
//! ```
//! use polytoe::{Game, GameState, Player, ScriptedInput};
//!
//! fn main() -> Result<(), polytoe::GameError> {
//!     let mut game = Game::builder()
//!         .with_size(3)
//!         .with_player(Player::human(1, "Alice", 'X'))
//!         .with_player(Player::human(2, "Bob", 'O'))
//!         .build()?;
//!
//!     // X takes the top row while O plays the middle
//!     let mut input = ScriptedInput::new([(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
//!     while game.check_status() == GameState::InProgress {
//!         game.make_move(&mut input)?;
//!     }
//!
//!     assert_eq!(game.check_status(), GameState::Winner);
//!     assert_eq!(game.winner().map(|p| p.name()), Some("Alice"));
//!     println!("{}", game.board());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## How It Works
//!
//! Every call to [`Game::make_move`] goes through the same steps:
//!
//! 1. **Produce**: the current player's [`MoveSource`] returns a candidate move.
//!    Humans read it from the [`CoordinateInput`], bots choose an empty cell.
//! 2. **Validate**: the cell must be on the board and empty. A rejected move
//!    changes nothing and the same player stays on turn.
//! 3. **Apply**: the cell is filled, the move recorded, the turn advanced.
//! 4. **Evaluate**: each [`WinningStrategy`] updates its counters for the lines
//!    through the cell; the first one to report a full line decides the winner.
//!    If nobody won and the board is full, the game is drawn.
//!
//! [`Game::undo`] reverses the last move, including the strategies' counters.

pub mod board;
pub mod config;
pub mod game;
pub mod input;
pub mod player;
pub mod source;
pub mod stats;
pub mod strategy;

pub use board::{Board, Cell, CellState, Position};
pub use config::{GameConfig, PlayerCountRule};
pub use game::{Game, GameBuilder, GameState, MoveOutcome};
pub use input::{ConsoleInput, CoordinateInput, ScriptedInput};
pub use player::{BotDifficulty, Move, Player, PlayerId, PlayerKind, Symbol};
pub use source::{BotMoveSource, HumanMoveSource, MoveSource};
pub use stats::GameStatistics;
pub use strategy::{ColumnStrategy, DiagonalStrategy, RowStrategy, WinningStrategy};

/// Error types for game setup and play
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// More than one bot among the players
    #[error("At most one bot is allowed, found {count}")]
    TooManyBots { count: usize },

    /// Player count doesn't satisfy the configured rule
    #[error("Expected {expected} players, found {actual}")]
    PlayerCount { expected: String, actual: usize },

    /// Two players share a symbol
    #[error("Symbol '{0}' is used by more than one player")]
    DuplicateSymbol(Symbol),

    /// Two players share an id
    #[error("Player id {0} is used by more than one player")]
    DuplicatePlayerId(PlayerId),

    /// Board is below the configured minimum size
    #[error("Board size {size} is below the minimum of {min}")]
    BoardTooSmall { size: usize, min: usize },

    /// Cell is not on the board
    #[error("Cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// Cell is already filled
    #[error("Cell ({row}, {col}) is already taken")]
    CellOccupied { row: usize, col: usize },

    /// Move submitted for someone other than the player on turn
    #[error("It is {expected}'s turn")]
    NotPlayersTurn { expected: String },

    /// No moves are accepted once the game is won or drawn
    #[error("Game is already {0}")]
    GameOver(GameState),

    /// Move history is empty
    #[error("Nothing to undo")]
    NothingToUndo,

    /// Input could not be turned into a move
    #[error("Invalid input: {0}")]
    Input(String),

    /// The input has no more coordinates to give
    #[error("Input closed")]
    InputClosed,

    /// Reading input or writing prompts failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// True for errors after which the same call can simply be retried
    ///
    /// Configuration errors are fatal to game creation, a finished game
    /// accepts no further moves, and a closed input will never produce one.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            GameError::TooManyBots { .. }
                | GameError::PlayerCount { .. }
                | GameError::DuplicateSymbol(_)
                | GameError::DuplicatePlayerId(_)
                | GameError::BoardTooSmall { .. }
                | GameError::GameOver(_)
                | GameError::InputClosed
                | GameError::Io(_)
        )
    }
}

/// Result type for game operations
pub type Result<T> = std::result::Result<T, GameError>;

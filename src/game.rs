//! Game orchestration
//!
//! [`Game`] owns the board, the players with their move sources, the move
//! history and the winning strategies. It is the only thing that fills or
//! clears cells. A game can only be created through [`GameBuilder`], which
//! runs its validation chain first.

use std::collections::HashSet;
use std::fmt;

use crate::{
    board::Board,
    config::{GameConfig, PlayerCountRule},
    input::CoordinateInput,
    player::{Move, Player, PlayerId},
    source::{source_for, MoveSource},
    stats::GameStatistics,
    strategy::{standard_strategies, WinningStrategy},
    GameError, Result,
};

/// Overall status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Moves are still being played
    InProgress,
    /// Someone completed a line
    Winner,
    /// The board filled up without a winner
    Draw,
}

impl GameState {
    /// True for `Winner` and `Draw`
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::InProgress)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameState::InProgress => "in progress",
            GameState::Winner => "won",
            GameState::Draw => "drawn",
        };
        write!(f, "{}", text)
    }
}

/// Result of a successfully applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move as recorded in the history
    pub mv: Move,
    /// Game state right after the move
    pub state: GameState,
}

/// A player together with where their moves come from
struct Seat {
    player: Player,
    source: Box<dyn MoveSource>,
}

type Validation = fn(&GameBuilder) -> Result<()>;

/// Checks run by [`GameBuilder::build`], in order, stopping at the first failure
const VALIDATION_CHAIN: [Validation; 5] = [
    validate_bot_count,
    validate_player_count,
    validate_symbol_uniqueness,
    validate_id_uniqueness,
    validate_board_size,
];

fn validate_bot_count(builder: &GameBuilder) -> Result<()> {
    let count = builder.seats.iter().filter(|seat| seat.player.is_bot()).count();
    if count > 1 {
        return Err(GameError::TooManyBots { count });
    }
    Ok(())
}

fn validate_player_count(builder: &GameBuilder) -> Result<()> {
    let actual = builder.seats.len();
    if actual == 0 {
        return Err(GameError::PlayerCount {
            expected: "at least 1".to_string(),
            actual,
        });
    }
    builder
        .config
        .player_count_rule
        .check(actual, builder.config.board_size)
        .map_err(|expected| GameError::PlayerCount { expected, actual })
}

fn validate_symbol_uniqueness(builder: &GameBuilder) -> Result<()> {
    let mut seen = HashSet::new();
    for seat in &builder.seats {
        let symbol = seat.player.symbol();
        if !seen.insert(symbol) {
            return Err(GameError::DuplicateSymbol(symbol));
        }
    }
    Ok(())
}

fn validate_id_uniqueness(builder: &GameBuilder) -> Result<()> {
    let mut seen = HashSet::new();
    for seat in &builder.seats {
        let id = seat.player.id();
        if !seen.insert(id) {
            return Err(GameError::DuplicatePlayerId(id));
        }
    }
    Ok(())
}

fn validate_board_size(builder: &GameBuilder) -> Result<()> {
    let size = builder.config.board_size;
    let Some(min) = builder.config.min_board_size else {
        return Ok(());
    };
    if size < min {
        return Err(GameError::BoardTooSmall { size, min });
    }
    Ok(())
}

/// Validating constructor for [`Game`]
///
/// # Example
///
/// ```
/// use polytoe::{BotDifficulty, Game, GameError, Player};
///
/// let result = Game::builder()
///     .with_size(3)
///     .with_player(Player::bot(1, "Bot A", 'X', BotDifficulty::Easy))
///     .with_player(Player::bot(2, "Bot B", 'O', BotDifficulty::Easy))
///     .build();
///
/// assert!(matches!(result, Err(GameError::TooManyBots { count: 2 })));
/// ```
pub struct GameBuilder {
    config: GameConfig,
    seats: Vec<Seat>,
    strategies: Vec<Box<dyn WinningStrategy>>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Creates a builder with the default configuration and no players
    pub fn new() -> Self {
        GameBuilder {
            config: GameConfig::default(),
            seats: Vec::new(),
            strategies: Vec::new(),
        }
    }

    /// Replaces the whole configuration
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the board size
    pub fn with_size(mut self, size: usize) -> Self {
        self.config.board_size = size;
        self
    }

    /// Sets the player count rule
    pub fn with_player_count_rule(mut self, rule: PlayerCountRule) -> Self {
        self.config.player_count_rule = rule;
        self
    }

    /// Rejects boards smaller than `size`
    pub fn with_min_board_size(mut self, size: usize) -> Self {
        self.config.min_board_size = Some(size);
        self
    }

    /// Adds a player whose moves come from the default source for their kind
    pub fn with_player(self, player: Player) -> Self {
        let source = source_for(player.kind());
        self.push_seat(player, source)
    }

    /// Adds several players in turn order
    pub fn with_players<I: IntoIterator<Item = Player>>(self, players: I) -> Self {
        players
            .into_iter()
            .fold(self, |builder, player| builder.with_player(player))
    }

    /// Adds a player with a custom move source
    pub fn with_player_source<M: MoveSource + 'static>(self, player: Player, source: M) -> Self {
        self.push_seat(player, Box::new(source))
    }

    /// Appends a winning strategy; strategies are evaluated in insertion order
    pub fn with_strategy<W: WinningStrategy + 'static>(mut self, strategy: W) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Appends several boxed winning strategies
    pub fn with_strategies(mut self, strategies: Vec<Box<dyn WinningStrategy>>) -> Self {
        self.strategies.extend(strategies);
        self
    }

    fn push_seat(mut self, player: Player, source: Box<dyn MoveSource>) -> Self {
        self.seats.push(Seat { player, source });
        self
    }

    /// Runs the validation chain without building
    pub fn validate(&self) -> Result<()> {
        VALIDATION_CHAIN
            .iter()
            .try_for_each(|validation| validation(self))
    }

    /// Validates the configuration and creates the game
    pub fn build(self) -> Result<Game> {
        self.validate()?;

        let GameBuilder {
            config,
            seats,
            mut strategies,
        } = self;

        if strategies.is_empty() {
            log::info!("No winning strategies given, using row/column/diagonal");
            strategies = standard_strategies();
        }

        let (players, sources): (Vec<_>, Vec<_>) = seats
            .into_iter()
            .map(|seat| (seat.player, seat.source))
            .unzip();

        log::info!(
            "New {0}x{0} game with {1} players",
            config.board_size,
            players.len()
        );

        Ok(Game {
            players,
            sources,
            board: Board::new(config.board_size),
            moves: Vec::new(),
            strategies,
            state: GameState::InProgress,
            winner: None,
            next_player_index: 0,
            statistics: GameStatistics::new(),
        })
    }
}

/// A game of N-player Tic-Tac-Toe
pub struct Game {
    /// Players in turn order
    players: Vec<Player>,

    /// Move source for each player, same order as `players`
    sources: Vec<Box<dyn MoveSource>>,

    board: Board,

    /// Applied moves, oldest first
    moves: Vec<Move>,

    /// Win conditions, evaluated in order after every move
    strategies: Vec<Box<dyn WinningStrategy>>,

    state: GameState,

    /// Index into `players`, set only while `state` is `Winner`
    winner: Option<usize>,

    /// Always in `0..players.len()`
    next_player_index: usize,

    statistics: GameStatistics,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("players", &self.players)
            .field("board", &self.board)
            .field("moves", &self.moves)
            .field("strategies", &self.strategies)
            .field("state", &self.state)
            .field("winner", &self.winner)
            .field("next_player_index", &self.next_player_index)
            .finish()
    }
}

impl Game {
    /// Starts building a new game
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    /// Asks the current player for a move and applies it
    ///
    /// Rejected moves leave the game untouched and the same player stays on
    /// turn, so the caller can simply call this again.
    pub fn make_move(&mut self, input: &mut dyn CoordinateInput) -> Result<MoveOutcome> {
        self.ensure_in_progress()?;

        let index = self.next_player_index;
        let mv = self.sources[index].produce_move(&self.board, &self.players[index], input)?;

        self.apply_move(mv)
    }

    /// Validates and applies a move for the player on turn
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveOutcome> {
        self.ensure_in_progress()?;

        let index = self.next_player_index;
        if let Err(err) = self.validate_move(index, &mv) {
            self.statistics.moves_rejected += 1;
            log::warn!("Rejected move {}: {}", mv, err);
            return Err(err);
        }

        self.board.fill(mv.position(), mv.player(), mv.symbol());
        self.moves.push(mv);
        self.next_player_index = (index + 1) % self.players.len();
        self.statistics.moves_applied += 1;
        log::debug!("{} played {}", self.players[index].name(), mv.position());

        if let Some(strategy) = self.evaluate_strategies(&mv) {
            self.state = GameState::Winner;
            self.winner = Some(index);
            log::info!(
                "{} wins on move {} ({})",
                self.players[index],
                self.moves.len(),
                strategy
            );
        } else if self.moves.len() == self.board.size() * self.board.size() {
            self.state = GameState::Draw;
            log::info!("Game drawn after {} moves", self.moves.len());
        }

        Ok(MoveOutcome {
            mv,
            state: self.state,
        })
    }

    /// Takes back the most recent move
    ///
    /// Undoing a winning or drawing move puts the game back in progress.
    pub fn undo(&mut self) -> Result<Move> {
        let Some(mv) = self.moves.pop() else {
            self.statistics.empty_undos += 1;
            log::warn!("Nothing to undo");
            return Err(GameError::NothingToUndo);
        };

        self.board.clear(mv.position());
        let count = self.players.len();
        self.next_player_index = (self.next_player_index + count - 1) % count;

        for strategy in &mut self.strategies {
            strategy.on_move_undone(&self.board, &mv);
        }

        if self.state.is_terminal() {
            log::info!("Undo reopens a {} game", self.state);
            self.state = GameState::InProgress;
            self.winner = None;
        }

        self.statistics.undos += 1;
        log::debug!("Undid {}", mv);
        Ok(mv)
    }

    pub fn check_status(&self) -> GameState {
        self.state
    }

    /// The winning player, only while the game is in the `Winner` state
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|index| &self.players[index])
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Players in turn order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Looks up a player by id
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == id)
    }

    /// Applied moves, oldest first
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The player who moves next
    pub fn current_player(&self) -> &Player {
        &self.players[self.next_player_index]
    }

    pub fn next_player_index(&self) -> usize {
        self.next_player_index
    }

    /// Names of the active winning strategies in evaluation order
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|strategy| strategy.name()).collect()
    }

    pub fn statistics(&self) -> &GameStatistics {
        &self.statistics
    }

    fn ensure_in_progress(&self) -> Result<()> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver(self.state));
        }
        Ok(())
    }

    fn validate_move(&self, index: usize, mv: &Move) -> Result<()> {
        let current = &self.players[index];
        if mv.player() != current.id() || mv.symbol() != current.symbol() {
            return Err(GameError::NotPlayersTurn {
                expected: current.name().to_string(),
            });
        }

        let cell = self.board.cell_at(mv.row(), mv.col())?;
        if !cell.is_empty() {
            return Err(GameError::CellOccupied {
                row: mv.row(),
                col: mv.col(),
            });
        }
        Ok(())
    }

    /// Feeds `mv` to every strategy and returns the name of the first that reports a win
    fn evaluate_strategies(&mut self, mv: &Move) -> Option<&'static str> {
        let mut winning = None;
        // Every strategy must see the move so its counters stay in sync for undo.
        for strategy in &mut self.strategies {
            let won = strategy.on_move_applied(&self.board, mv);
            log::debug!("{} strategy: {}", strategy.name(), won);
            if won && winning.is_none() {
                winning = Some(strategy.name());
            }
        }
        winning
    }
}

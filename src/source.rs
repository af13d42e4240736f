//! Move sources
//!
//! A move source turns "it is your turn" into a candidate [`Move`]. Humans
//! read coordinates from the injected input, bots pick a cell themselves.
//! Neither checks bounds or occupancy; that is the game's job.

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

use crate::{
    board::Board,
    input::CoordinateInput,
    player::{BotDifficulty, Move, Player, PlayerKind},
    GameError, Result,
};

/// Trait for anything that can produce a move for a player
pub trait MoveSource {
    /// Produces the next candidate move for `player` on `board`
    fn produce_move(
        &mut self,
        board: &Board,
        player: &Player,
        input: &mut dyn CoordinateInput,
    ) -> Result<Move>;
}

/// Creates the default move source for a kind of player
pub fn source_for(kind: PlayerKind) -> Box<dyn MoveSource> {
    match kind {
        PlayerKind::Human => Box::new(HumanMoveSource::new()),
        PlayerKind::Bot(difficulty) => Box::new(BotMoveSource::new(difficulty)),
    }
}

/// Reads coordinates from the input collaborator
#[derive(Debug, Clone, Default)]
pub struct HumanMoveSource;

impl HumanMoveSource {
    pub fn new() -> Self {
        HumanMoveSource
    }
}

impl MoveSource for HumanMoveSource {
    fn produce_move(
        &mut self,
        _board: &Board,
        player: &Player,
        input: &mut dyn CoordinateInput,
    ) -> Result<Move> {
        let position = input.read_position(player)?;
        Ok(player.move_at(position))
    }
}

/// Picks an empty cell without asking anyone
///
/// `Easy` takes the first empty cell in row-major order. `Medium` and `Hard`
/// pick uniformly among the empty cells.
#[derive(Debug, Clone)]
pub struct BotMoveSource {
    difficulty: BotDifficulty,
    rng: StdRng,
}

impl BotMoveSource {
    pub fn new(difficulty: BotDifficulty) -> Self {
        BotMoveSource {
            difficulty,
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a bot whose random choices are reproducible
    pub fn with_seed(difficulty: BotDifficulty, seed: u64) -> Self {
        BotMoveSource {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn difficulty(&self) -> BotDifficulty {
        self.difficulty
    }
}

impl MoveSource for BotMoveSource {
    fn produce_move(
        &mut self,
        board: &Board,
        player: &Player,
        _input: &mut dyn CoordinateInput,
    ) -> Result<Move> {
        let cell = match self.difficulty {
            BotDifficulty::Easy => board.empty_cells().next(),
            BotDifficulty::Medium | BotDifficulty::Hard => {
                board.empty_cells().choose(&mut self.rng)
            }
        };

        let cell = cell.ok_or_else(|| {
            GameError::Input(format!("{} has no empty cell to play", player.name()))
        })?;
        log::debug!("{} picks {}", player.name(), cell.position());

        Ok(player.move_at(cell.position()))
    }
}

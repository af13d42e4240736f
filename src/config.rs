//! Configuration options for a game
//!
//! This module defines the board size and the validation policies the
//! [`GameBuilder`](crate::GameBuilder) enforces before a game is created.

/// How many players a board of a given size accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerCountRule {
    /// Exactly `size - 1` players
    ///
    /// This is the classic setup: two players on 3×3, three on 4×4 and so on.
    #[default]
    OneLessThanSize,

    /// A fixed number of players regardless of board size
    Exactly(usize),

    /// Any count in `min..=max`
    Between {
        /// Fewest players allowed
        min: usize,
        /// Most players allowed
        max: usize,
    },
}

impl PlayerCountRule {
    /// Checks `count` against the rule for a board of `board_size`
    ///
    /// Returns the expected count as a human-readable string on failure.
    pub fn check(&self, count: usize, board_size: usize) -> Result<(), String> {
        match *self {
            PlayerCountRule::OneLessThanSize => {
                let expected = board_size.saturating_sub(1);
                if count == expected {
                    Ok(())
                } else {
                    Err(expected.to_string())
                }
            }
            PlayerCountRule::Exactly(expected) => {
                if count == expected {
                    Ok(())
                } else {
                    Err(expected.to_string())
                }
            }
            PlayerCountRule::Between { min, max } => {
                if (min..=max).contains(&count) {
                    Ok(())
                } else {
                    Err(format!("{} to {}", min, max))
                }
            }
        }
    }
}

/// Configuration for a game
///
/// # Example
///
/// ```
/// use polytoe::{GameConfig, PlayerCountRule};
///
/// let config = GameConfig::default()
///     .with_board_size(4)
///     .with_player_count_rule(PlayerCountRule::Between { min: 2, max: 3 });
///
/// assert_eq!(config.board_size, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of rows and columns
    pub board_size: usize,

    /// Accepted number of players
    pub player_count_rule: PlayerCountRule,

    /// Boards smaller than this are rejected; no lower bound when `None`
    pub min_board_size: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: 3,
            player_count_rule: PlayerCountRule::OneLessThanSize,
            min_board_size: None,
        }
    }
}

impl GameConfig {
    /// Sets the board size
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Sets the player count rule
    pub fn with_player_count_rule(mut self, rule: PlayerCountRule) -> Self {
        self.player_count_rule = rule;
        self
    }

    /// Rejects boards smaller than `size`
    pub fn with_min_board_size(mut self, size: usize) -> Self {
        self.min_board_size = Some(size);
        self
    }
}

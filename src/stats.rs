//! Statistics collected while a game is played

/// Counters kept by a [`Game`](crate::Game)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameStatistics {
    /// Moves that passed validation and were applied
    pub moves_applied: usize,

    /// Moves rejected as out of bounds, occupied, or out of turn
    pub moves_rejected: usize,

    /// Moves taken back
    pub undos: usize,

    /// Undo requests made with an empty history
    pub empty_undos: usize,
}

impl GameStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of submitted moves that were rejected
    pub fn rejection_rate(&self) -> f64 {
        let submitted = self.moves_applied + self.moves_rejected;
        if submitted == 0 {
            return 0.0;
        }
        self.moves_rejected as f64 / submitted as f64
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "Game Statistics:\n\
             - Moves applied: {}\n\
             - Moves rejected: {} ({:.1}%)\n\
             - Undos: {}\n\
             - Empty undos: {}",
            self.moves_applied,
            self.moves_rejected,
            self.rejection_rate() * 100.0,
            self.undos,
            self.empty_undos,
        )
    }
}

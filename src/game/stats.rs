//! Session statistics
//!
//! Kept in memory for the life of the process only.

use super::{GameState, Round};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub played: usize,
    pub won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// `distribution[n - 1]` counts wins in `n` guesses
    pub distribution: Vec<usize>,
}

impl Statistics {
    /// Record a finished round; rounds still in play are ignored
    pub fn record(&mut self, round: &Round) {
        match round.state() {
            GameState::Playing => return,
            GameState::Won => {
                self.won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);

                let attempts = round.attempt_count();
                if self.distribution.len() < attempts {
                    self.distribution.resize(attempts, 0);
                }
                self.distribution[attempts - 1] += 1;
            }
            GameState::Lost => self.current_streak = 0,
        }
        self.played += 1;
    }

    /// Percentage of played rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f64 / self.played as f64 * 100.0
        }
    }
}

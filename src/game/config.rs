//! Round configuration

use crate::core::FeedbackRule;

/// Attempts allowed per round in the standard game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Largest number of attempts a round can be configured with
pub const MAX_ATTEMPTS_LIMIT: usize = 20;

/// Settings fixed for the lifetime of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Submissions allowed before the round is lost (1 to `MAX_ATTEMPTS_LIMIT`)
    pub max_attempts: usize,
    /// How repeated letters are scored
    pub rule: FeedbackRule,
}

impl GameConfig {
    /// Create a config; `max_attempts` is clamped to `1..=MAX_ATTEMPTS_LIMIT`
    #[must_use]
    pub fn new(max_attempts: usize, rule: FeedbackRule) -> Self {
        Self {
            max_attempts: max_attempts.clamp(1, MAX_ATTEMPTS_LIMIT),
            rule,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, FeedbackRule::default())
    }
}

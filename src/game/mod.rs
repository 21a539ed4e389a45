//! Game state machine
//!
//! [`Round`] holds one round's state and its transitions. [`Game`] owns the
//! dictionary, the random source and the current round, and is the only entry
//! point front ends use to mutate anything.

mod config;
mod round;
mod stats;

pub use config::{DEFAULT_MAX_ATTEMPTS, GameConfig, MAX_ATTEMPTS_LIMIT};
pub use round::{BoardRow, GameState, GuessError, Outcome, Round};
pub use stats::Statistics;

use crate::wordlists::Dictionary;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Controller owning the current round
///
/// Front ends read [`Game::round`] after every call and forward player intents
/// through the methods below.
pub struct Game<R: Rng = StdRng> {
    dictionary: Dictionary,
    config: GameConfig,
    rng: R,
    round: Round,
    stats: Statistics,
}

impl Game<StdRng> {
    /// Create a game with a seeded generator, or one seeded from the OS
    #[must_use]
    pub fn seeded(dictionary: Dictionary, config: GameConfig, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::new(dictionary, config, rng)
    }
}

impl<R: Rng> Game<R> {
    /// Create a game and start its first round
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_game::game::{Game, GameConfig, GameState};
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::from_text("crane").unwrap();
    /// let mut game = Game::new(dict, GameConfig::default(), StdRng::seed_from_u64(1));
    /// game.set_current_guess("crane");
    /// game.submit_guess().unwrap();
    /// assert_eq!(game.round().state(), GameState::Won);
    /// ```
    pub fn new(dictionary: Dictionary, config: GameConfig, mut rng: R) -> Self {
        let round = Round::start(&dictionary, &mut rng, config);
        Self {
            dictionary,
            config,
            rng,
            round,
            stats: Statistics::default(),
        }
    }

    /// Snapshot of the current round
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    pub fn set_current_guess(&mut self, text: &str) -> bool {
        self.round.set_current_guess(text)
    }

    pub fn append_letter(&mut self, ch: char) -> bool {
        self.round.append_letter(ch)
    }

    pub fn delete_last_letter(&mut self) -> bool {
        self.round.delete_last_letter()
    }

    /// Submit the in-progress guess, recording statistics when the round ends
    ///
    /// # Errors
    ///
    /// See [`Round::submit_guess`].
    pub fn submit_guess(&mut self) -> Result<Outcome, GuessError> {
        let outcome = self.round.submit_guess(&self.dictionary)?;
        if self.round.state().is_over() {
            self.stats.record(&self.round);
        }
        Ok(outcome)
    }

    /// Discard the current round and start a new one
    pub fn reset_game(&mut self) {
        if !self.round.state().is_over() {
            debug!(
                "abandoning round after {} attempts",
                self.round.attempt_count()
            );
        }
        self.round = Round::start(&self.dictionary, &mut self.rng, self.config);
    }
}

//! A single round and its state transitions

use super::GameConfig;
use crate::core::{
    GuessResult, KeyboardHints, WORD_LENGTH, Word, evaluate_with, result_to_emoji,
};
use crate::wordlists::Dictionary;
use log::{debug, info, trace};
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Round outcome state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    /// True once the round has been won or lost
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// A submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    pub guess: Word,
    pub result: GuessResult,
}

/// Why a submission was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Not enough letters")]
    InvalidLength { len: usize },
    #[error("Not in word list")]
    NotInDictionary(String),
    #[error("The round is over")]
    RoundOver,
}

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Guess recorded, round still in progress
    Continue { result: GuessResult },
    Won { result: GuessResult, attempts: usize },
    Lost { result: GuessResult, answer: String },
}

impl Outcome {
    #[must_use]
    pub const fn result(&self) -> &GuessResult {
        match self {
            Self::Continue { result } | Self::Won { result, .. } | Self::Lost { result, .. } => {
                result
            }
        }
    }
}

/// All mutable state of one round
///
/// The attempt count is the board length, so the two can never disagree.
#[derive(Debug, Clone)]
pub struct Round {
    answer: Word,
    board: Vec<BoardRow>,
    current_guess: String,
    state: GameState,
    message: String,
    hints: KeyboardHints,
    config: GameConfig,
}

impl Round {
    /// Start a round with an answer drawn uniformly from `dictionary`
    pub fn start<R: Rng + ?Sized>(dictionary: &Dictionary, rng: &mut R, config: GameConfig) -> Self {
        let answer = dictionary.choose(rng).clone();
        debug!(
            "starting round: {} words, {} attempts, {} feedback",
            dictionary.len(),
            config.max_attempts,
            config.rule.name()
        );
        trace!("answer is {answer}");
        Self::with_answer(answer, config)
    }

    /// Start a round with a fixed answer
    #[must_use]
    pub fn with_answer(answer: Word, config: GameConfig) -> Self {
        Self {
            answer,
            board: Vec::new(),
            current_guess: String::with_capacity(WORD_LENGTH),
            state: GameState::Playing,
            message: String::new(),
            hints: KeyboardHints::new(),
            config,
        }
    }

    /// Replace the in-progress guess
    ///
    /// Accepted only while playing and only for lowercase letters, at most 5.
    pub fn set_current_guess(&mut self, text: &str) -> bool {
        if self.state.is_over()
            || text.len() > WORD_LENGTH
            || !text.bytes().all(|b| b.is_ascii_lowercase())
        {
            return false;
        }
        self.current_guess.clear();
        self.current_guess.push_str(text);
        true
    }

    /// Add one letter to the in-progress guess, stored lowercase
    pub fn append_letter(&mut self, ch: char) -> bool {
        if self.state.is_over()
            || self.current_guess.len() >= WORD_LENGTH
            || !ch.is_ascii_alphabetic()
        {
            return false;
        }
        self.current_guess.push(ch.to_ascii_lowercase());
        true
    }

    /// Remove the last letter of the in-progress guess
    pub fn delete_last_letter(&mut self) -> bool {
        if self.state.is_over() {
            return false;
        }
        self.current_guess.pop().is_some()
    }

    /// Validate, score and record the in-progress guess
    ///
    /// # Errors
    ///
    /// - `InvalidLength` if the guess is not 5 letters
    /// - `NotInDictionary` if it is not a known word
    /// - `RoundOver` if the round already ended; the message is left alone
    pub fn submit_guess(&mut self, dictionary: &Dictionary) -> Result<Outcome, GuessError> {
        if self.state.is_over() {
            return Err(GuessError::RoundOver);
        }

        let guess = match self.validate(dictionary) {
            Ok(guess) => guess,
            Err(err) => {
                debug!("rejected guess {:?}: {err}", self.current_guess);
                self.message = err.to_string();
                return Err(err);
            }
        };

        let result = evaluate_with(self.config.rule, &guess, &self.answer);
        self.hints.record(&guess, &result);
        let solved = guess == self.answer;
        debug!("guess {guess} scored {}", result_to_emoji(&result));
        self.board.push(BoardRow { guess, result });
        self.current_guess.clear();

        let attempts = self.attempt_count();
        let outcome = if solved {
            self.state = GameState::Won;
            self.message = win_message(attempts).to_string();
            info!("round won in {attempts}/{}", self.config.max_attempts);
            Outcome::Won { result, attempts }
        } else if attempts >= self.config.max_attempts {
            self.state = GameState::Lost;
            self.message = format!("The word was {}", self.answer.text().to_uppercase());
            info!("round lost after {attempts} attempts");
            Outcome::Lost {
                result,
                answer: self.answer.text().to_string(),
            }
        } else {
            self.message.clear();
            Outcome::Continue { result }
        };

        Ok(outcome)
    }

    fn validate(&self, dictionary: &Dictionary) -> Result<Word, GuessError> {
        let len = self.current_guess.len();
        if len != WORD_LENGTH {
            return Err(GuessError::InvalidLength { len });
        }
        if !dictionary.contains(&self.current_guess) {
            return Err(GuessError::NotInDictionary(self.current_guess.clone()));
        }
        Word::new(self.current_guess.as_str())
            .map_err(|_| GuessError::NotInDictionary(self.current_guess.clone()))
    }

    /// Shareable summary: header line plus one emoji row per guess
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{GameConfig, Round};
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::from_text("crane\ncrate").unwrap();
    /// let mut round = Round::with_answer(Word::new("crane").unwrap(), GameConfig::default());
    /// round.set_current_guess("crate");
    /// round.submit_guess(&dict).unwrap();
    /// round.set_current_guess("crane");
    /// round.submit_guess(&dict).unwrap();
    /// assert_eq!(round.share_grid(), "2/6\n🟩🟩🟩⬜🟩\n🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn share_grid(&self) -> String {
        let score = match self.state {
            GameState::Lost => "X".to_string(),
            _ => self.attempt_count().to_string(),
        };
        let mut grid = format!("{score}/{}", self.config.max_attempts);
        for row in &self.board {
            grid.push('\n');
            grid.push_str(&result_to_emoji(&row.result));
        }
        grid
    }

    /// The hidden answer; front ends should only reveal it once the round is over
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub fn board(&self) -> &[BoardRow] {
        &self.board
    }

    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.board.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.config.max_attempts
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }
}

fn win_message(attempts: usize) -> &'static str {
    match attempts {
        1 => "Genius!",
        2 => "Magnificent!",
        3 => "Impressive!",
        4 => "Splendid!",
        5 => "Great!",
        _ => "Phew!",
    }
}

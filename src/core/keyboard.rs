//! Keyboard hint accumulation
//!
//! Tracks the best status observed for each letter across a round.

use super::feedback::{GuessResult, LetterStatus};
use super::Word;
use rustc_hash::FxHashMap;

/// Best-known status per letter, used to colour an on-screen keyboard
///
/// A letter's status only moves up along `Absent -> Present -> Correct`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    letters: FxHashMap<u8, LetterStatus>,
}

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one evaluated guess into the hints
    pub fn record(&mut self, guess: &Word, result: &GuessResult) {
        for (&letter, &status) in guess.chars().iter().zip(result) {
            self.upgrade(letter, status);
        }
    }

    fn upgrade(&mut self, letter: u8, status: LetterStatus) {
        self.letters
            .entry(letter)
            .and_modify(|best| *best = (*best).max(status))
            .or_insert(status);
    }

    /// Status for a letter, case-insensitive
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterStatus> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.letters
            .get(&(letter.to_ascii_lowercase() as u8))
            .copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// All recorded letters in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<(char, LetterStatus)> {
        let mut entries: Vec<(char, LetterStatus)> = self
            .letters
            .iter()
            .map(|(&letter, &status)| (char::from(letter), status))
            .collect();
        entries.sort_unstable_by_key(|&(letter, _)| letter);
        entries
    }
}

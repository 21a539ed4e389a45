//! Dictionary of valid words
//!
//! The same list serves as the answer pool and as the set of accepted guesses.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors raised while building a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary contains no valid words")]
    Empty,
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
}

/// Fixed, ordered list of valid words with fast membership lookup
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary, dropping duplicates while keeping first-seen order
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if no words are given.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| index.insert(w.text().to_string()))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words, index })
    }

    /// The dictionary compiled into the binary
    ///
    /// # Panics
    ///
    /// Panics if the embedded list is empty, which the build data rules out.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS)).expect("embedded word list is not empty")
    }

    /// Build from newline-delimited text, skipping invalid lines
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if no line holds a valid word.
    pub fn from_text(content: &str) -> Result<Self, DictionaryError> {
        Self::new(loader::words_from_text(content))
    }

    /// Load from a newline-delimited file
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Io` if the file cannot be read, or
    /// `DictionaryError::Empty` if it holds no valid words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        Self::new(loader::load_from_file(path)?)
    }

    /// Check whether `text` is a valid word, case-insensitive
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        if text.bytes().any(|b| b.is_ascii_uppercase()) {
            self.index.contains(&text.to_ascii_lowercase())
        } else {
            self.index.contains(text)
        }
    }

    /// Pick a word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.words
            .choose(rng)
            .unwrap_or_else(|| unreachable!("dictionary is never empty"))
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; an empty dictionary cannot be constructed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

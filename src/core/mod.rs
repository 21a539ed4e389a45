//! Core rules for the game
//!
//! Words, per-letter feedback, and keyboard hints. Everything here is pure and
//! has no knowledge of rounds or presentation.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{
    FeedbackRule, GuessResult, LetterStatus, evaluate, evaluate_standard, evaluate_with,
    is_solved, result_to_emoji,
};
pub use keyboard::KeyboardHints;
pub use word::{WORD_LENGTH, Word, WordError};

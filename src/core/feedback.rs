//! Per-letter feedback for a guess
//!
//! Each position of a guess receives a [`LetterStatus`]:
//! - `Correct` = letter in the right position (green)
//! - `Present` = letter in the answer, wrong position (yellow)
//! - `Absent` = letter not in the answer (gray)

use super::Word;
use super::word::WORD_LENGTH;
use clap::ValueEnum;

/// Feedback for a single letter position
///
/// Ordered by precedence: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Emoji square for this status
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, one status per letter position
pub type GuessResult = [LetterStatus; WORD_LENGTH];

/// How repeated letters in a guess are scored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FeedbackRule {
    /// Single pass: any letter found elsewhere in the answer is `Present`,
    /// however many times the guess repeats it
    #[default]
    Simple,
    /// Two passes with a letter budget, as in the published game
    #[value(alias = "strict")]
    Standard,
}

impl FeedbackRule {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Standard => "standard",
        }
    }
}

/// Evaluate `guess` against `answer` with the single-pass rule
///
/// # Examples
/// ```
/// use wordle_game::core::{Word, LetterStatus::*, evaluate};
///
/// let guess = Word::new("crate").unwrap();
/// let answer = Word::new("crane").unwrap();
/// assert_eq!(evaluate(&guess, &answer), [Correct, Correct, Correct, Absent, Correct]);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, answer: &Word) -> GuessResult {
    let mut result = [LetterStatus::Absent; WORD_LENGTH];

    for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
        result[i] = if g == a {
            LetterStatus::Correct
        } else if answer.has_letter(g) {
            LetterStatus::Present
        } else {
            LetterStatus::Absent
        };
    }

    result
}

/// Evaluate `guess` against `answer` honouring letter counts
///
/// # Algorithm
/// 1. First pass: mark exact matches and remove them from the available pool
/// 2. Second pass: mark present-but-misplaced letters from the remaining pool
#[must_use]
pub fn evaluate_standard(guess: &Word, answer: &Word) -> GuessResult {
    let mut result = [LetterStatus::Absent; WORD_LENGTH];
    let mut answer_available = answer.char_counts();

    for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
        if g == a {
            result[i] = LetterStatus::Correct;
            if let Some(count) = answer_available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (i, &g) in guess.chars().iter().enumerate() {
        if result[i] == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = answer_available.get_mut(&g)
            && *count > 0
        {
            result[i] = LetterStatus::Present;
            *count -= 1;
        }
    }

    result
}

/// Evaluate with the given rule
#[must_use]
pub fn evaluate_with(rule: FeedbackRule, guess: &Word, answer: &Word) -> GuessResult {
    match rule {
        FeedbackRule::Simple => evaluate(guess, answer),
        FeedbackRule::Standard => evaluate_standard(guess, answer),
    }
}

/// Render a result as emoji squares, e.g. "🟩🟨⬜🟩🟨"
#[must_use]
pub fn result_to_emoji(result: &GuessResult) -> String {
    result.iter().map(|s| s.to_emoji()).collect()
}

/// Check whether every position is `Correct`
#[must_use]
pub fn is_solved(result: &GuessResult) -> bool {
    result.iter().all(|&s| s == LetterStatus::Correct)
}

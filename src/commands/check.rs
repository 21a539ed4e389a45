//! Feedback check command
//!
//! Scores one guess against one answer without starting a round.

use crate::core::{FeedbackRule, GuessResult, Word, evaluate_with, is_solved};
use crate::wordlists::Dictionary;

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub answer: Word,
    pub result: GuessResult,
    pub solved: bool,
}

/// Score `guess` against `answer` with the given rule
///
/// # Errors
///
/// Returns an error if:
/// - Either word is invalid (not 5 letters or contains non-letters)
/// - The guess is not in the dictionary
pub fn check_guess(
    guess: &str,
    answer: &str,
    rule: FeedbackRule,
    dictionary: &Dictionary,
) -> Result<CheckResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let answer = Word::new(answer).map_err(|e| format!("Invalid answer: {e}"))?;

    if !dictionary.contains(guess.text()) {
        return Err(format!("Word '{guess}' not in word list"));
    }

    let result = evaluate_with(rule, &guess, &answer);
    Ok(CheckResult {
        solved: is_solved(&result),
        guess,
        answer,
        result,
    })
}

//! Formatting utilities for terminal output

use crate::core::{KeyboardHints, LetterStatus, WORD_LENGTH};
use crate::game::BoardRow;
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout, one string per row
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// A single letter tile, coloured by its status
#[must_use]
pub fn letter_tile(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match status {
        Some(LetterStatus::Correct) => tile.black().on_green().bold(),
        Some(LetterStatus::Present) => tile.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => tile.white().on_bright_black(),
        None => tile.bold(),
    }
}

/// A submitted guess as a row of coloured tiles
#[must_use]
pub fn format_row(row: &BoardRow) -> String {
    row.guess
        .text()
        .chars()
        .zip(row.result)
        .map(|(letter, status)| letter_tile(letter, Some(status)).to_string())
        .collect()
}

/// An unplayed row, one placeholder tile per letter
#[must_use]
pub fn blank_row() -> ColoredString {
    " _ ".repeat(WORD_LENGTH).bright_black()
}

/// The keyboard with each key coloured by its best-known hint
#[must_use]
pub fn format_keyboard(hints: &KeyboardHints) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|key| letter_tile(key, hints.get(key)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

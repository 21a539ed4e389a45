//! Wordle Game
//!
//! Rules engine and state machine for a single-player word-guessing game,
//! with terminal front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Word, LetterStatus, evaluate};
//!
//! let guess = Word::new("crate").unwrap();
//! let answer = Word::new("crane").unwrap();
//!
//! let result = evaluate(&guess, &answer);
//! assert_eq!(result[3], LetterStatus::Absent);
//! ```

// Core domain types and feedback rules
pub mod core;

// Round state machine
pub mod game;

// Dictionary
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

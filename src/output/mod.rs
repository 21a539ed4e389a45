//! Terminal output formatting
//!
//! Display utilities for the line-based front end and one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_check_result, print_keyboard, print_message, print_round_over,
    print_statistics,
};

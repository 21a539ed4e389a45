//! Display functions for game state and command results

use super::formatters::{
    blank_row, create_progress_bar, format_keyboard, format_row, letter_tile,
};
use crate::core::{GuessResult, Word, result_to_emoji};
use crate::game::{GameState, Round, Statistics};
use colored::Colorize;

/// Print the board: submitted rows, then blank rows for remaining attempts
pub fn print_board(round: &Round) {
    println!();
    for row in round.board() {
        println!("  {}", format_row(row));
    }
    let remaining = round.max_attempts().saturating_sub(round.attempt_count());
    for _ in 0..remaining {
        println!("  {}", blank_row());
    }
    println!();
}

/// Print the keyboard coloured with the round's hints
pub fn print_keyboard(round: &Round) {
    for line in format_keyboard(round.hints()) {
        println!("  {line}");
    }
    println!();
}

/// Print the round message, coloured by how the round stands
pub fn print_message(round: &Round) {
    let message = round.message();
    if message.is_empty() {
        return;
    }
    let styled = match round.state() {
        GameState::Won => message.green().bold(),
        GameState::Lost => message.red().bold(),
        GameState::Playing => message.yellow(),
    };
    println!("{styled}");
}

/// Print the end-of-round summary with the share grid
pub fn print_round_over(round: &Round) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    print_message(round);
    println!("{}", round.share_grid());
    println!("{}", "═".repeat(40).bright_cyan());
}

/// Print session statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:          {}", stats.played);
    println!("   Win %:           {:.0}", stats.win_rate());
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    let max = stats.distribution.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return;
    }
    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    for (i, &count) in stats.distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, max as f64, 20);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
}

/// Print the feedback for a single guess/answer pair
pub fn print_check_result(guess: &Word, answer: &Word, result: &GuessResult) {
    let tiles: String = guess
        .text()
        .chars()
        .zip(result)
        .map(|(letter, &status)| letter_tile(letter, Some(status)).to_string())
        .collect();
    println!(
        "{} vs {}: {tiles} {}",
        guess.text().to_uppercase().bright_white().bold(),
        answer.text().to_uppercase().bright_white().bold(),
        result_to_emoji(result)
    );
}

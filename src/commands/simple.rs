//! Simple line-based play mode
//!
//! Text front end without the TUI: one guess per line.

use crate::game::{Game, GuessError, Outcome};
use crate::output::{print_board, print_keyboard, print_message, print_round_over, print_statistics};
use crate::wordlists::Dictionary;
use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// A line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Stats,
    Guess(String),
}

/// Parse a line; words in the dictionary are guesses even if they spell a command
fn parse_command(line: &str, dictionary: &Dictionary) -> Command {
    let input = line.trim().to_ascii_lowercase();
    if dictionary.contains(&input) {
        return Command::Guess(input);
    }
    match input.as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::NewGame,
        "stats" => Command::Stats,
        _ => Command::Guess(input),
    }
}

/// Run the line-based game loop until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_simple<R: Rng, B: BufRead>(game: &mut Game<R>, mut reader: B) -> Result<()> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║           Wordle - Simple Mode           ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word in {} tries.",
        crate::core::WORD_LENGTH,
        game.round().max_attempts()
    );
    println!("Commands: 'quit' to exit, 'new' for a new word, 'stats' for statistics\n");

    loop {
        let Some(line) = prompt(&mut reader, "Guess")? else {
            return Ok(());
        };

        let guess = match parse_command(&line, game.dictionary()) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::NewGame => {
                game.reset_game();
                println!("\n🔄 New word chosen!\n");
                continue;
            }
            Command::Stats => {
                print_statistics(game.stats());
                continue;
            }
            Command::Guess(guess) => guess,
        };

        if !game.set_current_guess(&guess) {
            println!("❌ Letters only, at most {} of them.\n", crate::core::WORD_LENGTH);
            continue;
        }

        match game.submit_guess() {
            Ok(Outcome::Continue { .. }) => {
                print_board(game.round());
                print_keyboard(game.round());
            }
            Ok(Outcome::Won { .. } | Outcome::Lost { .. }) => {
                print_board(game.round());
                print_round_over(game.round());
                if !play_again(&mut reader)? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                game.reset_game();
                println!("\n🔄 New word chosen!\n");
            }
            Err(GuessError::InvalidLength { .. } | GuessError::NotInDictionary(_)) => {
                print_message(game.round());
                println!();
            }
            Err(GuessError::RoundOver) => game.reset_game(),
        }
    }
}

fn play_again<B: BufRead>(reader: &mut B) -> Result<bool> {
    let answer = prompt(reader, "Play again? (yes/no)")?.unwrap_or_default();
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "yes" | "y"))
}

/// Read one line after printing a prompt; `None` at end of input
fn prompt<B: BufRead>(reader: &mut B, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameState};
    use crate::wordlists::Dictionary;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn game() -> Game {
        // Reroll until the answer is known
        let dict = Dictionary::from_text("crane\nslate\nmouth").unwrap();
        let mut game = Game::seeded(dict, GameConfig::default(), Some(0));
        while game.round().answer().text() != "crane" {
            game.reset_game();
        }
        game
    }

    fn play(game: &mut Game<StdRng>, input: &str) {
        colored::control::set_override(false);
        run_simple(game, Cursor::new(input.to_string())).unwrap();
    }

    #[test]
    fn parse_commands() {
        let dict = Dictionary::from_text("crane\nslate").unwrap();
        assert_eq!(parse_command(" QUIT ", &dict), Command::Quit);
        assert_eq!(parse_command("n", &dict), Command::NewGame);
        assert_eq!(parse_command("stats", &dict), Command::Stats);
        assert_eq!(parse_command("Crane", &dict), Command::Guess("crane".to_string()));
    }

    #[test]
    fn dictionary_word_wins_over_command() {
        let dict = Dictionary::from_text("crane\nstats").unwrap();
        assert_eq!(parse_command("STATS", &dict), Command::Guess("stats".to_string()));
        assert_eq!(parse_command("quit", &dict), Command::Quit);
    }

    #[test]
    fn stats_is_guessable_when_listed() {
        let dict = Dictionary::from_text("crane\nstats").unwrap();
        let mut g = Game::seeded(dict, GameConfig::default(), Some(3));
        while g.round().answer().text() != "stats" {
            g.reset_game();
        }
        play(&mut g, "stats\nno\n");
        assert_eq!(g.round().state(), GameState::Won);
        assert_eq!(g.stats().won, 1);
    }

    #[test]
    fn immediate_quit() {
        let mut g = game();
        play(&mut g, "quit\n");
        assert_eq!(g.round().attempt_count(), 0);
    }

    #[test]
    fn end_of_input_stops_loop() {
        let mut g = game();
        play(&mut g, "slate\n");
        assert_eq!(g.round().attempt_count(), 1);
    }

    #[test]
    fn invalid_inputs_do_not_count() {
        let mut g = game();
        play(&mut g, "cr4ne\ncranes\ncra\nzzzzz\nquit\n");
        assert_eq!(g.round().attempt_count(), 0);
        assert_eq!(g.round().message(), "Not in word list");
    }

    #[test]
    fn win_then_decline_replay() {
        let mut g = game();
        play(&mut g, "slate\nCRANE\nno\n");
        assert_eq!(g.round().state(), GameState::Won);
        assert_eq!(g.stats().won, 1);
    }

    #[test]
    fn win_then_replay_starts_new_round() {
        let mut g = game();
        play(&mut g, "crane\nyes\nquit\n");
        assert_eq!(g.round().state(), GameState::Playing);
        assert_eq!(g.round().attempt_count(), 0);
        assert_eq!(g.stats().played, 1);
    }

    #[test]
    fn lose_after_six_misses() {
        let mut g = game();
        play(&mut g, "slate\nmouth\nslate\nmouth\nslate\nmouth\nno\n");
        assert_eq!(g.round().state(), GameState::Lost);
        assert_eq!(g.stats().played, 1);
        assert_eq!(g.stats().won, 0);
    }

    #[test]
    fn new_command_resets_round() {
        let mut g = game();
        play(&mut g, "slate\nnew\nstats\nquit\n");
        assert_eq!(g.round().attempt_count(), 0);
    }
}

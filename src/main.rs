//! Wordle - CLI
//!
//! Word-guessing game with TUI and simple line modes.

use anyhow::Result;
use clap::{Parser, Subcommand, builder::RangedU64ValueParser};
use log::info;
use std::io;
use wordle_game::{
    commands::{check_guess, run_simple},
    core::FeedbackRule,
    game::{DEFAULT_MAX_ATTEMPTS, Game, GameConfig, MAX_ATTEMPTS_LIMIT},
    output::print_check_result,
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded list) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Seed for answer selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Attempts allowed per round (1-20)
    #[arg(
        short = 'm',
        long,
        global = true,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_ATTEMPTS_LIMIT as u64)
    )]
    max_attempts: usize,

    /// Feedback rule for repeated letters
    #[arg(short, long, global = true, value_enum, default_value_t = FeedbackRule::Simple)]
    rule: FeedbackRule,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Show the feedback a guess would get against an answer
    Check {
        /// The guessed word
        guess: String,

        /// The answer to compare against
        answer: String,
    },

    /// Show dictionary information
    Words {
        /// Number of sample words to list
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    let dictionary = match wordlist_mode {
        "all" => Dictionary::embedded(),
        path => Dictionary::from_file(path)?,
    };
    info!("loaded {} words from '{wordlist_mode}'", dictionary.len());
    Ok(dictionary)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let config = GameConfig::new(cli.max_attempts, cli.rule);

    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(dictionary, config, cli.seed),
        Commands::Simple => run_simple_command(dictionary, config, cli.seed),
        Commands::Check { guess, answer } => {
            run_check_command(&guess, &answer, config.rule, &dictionary)
        }
        Commands::Words { count } => {
            run_words_command(&dictionary, count);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: Dictionary, config: GameConfig, seed: Option<u64>) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let game = Game::seeded(dictionary, config, seed);
    run_tui(App::new(game))
}

fn run_simple_command(dictionary: Dictionary, config: GameConfig, seed: Option<u64>) -> Result<()> {
    let mut game = Game::seeded(dictionary, config, seed);
    run_simple(&mut game, io::stdin().lock())
}

fn run_check_command(
    guess: &str,
    answer: &str,
    rule: FeedbackRule,
    dictionary: &Dictionary,
) -> Result<()> {
    let check = check_guess(guess, answer, rule, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&check.guess, &check.answer, &check.result);
    if check.solved {
        println!("Solved!");
    }
    Ok(())
}

fn run_words_command(dictionary: &Dictionary, count: usize) {
    println!("{} words in dictionary", dictionary.len());
    for word in dictionary.words().iter().take(count) {
        println!("  {word}");
    }
    if dictionary.len() > count {
        println!("  ...and {} more", dictionary.len() - count);
    }
}

// Integration tests for the wordle game
// These tests drive whole rounds through the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_game::core::LetterStatus::{Absent, Correct, Present};
use wordle_game::core::{FeedbackRule, LetterStatus, Word, evaluate};
use wordle_game::game::{Game, GameConfig, GameState, GuessError, Outcome, Round};
use wordle_game::wordlists::Dictionary;

const WORDS: &str = "crane\ncrate\nslate\nlucky\nmouth\nadopt\nspeed\nfight\nworld\nplain";

fn dictionary() -> Dictionary {
    Dictionary::from_text(WORDS).unwrap()
}

fn fixed_round(answer: &str) -> Round {
    Round::with_answer(Word::new(answer).unwrap(), GameConfig::default())
}

fn type_and_submit(round: &mut Round, dict: &Dictionary, guess: &str) -> Result<Outcome, GuessError> {
    for ch in guess.chars() {
        round.append_letter(ch);
    }
    round.submit_guess(dict)
}

#[test]
fn test_feedback_examples() {
    let crane = Word::new("crane").unwrap();
    let crate_ = Word::new("crate").unwrap();
    assert_eq!(
        evaluate(&crate_, &crane),
        [Correct, Correct, Correct, Absent, Correct]
    );

    let lucky = Word::new("lucky").unwrap();
    let kulcy = Word::new("kulcy").unwrap();
    let result = evaluate(&kulcy, &lucky);
    assert!(result.iter().all(|&s| s != Absent));
    assert_eq!(result, [Present, Correct, Present, Present, Correct]);
}

#[test]
fn test_feedback_length_and_self_match_over_dictionary() {
    let dict = dictionary();
    for answer in dict.words() {
        assert!(evaluate(answer, answer).iter().all(|&s| s == Correct));
        for guess in dict.words() {
            let result = evaluate(guess, answer);
            assert_eq!(result.len(), answer.text().len());
            for (i, &ch) in guess.chars().iter().enumerate() {
                if !answer.has_letter(ch) {
                    assert_eq!(result[i], Absent);
                }
            }
        }
    }
}

#[test]
fn test_full_round_typed_on_virtual_keyboard() {
    let dict = dictionary();
    let mut round = fixed_round("plain");

    assert!(matches!(
        type_and_submit(&mut round, &dict, "CRANE"),
        Ok(Outcome::Continue { .. })
    ));
    assert!(matches!(
        type_and_submit(&mut round, &dict, "slate"),
        Ok(Outcome::Continue { .. })
    ));
    let outcome = type_and_submit(&mut round, &dict, "plain").unwrap();

    assert_eq!(outcome, Outcome::Won { result: [Correct; 5], attempts: 3 });
    assert_eq!(round.state(), GameState::Won);
    assert_eq!(round.attempt_count(), round.board().len());
    assert_eq!(round.hints().get('p'), Some(Correct));
    assert_eq!(round.hints().get('c'), Some(Absent));
    assert_eq!(round.message(), "Impressive!");
}

#[test]
fn test_rejections_leave_round_untouched() {
    let dict = dictionary();
    let mut round = fixed_round("crane");

    assert_eq!(
        type_and_submit(&mut round, &dict, "cran"),
        Err(GuessError::InvalidLength { len: 4 })
    );
    round.set_current_guess("");
    assert_eq!(
        type_and_submit(&mut round, &dict, "qqqqq"),
        Err(GuessError::NotInDictionary("qqqqq".to_string()))
    );

    assert_eq!(round.attempt_count(), 0);
    assert!(round.board().is_empty());
    assert!(round.hints().is_empty());
    assert_eq!(round.state(), GameState::Playing);
}

#[test]
fn test_loss_reveals_answer_and_freezes() {
    let dict = dictionary();
    let mut round = fixed_round("crane");
    for guess in ["slate", "lucky", "mouth", "adopt", "speed", "fight"] {
        round.set_current_guess(guess);
        round.submit_guess(&dict).unwrap();
    }

    assert_eq!(round.state(), GameState::Lost);
    assert_eq!(round.message(), "The word was CRANE");
    assert!(round.share_grid().starts_with("X/6\n"));

    let hints_before = round.hints().clone();
    assert!(!round.set_current_guess("crane"));
    assert_eq!(round.submit_guess(&dict), Err(GuessError::RoundOver));
    assert_eq!(round.attempt_count(), 6);
    assert_eq!(round.hints(), &hints_before);
}

#[test]
fn test_hints_monotonic_across_round() {
    let dict = dictionary();
    let mut round = fixed_round("crate");
    let mut seen: Vec<(char, LetterStatus)> = Vec::new();

    for guess in ["crane", "slate", "adopt", "speed", "world"] {
        round.set_current_guess(guess);
        round.submit_guess(&dict).unwrap();
        for &(letter, before) in &seen {
            let now = round.hints().get(letter).unwrap();
            assert!(now >= before, "{letter} regressed from {before:?} to {now:?}");
        }
        seen = round.hints().sorted();
    }
}

#[test]
fn test_game_controller_multi_round_session() {
    let mut game = Game::new(dictionary(), GameConfig::default(), StdRng::seed_from_u64(2024));

    for _ in 0..3 {
        let answer = game.round().answer().text().to_string();
        assert!(game.set_current_guess(&answer));
        assert!(matches!(game.submit_guess(), Ok(Outcome::Won { attempts: 1, .. })));
        game.reset_game();

        let round = game.round();
        assert_eq!(round.attempt_count(), 0);
        assert!(round.board().is_empty());
        assert_eq!(round.state(), GameState::Playing);
        assert!(round.hints().is_empty());
    }

    let stats = game.stats();
    assert_eq!(stats.played, 3);
    assert_eq!(stats.won, 3);
    assert_eq!(stats.max_streak, 3);
    assert_eq!(stats.distribution, vec![3]);
}

#[test]
fn test_same_seed_replays_same_answers() {
    let mut a = Game::seeded(dictionary(), GameConfig::default(), Some(77));
    let mut b = Game::seeded(dictionary(), GameConfig::default(), Some(77));
    for _ in 0..5 {
        assert_eq!(a.round().answer(), b.round().answer());
        a.reset_game();
        b.reset_game();
    }
}

#[test]
fn test_standard_rule_round() {
    let dict = dictionary();
    let config = GameConfig::new(6, FeedbackRule::Standard);
    let mut round = Round::with_answer(Word::new("crane").unwrap(), config);
    round.set_current_guess("speed");
    let outcome = round.submit_guess(&dict).unwrap();
    assert_eq!(outcome.result(), &[Absent, Absent, Present, Absent, Absent]);
}

#[test]
fn test_custom_wordlist_file_to_game() {
    use std::fs;

    let path = std::env::temp_dir().join("wordle_game_custom_wordlist.txt");
    fs::write(&path, "apple\ngrape\nlemon\nmelon\n").unwrap();
    let dict = Dictionary::from_file(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(dict.len(), 4);
    let mut game = Game::seeded(dict, GameConfig::default(), Some(1));
    let answer = game.round().answer().text().to_string();
    assert!(["apple", "grape", "lemon", "melon"].contains(&answer.as_str()));

    game.set_current_guess(&answer);
    game.submit_guess().unwrap();
    assert_eq!(game.round().state(), GameState::Won);
}

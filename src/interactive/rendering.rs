//! TUI rendering with ratatui
//!
//! Draws the board, keyboard hints, and status from a round snapshot.

use super::app::App;
use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::{GameState, Round};
use crate::output::formatters::KEYBOARD_ROWS;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let round = app.game.round();
    let board_height = u16::try_from(round.max_attempts())
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(board_height), // Board
            Constraint::Length(5),            // Keyboard
            Constraint::Length(3),            // Message
            Constraint::Min(3),               // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, round, chunks[1]);
    render_keyboard(f, round, chunks[2]);
    render_message(f, round, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Tile style for a status; `None` is an unscored letter
fn tile_style(status: Option<LetterStatus>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match status {
        Some(LetterStatus::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(LetterStatus::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(LetterStatus::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn tile(letter: char, status: Option<LetterStatus>) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        tile_style(status),
    )
}

fn board_lines(round: &Round) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for row in round.board() {
        let spans: Vec<Span> = row
            .guess
            .text()
            .chars()
            .zip(row.result)
            .flat_map(|(letter, status)| [tile(letter, Some(status)), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
    }

    if round.state() == GameState::Playing {
        let typed = round.current_guess();
        let spans: Vec<Span> = typed
            .chars()
            .chain(std::iter::repeat('_'))
            .take(WORD_LENGTH)
            .flat_map(|letter| [tile(letter, None), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
    }

    while lines.len() < round.max_attempts() {
        let blank = Style::default().fg(Color::DarkGray);
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| [Span::styled(" · ", blank), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
    }

    lines
}

fn render_board(f: &mut Frame, round: &Round, area: Rect) {
    let title = format!(" {}/{} ", round.attempt_count(), round.max_attempts());
    let board = Paragraph::new(board_lines(round))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, round: &Round, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|key| tile(key, round.hints().get(key)))
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_message(f: &mut Frame, round: &Round, area: Rect) {
    let (text, color) = match round.state() {
        GameState::Won => (
            format!("{}  Enter: new word | q: quit", round.message()),
            Color::Green,
        ),
        GameState::Lost => (
            format!("{}  Enter: new word | q: quit", round.message()),
            Color::Red,
        ),
        GameState::Playing => (round.message().to_string(), Color::Yellow),
    };

    let message = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(message, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats = app.game.stats();
    let stats_text = format!(
        "Played: {} | Win: {:.0}% | Streak: {}",
        stats.played,
        stats.win_rate(),
        stats.current_streak
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let config = app.game.config();
    let rule_text = format!(
        "Words: {} | Feedback: {}",
        app.game.dictionary().len(),
        config.rule.name()
    );
    f.render_widget(
        Paragraph::new(rule_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help = Paragraph::new("Enter: Submit | Ctrl-N: New | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameConfig;
    use crate::wordlists::Dictionary;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn board_fills_every_attempt_row() {
        let round = Round::with_answer(Word::new("crane").unwrap(), GameConfig::default());
        let lines = board_lines(&round);
        assert_eq!(lines.len(), 6);
        assert_eq!(line_text(&lines[0]), " _   _   _   _   _  ");
    }

    #[test]
    fn board_shows_submitted_and_typed_rows() {
        let dict = Dictionary::from_text("crane\nslate").unwrap();
        let mut round = Round::with_answer(Word::new("crane").unwrap(), GameConfig::default());
        round.set_current_guess("slate");
        round.submit_guess(&dict).unwrap();
        round.append_letter('c');

        let lines = board_lines(&round);
        assert_eq!(lines.len(), 6);
        assert_eq!(line_text(&lines[0]), " S   L   A   T   E  ");
        assert_eq!(line_text(&lines[1]), " C   _   _   _   _  ");
        assert_eq!(lines[0].spans[4].style.bg, Some(Color::Green));
    }

    #[test]
    fn finished_board_has_no_input_row() {
        let dict = Dictionary::from_text("crane").unwrap();
        let mut round = Round::with_answer(Word::new("crane").unwrap(), GameConfig::default());
        round.set_current_guess("crane");
        round.submit_guess(&dict).unwrap();

        let lines = board_lines(&round);
        assert_eq!(lines.len(), 6);
        assert!(line_text(&lines[1]).contains('·'));
    }

    #[test]
    fn ui_draws_with_largest_attempt_count() {
        use crate::game::{Game, MAX_ATTEMPTS_LIMIT};
        use ratatui::{Terminal, backend::TestBackend};

        let dict = Dictionary::from_text("crane\nslate").unwrap();
        let config = GameConfig::new(65534, crate::core::FeedbackRule::Simple);
        let app = App::new(Game::seeded(dict, config, Some(1)));
        assert_eq!(app.game.round().max_attempts(), MAX_ATTEMPTS_LIMIT);
        assert_eq!(board_lines(app.game.round()).len(), MAX_ATTEMPTS_LIMIT);

        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
    }
}

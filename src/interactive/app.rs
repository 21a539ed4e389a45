//! TUI application state and key handling

use crate::game::Game;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
///
/// Holds the game controller; everything drawn comes from `game.round()`.
pub struct App<R: Rng = StdRng> {
    pub game: Game<R>,
    pub should_quit: bool,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(game: Game<R>) -> Self {
        Self {
            game,
            should_quit: false,
        }
    }

    /// Translate a key press into a game intent
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.game.reset_game(),
            KeyCode::Esc => self.should_quit = true,
            _ if self.game.round().state().is_over() => self.handle_round_over(key.code),
            KeyCode::Char(c) => {
                self.game.append_letter(c);
            }
            KeyCode::Backspace => {
                self.game.delete_last_letter();
            }
            KeyCode::Enter => {
                if let Err(err) = self.game.submit_guess() {
                    debug!("submission rejected: {err}");
                }
            }
            _ => {}
        }
    }

    fn handle_round_over(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char('n') => self.game.reset_game(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

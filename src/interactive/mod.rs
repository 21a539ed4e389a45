//! Interactive terminal UI
//!
//! A ratatui front end that renders the round snapshot and forwards key presses
//! to the game controller.

mod app;
mod rendering;

pub use app::{App, run_tui};

//! Keyboard Input Handling Module
//!
//! The screen's keyboard surface is tiny: quit, plus a shortcut that flips
//! the appearance mode without reaching for the mouse.

use crate::app::App;
use ratatui::crossterm::event::{KeyCode, KeyEvent};

/// Processes one key event. Returns `true` when the application should
/// quit.
pub fn handle_key_events(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('d') | KeyCode::Char('D') => {
            app.toggle_appearance();
            false
        }
        _ => false,
    }
}

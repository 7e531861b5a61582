//! Key mapping from terminal events to player intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_chase_types::Direction;

/// Map keyboard input to a player move.
pub fn handle_key_event(key: KeyEvent) -> Option<Direction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Direction::Right),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

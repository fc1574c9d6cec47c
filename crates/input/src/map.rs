//! Key mapping from terminal events to session commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a command.
///
/// Soft drop is not mapped here; it is a held state, see
/// [`crate::latch::SoftDropLatch`] and [`is_soft_drop_key`].
pub fn map_key_press(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(Command::MoveRight),
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(Command::RotateCw),
        KeyCode::Char('r' | 'R') => Some(Command::Restart),
        _ => None,
    }
}

/// Keys that hold soft drop while down.
pub fn is_soft_drop_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S'))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

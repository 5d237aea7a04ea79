//! Key mapping from terminal events to board commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key press decoded into a board command.
///
/// Cursor movement is an input-layer concern; only `Flip` and `Restart`
/// reach the game core (as `GameAction`s built by the runner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    /// Flip the tile under the cursor face-up.
    Flip,
    /// Start a fresh round.
    Restart,
}

/// Map keyboard input to board commands.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyCommand> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(KeyCommand::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(KeyCommand::CursorRight)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(KeyCommand::CursorUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(KeyCommand::CursorDown)
        }

        // Actions
        KeyCode::Char(' ') | KeyCode::Enter => Some(KeyCommand::Flip),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyCommand::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

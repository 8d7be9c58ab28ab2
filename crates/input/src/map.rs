//! Key mapping from terminal events to driver actions.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the driver to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a command to the engine
    Game(Command),
    /// Step back one accepted command
    Undo,
    /// Start a new game
    Restart,
}

/// Map keyboard input to driver actions.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyAction> {
    command_for_key(key).map(KeyAction::Game).or(match key.code {
        KeyCode::Char('u') | KeyCode::Char('U') => Some(KeyAction::Undo),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyAction::Restart),
        _ => None,
    })
}

/// Map keyboard input to engine commands.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Right)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Command::Rotate),

        // Drop one row (or lock)
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S')
        | KeyCode::Char(' ') => Some(Command::Drop),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Left)),
            Some(Command::Left)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Right)),
            Some(Command::Right)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('H'))),
            Some(Command::Left)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('d'))),
            Some(Command::Right)
        );
    }

    #[test]
    fn test_rotate_and_drop_keys() {
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Up)),
            Some(Command::Rotate)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char('w'))),
            Some(Command::Rotate)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Down)),
            Some(Command::Drop)
        );
        assert_eq!(
            command_for_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(Command::Drop)
        );
    }

    #[test]
    fn test_driver_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('u'))),
            Some(KeyAction::Undo)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(KeyAction::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(KeyAction::Game(Command::Left))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}

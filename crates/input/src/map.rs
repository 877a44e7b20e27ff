//! Key mapping from terminal events to game commands and client actions.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// A command for the game core
    Game(Command),
    TogglePause,
    Restart,
    Quit,
}

/// Map keyboard input to an action. Unbound keys yield `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    if is_quit(key) {
        return Some(InputAction::Quit);
    }

    let command = match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Command::MoveLeft,
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Command::MoveRight,
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Command::SoftDrop,
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W' | 'x' | 'X') => {
            Command::RotateClockwise
        }
        KeyCode::Char(' ') => Command::HardDrop,

        KeyCode::Char('p' | 'P') => return Some(InputAction::TogglePause),
        KeyCode::Char('r' | 'R') => return Some(InputAction::Restart),
        _ => return None,
    };
    Some(InputAction::Game(command))
}

fn is_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Option<InputAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        for code in [KeyCode::Left, KeyCode::Char('h'), KeyCode::Char('A')] {
            assert_eq!(key(code), Some(InputAction::Game(Command::MoveLeft)));
        }
        for code in [KeyCode::Right, KeyCode::Char('L'), KeyCode::Char('d')] {
            assert_eq!(key(code), Some(InputAction::Game(Command::MoveRight)));
        }
        for code in [KeyCode::Down, KeyCode::Char('j'), KeyCode::Char('S')] {
            assert_eq!(key(code), Some(InputAction::Game(Command::SoftDrop)));
        }
    }

    #[test]
    fn test_rotation_and_drop_keys() {
        for code in [KeyCode::Up, KeyCode::Char('k'), KeyCode::Char('W'), KeyCode::Char('x')] {
            assert_eq!(key(code), Some(InputAction::Game(Command::RotateClockwise)));
        }
        assert_eq!(
            key(KeyCode::Char(' ')),
            Some(InputAction::Game(Command::HardDrop))
        );
    }

    #[test]
    fn test_client_keys() {
        assert_eq!(key(KeyCode::Char('p')), Some(InputAction::TogglePause));
        assert_eq!(key(KeyCode::Char('R')), Some(InputAction::Restart));
        assert_eq!(key(KeyCode::Char('z')), None);
        assert_eq!(key(KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key(KeyCode::Char('q')), Some(InputAction::Quit));
        assert_eq!(key(KeyCode::Esc), Some(InputAction::Quit));
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputAction::Quit)
        );
        assert_eq!(key(KeyCode::Char('c')), None);
    }
}

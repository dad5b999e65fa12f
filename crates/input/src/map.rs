//! Key mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::Command;

/// What a key press asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Forward to the engine
    Game(Command),
    /// Stop or resume delivering ticks
    Pause,
    Restart,
}

/// Letter bindings; matched case-insensitively.
///
/// Three layouts share the same commands: vi (`hjkl`), WASD, and the arrows
/// handled in [`handle_key_event`].
const LETTERS: [(char, InputAction); 10] = [
    ('h', InputAction::Game(Command::MoveLeft)),
    ('a', InputAction::Game(Command::MoveLeft)),
    ('l', InputAction::Game(Command::MoveRight)),
    ('d', InputAction::Game(Command::MoveRight)),
    ('j', InputAction::Game(Command::SoftDrop)),
    ('s', InputAction::Game(Command::SoftDrop)),
    ('k', InputAction::Game(Command::Rotate)),
    ('w', InputAction::Game(Command::Rotate)),
    ('p', InputAction::Pause),
    ('r', InputAction::Restart),
];

/// Map a key press to a game action.
///
/// Release and repeat events map to nothing, so holding a key moves once.
pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let command = match key.code {
        KeyCode::Left => Command::MoveLeft,
        KeyCode::Right => Command::MoveRight,
        KeyCode::Down => Command::SoftDrop,
        KeyCode::Up => Command::Rotate,
        KeyCode::Char(c) => {
            let c = c.to_ascii_lowercase();
            return LETTERS
                .iter()
                .find(|(letter, _)| *letter == c)
                .map(|&(_, action)| action);
        }
        _ => return None,
    };
    Some(InputAction::Game(command))
}

/// `q`, Esc or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char(c) => c.eq_ignore_ascii_case(&'q'),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> Option<InputAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn arrows_and_letters_agree() {
        let layouts = [
            (KeyCode::Left, 'h', 'a', Command::MoveLeft),
            (KeyCode::Right, 'l', 'd', Command::MoveRight),
            (KeyCode::Down, 'j', 's', Command::SoftDrop),
            (KeyCode::Up, 'k', 'w', Command::Rotate),
        ];
        for (arrow, vi, wasd, command) in layouts {
            let expected = Some(InputAction::Game(command));
            assert_eq!(press(arrow), expected);
            assert_eq!(press(KeyCode::Char(vi)), expected);
            assert_eq!(press(KeyCode::Char(wasd)), expected);
            assert_eq!(press(KeyCode::Char(wasd.to_ascii_uppercase())), expected);
        }
    }

    #[test]
    fn shell_keys() {
        assert_eq!(press(KeyCode::Char('p')), Some(InputAction::Pause));
        assert_eq!(press(KeyCode::Char('R')), Some(InputAction::Restart));
        assert_eq!(press(KeyCode::Char(' ')), None);
        assert_eq!(press(KeyCode::Enter), None);
    }

    #[test]
    fn release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(release), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Direction;

/// What a key press asks the client to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Quit,
}

pub fn action_for_key(key: &KeyEvent) -> Option<Action> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => Some(Action::Quit),
            'w' => Some(Action::Move(Direction::Up)),
            's' => Some(Action::Move(Direction::Down)),
            'a' => Some(Action::Move(Direction::Left)),
            'd' => Some(Action::Move(Direction::Right)),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_wasd_moves() {
        assert_eq!(action_for_key(&press(KeyCode::Char('w'))), Some(Action::Move(Direction::Up)));
        assert_eq!(action_for_key(&press(KeyCode::Char('a'))), Some(Action::Move(Direction::Left)));
        assert_eq!(action_for_key(&press(KeyCode::Char('S'))), Some(Action::Move(Direction::Down)));
        assert_eq!(action_for_key(&press(KeyCode::Char('D'))), Some(Action::Move(Direction::Right)));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for_key(&press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(action_for_key(&press(KeyCode::Char('Q'))), Some(Action::Quit));
        assert_eq!(action_for_key(&press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            action_for_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(action_for_key(&press(KeyCode::Char('x'))), None);
        assert_eq!(action_for_key(&press(KeyCode::Up)), None);
        assert_eq!(action_for_key(&press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Char('w'));
        key.kind = KeyEventKind::Release;
        assert_eq!(action_for_key(&key), None);
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction::{self, *};

/// What a key press means to the game, independent of the terminal backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Dir(Direction),
    Select,
    Pause,
    Quit,
    Other,
}

impl From<KeyEvent> for Key {
    fn from(ev: KeyEvent) -> Self {
        if is_ctrl_c(&ev) {
            return Key::Quit;
        }

        match ev.code {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Key::Dir(Up),
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Key::Dir(Left),
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Key::Dir(Down),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Key::Dir(Right),
            KeyCode::Char('q') | KeyCode::Char('Q') => Key::Quit,
            KeyCode::Enter | KeyCode::Char(' ') => Key::Select,
            KeyCode::Esc => Key::Pause,
            _ => Key::Other,
        }
    }
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Key {
        Key::from(KeyEvent { code, modifiers: KeyModifiers::NONE })
    }

    #[test]
    fn wasd_and_arrows_steer() {
        assert_eq!(key(KeyCode::Char('w')), Key::Dir(Up));
        assert_eq!(key(KeyCode::Up), Key::Dir(Up));
        assert_eq!(key(KeyCode::Char('a')), Key::Dir(Left));
        assert_eq!(key(KeyCode::Down), Key::Dir(Down));
        assert_eq!(key(KeyCode::Char('d')), Key::Dir(Right));
    }

    #[test]
    fn control_keys() {
        assert_eq!(Key::from(KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL }), Key::Quit);
        assert_eq!(key(KeyCode::Char('c')), Key::Other);
        assert_eq!(key(KeyCode::Char('q')), Key::Quit);
        assert_eq!(key(KeyCode::Esc), Key::Pause);
        assert_eq!(key(KeyCode::Enter), Key::Select);
        assert_eq!(key(KeyCode::Tab), Key::Other);
    }
}

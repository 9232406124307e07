//! Input decoding: raw keys to semantic actions

use crate::core::letter::as_letter;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key means to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Letter(char),
    Backspace,
    Enter,
    /// Any other key; swallowed so it never reaches a cell
    Suppress,
}

impl Action {
    /// Decode a terminal key event
    #[must_use]
    pub fn from_key_event(key: &KeyEvent) -> Self {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return Self::Suppress;
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Self::Letter(c),
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Enter => Self::Enter,
            _ => Self::Suppress,
        }
    }

    /// Decode a key name as typed in line mode ("a", "Backspace", "Enter")
    ///
    /// # Examples
    /// ```
    /// use wordgrid::game::Action;
    ///
    /// assert_eq!(Action::from_key_name("q"), Action::Letter('q'));
    /// assert_eq!(Action::from_key_name("Enter"), Action::Enter);
    /// assert_eq!(Action::from_key_name("?"), Action::Suppress);
    /// ```
    #[must_use]
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Backspace" => Self::Backspace,
            "Enter" => Self::Enter,
            key => as_letter(key).map_or(Self::Suppress, Self::Letter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letters_decode_in_both_cases() {
        assert_eq!(
            Action::from_key_event(&key(KeyCode::Char('a'))),
            Action::Letter('a')
        );
        assert_eq!(
            Action::from_key_event(&KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Action::Letter('A')
        );
    }

    #[test]
    fn editing_keys_decode() {
        assert_eq!(
            Action::from_key_event(&key(KeyCode::Backspace)),
            Action::Backspace
        );
        assert_eq!(Action::from_key_event(&key(KeyCode::Enter)), Action::Enter);
    }

    #[test]
    fn everything_else_is_suppressed() {
        for code in [
            KeyCode::Char('1'),
            KeyCode::Char(' '),
            KeyCode::Char('é'),
            KeyCode::Tab,
            KeyCode::Left,
            KeyCode::Delete,
            KeyCode::F(5),
        ] {
            assert_eq!(Action::from_key_event(&key(code)), Action::Suppress);
        }
    }

    #[test]
    fn modified_letters_are_suppressed() {
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(Action::from_key_event(&ctrl_a), Action::Suppress);
    }

    #[test]
    fn key_names_decode() {
        assert_eq!(Action::from_key_name("Backspace"), Action::Backspace);
        assert_eq!(Action::from_key_name("Z"), Action::Letter('Z'));
        assert_eq!(Action::from_key_name("Shift"), Action::Suppress);
        assert_eq!(Action::from_key_name("5"), Action::Suppress);
    }
}

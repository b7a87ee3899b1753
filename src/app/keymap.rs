//! Key translation for the globber.
//!
//! Turns crossterm key events into the terminal independent [Input] the
//! navigation state machine consumes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One keystroke, reduced to what navigation cares about.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Up,
    Down,
    Left,
    Right,
    Backspace,
    Enter,
    Tab,
    Esc,
    /// Ctrl+C
    Interrupt,
    Char(char),
    Other,
}

/// Maps a crossterm key event to an [Input].
pub fn input_from_key(key: KeyEvent) -> Input {
    match key.code {
        KeyCode::Up => Input::Up,
        KeyCode::Down => Input::Down,
        KeyCode::Left => Input::Left,
        KeyCode::Right => Input::Right,
        KeyCode::Backspace | KeyCode::Delete => Input::Backspace,
        KeyCode::Enter => Input::Enter,
        KeyCode::Tab => Input::Tab,
        KeyCode::Esc => Input::Esc,
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => match c {
            'h' | 'H' => Input::Backspace,
            'c' | 'C' => Input::Interrupt,
            _ => Input::Other,
        },
        // DEL and BS as raw characters, as sent by some terminals.
        KeyCode::Char('\u{7f}') | KeyCode::Char('\u{8}') => Input::Backspace,
        KeyCode::Char(c) if c.is_control() => Input::Other,
        KeyCode::Char(c) => Input::Char(c),
        _ => Input::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn arrows_and_editing_keys() {
        assert_eq!(input_from_key(key(KeyCode::Up, KeyModifiers::NONE)), Input::Up);
        assert_eq!(input_from_key(key(KeyCode::Right, KeyModifiers::NONE)), Input::Right);
        assert_eq!(input_from_key(key(KeyCode::Backspace, KeyModifiers::NONE)), Input::Backspace);
        assert_eq!(input_from_key(key(KeyCode::Enter, KeyModifiers::NONE)), Input::Enter);
    }

    #[test]
    fn backspace_control_codes() {
        assert_eq!(input_from_key(key(KeyCode::Char('h'), KeyModifiers::CONTROL)), Input::Backspace);
        assert_eq!(input_from_key(key(KeyCode::Char('\u{7f}'), KeyModifiers::NONE)), Input::Backspace);
        assert_eq!(input_from_key(key(KeyCode::Char('\u{8}'), KeyModifiers::NONE)), Input::Backspace);
    }

    #[test]
    fn printable_characters_pass_through() {
        assert_eq!(input_from_key(key(KeyCode::Char('*'), KeyModifiers::NONE)), Input::Char('*'));
        assert_eq!(input_from_key(key(KeyCode::Char('A'), KeyModifiers::SHIFT)), Input::Char('A'));
        assert_eq!(input_from_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Input::Interrupt);
        assert_eq!(input_from_key(key(KeyCode::Char('x'), KeyModifiers::CONTROL)), Input::Other);
    }
}

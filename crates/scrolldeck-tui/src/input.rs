use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Advance the deck, same as scrolling down
    Forward,
    /// Move the deck back, same as scrolling up
    Backward,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::Quit,

        // Forward navigation
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::Forward,
        (KeyCode::Down, KeyModifiers::NONE) => Action::Forward,
        (KeyCode::PageDown, KeyModifiers::NONE) => Action::Forward,
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::Forward,
        (KeyCode::Enter, KeyModifiers::NONE) => Action::Forward,

        // Backward navigation
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::Backward,
        (KeyCode::Up, KeyModifiers::NONE) => Action::Backward,
        (KeyCode::PageUp, KeyModifiers::NONE) => Action::Backward,
        (KeyCode::Backspace, KeyModifiers::NONE) => Action::Backward,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('j'), KeyModifiers::NONE)), Action::Forward);
        assert_eq!(handle_key_event(key(KeyCode::Up, KeyModifiers::NONE)), Action::Backward);
        assert_eq!(handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE)), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char('x'), KeyModifiers::NONE)), Action::None);
    }
}

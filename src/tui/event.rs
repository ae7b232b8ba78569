use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Message};

/// Map key events to messages based on current app state
pub fn handle_key(key: KeyEvent, app: &App) -> Option<Message> {
    // Some terminals report releases too
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    // If help is shown, any key closes it
    if app.show_help {
        return Some(Message::ToggleHelp);
    }

    match key.code {
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Message::Quit),

        KeyCode::Tab | KeyCode::Right => Some(Message::FocusNext),
        KeyCode::BackTab | KeyCode::Left => Some(Message::FocusPrev),
        KeyCode::Char(c) if c.is_ascii_digit() => Some(Message::InputChar(c)),
        KeyCode::Backspace => Some(Message::DeleteChar),
        KeyCode::Delete => Some(Message::ClearField),

        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Message::StartOrReset)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Message::Reset),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarm::SilentAlarm;
    use crate::config::Config;
    use crossterm::event::KeyEventState;

    fn app() -> App {
        App::new(&Config::default(), Box::new(SilentAlarm))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_go_to_input() {
        let app = app();
        assert_eq!(
            handle_key(press(KeyCode::Char('7')), &app),
            Some(Message::InputChar('7'))
        );
        assert_eq!(handle_key(press(KeyCode::Char('x')), &app), None);
    }

    #[test]
    fn start_keys() {
        let app = app();
        for code in [KeyCode::Enter, KeyCode::Char(' '), KeyCode::Char('s')] {
            assert_eq!(handle_key(press(code), &app), Some(Message::StartOrReset));
        }
        assert_eq!(handle_key(press(KeyCode::Char('r')), &app), Some(Message::Reset));
    }

    #[test]
    fn field_navigation() {
        let app = app();
        assert_eq!(handle_key(press(KeyCode::Tab), &app), Some(Message::FocusNext));
        assert_eq!(handle_key(press(KeyCode::BackTab), &app), Some(Message::FocusPrev));
        assert_eq!(handle_key(press(KeyCode::Delete), &app), Some(Message::ClearField));
    }

    #[test]
    fn help_swallows_keys() {
        let mut app = app();
        app.show_help = true;
        assert_eq!(handle_key(press(KeyCode::Char('q')), &app), Some(Message::ToggleHelp));
        assert_eq!(handle_key(press(KeyCode::Enter), &app), Some(Message::ToggleHelp));
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut app = app();
        app.show_help = true;
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(key, &app), Some(Message::Quit));
    }

    #[test]
    fn key_release_is_ignored() {
        let app = app();
        let key = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key(key, &app), None);
    }
}

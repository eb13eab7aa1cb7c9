use crate::{
    event::Action,
    state::{App, InputMode},
};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

/// Handles a crossterm event and returns an optional Action.
pub fn handle_event(app: &App, event: Event) -> Option<Action> {
    if let Event::Key(key) = event
        && key.kind == KeyEventKind::Press
    {
        return match app.input_mode {
            InputMode::Normal => handle_normal_keys(key, app),
            InputMode::EnteringHash => handle_hash_input_keys(key),
        };
    }
    None
}

/// Key handling for the main view.
fn handle_normal_keys(key_event: KeyEvent, app: &App) -> Option<Action> {
    // A visible notice is dismissed by any of the usual "close" keys first.
    if app.status_message.is_some()
        && matches!(
            key_event.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ')
        )
    {
        return Some(Action::DismissMessage);
    }

    match key_event.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('t') | KeyCode::Char('/') => Some(Action::OpenHashInput),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
        KeyCode::PageUp => Some(Action::ScrollPageUp),
        KeyCode::PageDown => Some(Action::ScrollPageDown),
        _ => None,
    }
}

/// Key handling while the hash input popup is open.
fn handle_hash_input_keys(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Esc => Some(Action::HashInputCancel),
        KeyCode::Enter => Some(Action::HashInputSubmit),
        KeyCode::Backspace => Some(Action::HashInputBackspace),
        KeyCode::Char(c) => Some(Action::HashInputChar(c)),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn test_app() -> App {
        App::new(crate::settings::resolve_backend("devnet").unwrap())
    }

    #[test]
    fn test_normal_mode_keys() {
        let app = test_app();
        assert!(matches!(
            handle_event(&app, key(KeyCode::Char('q'))),
            Some(Action::Quit)
        ));
        assert!(matches!(
            handle_event(&app, key(KeyCode::Char('t'))),
            Some(Action::OpenHashInput)
        ));
        assert!(matches!(
            handle_event(&app, key(KeyCode::Down)),
            Some(Action::ScrollDown)
        ));
        assert!(handle_event(&app, key(KeyCode::Enter)).is_none());
    }

    #[test]
    fn test_hash_input_mode_keys() {
        let mut app = test_app();
        app.input_mode = InputMode::EnteringHash;

        assert!(matches!(
            handle_event(&app, key(KeyCode::Char('a'))),
            Some(Action::HashInputChar('a'))
        ));
        assert!(matches!(
            handle_event(&app, key(KeyCode::Enter)),
            Some(Action::HashInputSubmit)
        ));
        assert!(matches!(
            handle_event(&app, key(KeyCode::Esc)),
            Some(Action::HashInputCancel)
        ));
        // 'q' types into the input instead of quitting.
        assert!(matches!(
            handle_event(&app, key(KeyCode::Char('q'))),
            Some(Action::HashInputChar('q'))
        ));
    }

    #[test]
    fn test_notice_dismissal_takes_priority() {
        let mut app = test_app();
        app.status_message = Some("notice".to_string());
        assert!(matches!(
            handle_event(&app, key(KeyCode::Esc)),
            Some(Action::DismissMessage)
        ));
        // Quitting still works with a notice up.
        assert!(matches!(
            handle_event(&app, key(KeyCode::Char('q'))),
            Some(Action::Quit)
        ));
    }
}

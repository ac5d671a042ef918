use crate::ui::alerts::AlertsAction;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // A shown modal captures input until it is dismissed.
    if app.active_modal().is_some() {
        match key.code {
            KeyCode::Esc => app.dismiss_active(),
            KeyCode::Up => app.move_button_selection(-1),
            KeyCode::Down => app.move_button_selection(1),
            KeyCode::Enter => app.activate_selected(),
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                let index = ch.to_digit(10).unwrap_or(0) as usize;
                if index > 0 {
                    app.activate_button(index - 1);
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('a') => app.dispatch(AlertsAction::ShowAlert),
        KeyCode::Char('s') => app.dispatch(AlertsAction::ShowSheet),
        KeyCode::Char('+') | KeyCode::Char('=') => app.dispatch(AlertsAction::Increment),
        KeyCode::Char('-') => app.dispatch(AlertsAction::Decrement),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, AppMode, Focus};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.mode() == AppMode::Landing {
        app.skip_landing();
        return;
    }

    if app.focus() == Focus::AlertPrice {
        match key.code {
            KeyCode::Enter => app.commit_alert(),
            KeyCode::Esc => app.focus_query(),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Char(c) => app.type_char(c),
            _ => {}
        }
        return;
    }

    if is_ctrl_char(key, 'f') {
        app.toggle_favorite();
        return;
    }
    if is_ctrl_char(key, 'a') {
        app.begin_alert_entry();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.remove_alert();
        return;
    }

    match key.code {
        KeyCode::Tab => app.cycle_focus(),
        KeyCode::Esc => {
            if app.focus() == Focus::Query {
                app.request_quit();
            } else {
                app.focus_query();
            }
        }
        _ => match app.focus() {
            Focus::Query => match key.code {
                KeyCode::Enter => app.submit(),
                KeyCode::Backspace => app.backspace(),
                KeyCode::Char(c) => app.type_char(c),
                _ => {}
            },
            Focus::History | Focus::Favorites | Focus::Alerts => match key.code {
                KeyCode::Up => app.move_selection(-1),
                KeyCode::Down => app.move_selection(1),
                KeyCode::Enter => app.activate_selection(),
                KeyCode::Delete | KeyCode::Char('d') => app.remove_selected(),
                _ => {}
            },
            Focus::AlertPrice => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}

use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route a key event by precedence: notice > confirmation dialog > editor >
/// globals > focused region.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // A raised notice swallows everything; any key dismisses it.
    if app.notice().is_some() {
        app.dismiss_notice();
        return;
    }

    if app.confirming_removal() {
        match key.code {
            KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => app.confirm_remove(),
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => app.cancel_remove(),
            _ => {}
        }
        return;
    }

    // While editing, the editor captures all input. This is also what keeps
    // the remove binding from firing mid-rename.
    if app.editor().is_editing() {
        match key.code {
            KeyCode::Enter => app.submit_edit(),
            KeyCode::Esc => app.cancel_edit(),
            KeyCode::Backspace => app.editor_backspace(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.editor_type(ch)
            }
            _ => {}
        }
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Tab) {
        app.toggle_focus();
        return;
    }

    match app.focus() {
        Focus::Shell => match key.code {
            KeyCode::Enter => app.submit_new_task(),
            KeyCode::Backspace => app.input_backspace(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.input_push(ch)
            }
            KeyCode::Down => {
                app.toggle_focus();
            }
            _ => {}
        },
        Focus::List => match key.code {
            KeyCode::Up => app.move_selection(-1),
            KeyCode::Down => app.move_selection(1),
            KeyCode::Char(' ') => app.toggle_selected(),
            KeyCode::Char('e') | KeyCode::Char('E') => app.start_edit_selected(),
            KeyCode::Delete | KeyCode::Char('d') | KeyCode::Char('D') => {
                app.request_remove_selected()
            }
            KeyCode::Char('q') => app.request_quit(),
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

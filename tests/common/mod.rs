//! Shared test utilities.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tarefas::ui::app::App;
use tarefas::ui::input::handle_key;

pub fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

/// Types a title into the shell and submits it. The app must currently
/// focus the shell (a fresh `App` does).
pub fn add_task(app: &mut App, title: &str) {
    type_text(app, title);
    press(app, KeyCode::Enter);
}

/// Fresh app with the given tasks added through the shell.
pub fn app_with(titles: &[&str]) -> App {
    let mut app = App::new();
    for title in titles {
        add_task(&mut app, title);
    }
    app
}

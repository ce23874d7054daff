use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new();
    let events = EventHandler::new(tick_rate);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(tick_rate_ms = config.ui.tick_rate_ms, "ui started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => paste(&mut app, &text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// Pasted text goes to whichever text field currently captures input.
/// Dialogs ignore pastes entirely.
fn paste(app: &mut App, text: &str) {
    if app.notice().is_some() || app.confirming_removal() {
        return;
    }
    for ch in text.chars().filter(|ch| !ch.is_control()) {
        if app.editor().is_editing() {
            app.editor_type(ch);
        } else if app.focus() == crate::ui::app::Focus::Shell {
            app.input_push(ch);
        }
    }
}

use crossterm::event::{self, Event};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Events delivered to the render loop.
pub enum AppEvent {
    Input(event::KeyEvent),
    /// Bracketed paste lands in whichever field has focus.
    Paste(String),
    Tick,
    Resize(u16, u16),
}

/// Reads crossterm events on a dedicated thread and forwards them, plus a
/// periodic tick, over a channel to the render loop.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => tx.send(AppEvent::Input(key)),
                            Ok(Event::Paste(text)) => tx.send(AppEvent::Paste(text)),
                            Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!(error = %err, "terminal event read failed");
                                break;
                            }
                        };
                        if forwarded.is_err() {
                            // Receiver gone: the UI is shutting down.
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "terminal event poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

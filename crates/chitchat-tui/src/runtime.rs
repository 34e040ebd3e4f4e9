use anyhow::Result;
use chrono::Local;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use std::time::Duration;

use crate::input::{handle_key, handle_mouse};
use crate::render::render;
use crate::ui::{App, Tui};

pub(crate) async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();
    let tick_rate = Duration::from_millis(app.config.tick_rate_ms.max(1));
    let mut tick_interval = tokio::time::interval(tick_rate);
    tracing::info!(tick_rate_ms = app.config.tick_rate_ms, "event loop started");

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => handle_event(app, event),
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "terminal event stream failed");
                        return Err(e.into());
                    }
                    // Stream closed, nothing more to read
                    None => app.quit(),
                }
            }
            _ = tick_interval.tick() => {
                app.tick(Local::now().naive_local());
            }
        }
    }

    Ok(())
}

pub(crate) fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_press(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        _ => {}
    }
}

fn handle_key_press(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        if app.pending_quit {
            // Second Ctrl+C - quit immediately
            app.quit();
        } else {
            // First Ctrl+C - footer shows the warning
            app.pending_quit = true;
        }
        return;
    }
    app.pending_quit = false;
    handle_key(app, key);
}

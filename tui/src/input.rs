//! Input handling for Ticklist TUI.
//!
//! Terminal events are read on a blocking thread and forwarded over a bounded
//! channel. Each frame drains what is queued and maps keys to intents.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use ticklist_engine::{App, InputMode, InsertModeAccess, Intent, Priority};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close first so a backpressured sender on the input thread unblocks.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Backpressure rather than dropping events.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued input and apply it. Returns `true` when the app should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Apply one terminal event. Returns `true` when the app should quit.
pub fn apply_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            // Handle press + repeat events (ignore releases)
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }

            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.request_quit();
                return true;
            }

            match app.input_mode() {
                InputMode::Normal => handle_normal_mode(app, key),
                InputMode::Insert => handle_insert_mode(app, key),
            }
        }
        Event::Paste(text) => {
            if let InsertModeAccess::InInsert(mut insert) = app.insert_mode_mut() {
                insert.enter_text(&text);
            } else {
                debug!(len = text.len(), "Ignoring paste outside insert mode");
            }
        }
        _ => {}
    }
    app.should_quit()
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('i') | KeyCode::Enter => app.enter_insert_mode(),

        // Draft priority selector
        KeyCode::Char('1') => app.dispatch(Intent::SetDraftPriority(Priority::High)),
        KeyCode::Char('2') => app.dispatch(Intent::SetDraftPriority(Priority::Medium)),
        KeyCode::Char('3') => app.dispatch(Intent::SetDraftPriority(Priority::Low)),

        // Filter selector
        KeyCode::Char('a') => app.dispatch(Intent::SetFilter(None)),
        KeyCode::Char('h') => app.dispatch(Intent::SetFilter(Some(Priority::High))),
        KeyCode::Char('m') => app.dispatch(Intent::SetFilter(Some(Priority::Medium))),
        KeyCode::Char('l') => app.dispatch(Intent::SetFilter(Some(Priority::Low))),
        KeyCode::Char('f') => app.cycle_filter(),

        // Row actions
        KeyCode::Char(' ' | 'x') => app.toggle_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        _ => {}
    }
}

fn handle_insert_mode(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.enter_normal_mode();
        return;
    }

    let InsertModeAccess::InInsert(mut insert) = app.insert_mode_mut() else {
        return;
    };

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => insert.submit(),
        KeyCode::Tab => insert.cycle_priority(),
        KeyCode::Backspace => insert.delete_char(),
        KeyCode::Delete => insert.delete_char_forward(),
        KeyCode::Left => insert.move_cursor_left(),
        KeyCode::Right => insert.move_cursor_right(),
        KeyCode::Home => insert.move_cursor_start(),
        KeyCode::End => insert.move_cursor_end(),
        KeyCode::Char('w') if ctrl => insert.delete_word_backwards(),
        KeyCode::Char('u') if ctrl => insert.clear_line(),
        KeyCode::Char('a') if ctrl => insert.move_cursor_start(),
        KeyCode::Char('e') if ctrl => insert.move_cursor_end(),
        KeyCode::Char(c) if !ctrl => insert.enter_char(c),
        _ => {}
    }
}

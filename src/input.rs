//! Keyboard input.
//!
//! A dedicated thread blocks on `crossterm::event::read` and forwards every
//! event through a channel, so the game loop only ever drains what already
//! arrived and never waits on I/O.

use std::sync::mpsc;
use std::thread;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use space_garbage::entities::Controls;

pub trait InputPoller {
    /// Drain pending input.  Directions keep the last key seen this tick;
    /// `fire` is set if space was pressed at least once.
    fn poll(&mut self) -> Controls;
}

pub struct KeyboardPoller {
    rx: mpsc::Receiver<Event>,
}

impl KeyboardPoller {
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel::<Event>();
        thread::spawn(move || loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped, program exiting
                    }
                }
                Err(err) => {
                    log::warn!("keyboard reader stopped: {err}");
                    break;
                }
            }
        });
        Self { rx }
    }
}

impl InputPoller for KeyboardPoller {
    fn poll(&mut self) -> Controls {
        let mut controls = Controls::default();
        while let Ok(ev) = self.rx.try_recv() {
            if let Event::Key(key) = ev {
                apply_key(&mut controls, key);
            }
        }
        controls
    }
}

fn apply_key(controls: &mut Controls, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    match key.code {
        KeyCode::Up => controls.row_dir = -1,
        KeyCode::Down => controls.row_dir = 1,
        KeyCode::Left => controls.column_dir = -1,
        KeyCode::Right => controls.column_dir = 1,
        KeyCode::Char(' ') => controls.fire = true,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => controls.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            controls.quit = true
        }
        _ => {}
    }
}

//! Terminal input: a thin layer over crossterm events.

pub mod keyboard;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};

use crossterm::event::{self, Event};
use std::io;
use std::time::Duration;

/// Input events the runner cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Other,
}

impl From<Event> for InputEvent {
    fn from(ev: Event) -> Self {
        match ev {
            Event::Key(k) => InputEvent::Key(k),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        }
    }
}

/// Wait up to `timeout` for an event to become available.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next event, blocking if none is queued.
pub fn read_event() -> io::Result<InputEvent> {
    event::read().map(InputEvent::from)
}

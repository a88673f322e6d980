//! Key handling, split per mode.

pub mod message;
pub mod normal;

pub use message::handle_message;
pub use normal::handle_normal;

use crate::app::{App, Mode};
use crate::input::KeyCode;

/// Top-level key handler. Returns `true` when the screen should close.
pub fn handle_key(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    match app.mode {
        Mode::Normal => handle_normal(app, code),
        Mode::Message { .. } => handle_message(app, code),
    }
}

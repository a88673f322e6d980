use std::time::Duration;

use tracing::{debug, info};

use crate::app::App;
use crate::input::keyboard::{is_interrupt, is_press};
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal, Tui};
use crate::ui;

/// Run the booking screen until the user quits. The terminal is restored
/// even when the loop fails.
pub fn run_app(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = init_terminal()?;
    info!("booking screen started");
    let result = event_loop(&mut terminal, app);
    restore_terminal(&mut terminal)?;
    info!("booking screen closed");
    result
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if !poll(Duration::from_millis(250))? {
            continue;
        }
        match read_event()? {
            InputEvent::Key(key) if is_press(&key) => {
                if is_interrupt(&key) {
                    debug!("interrupt received");
                    return Ok(());
                }
                if handlers::handle_key(app, key.code)? {
                    return Ok(());
                }
            }
            InputEvent::Key(_) => {}
            InputEvent::Resize(_, _) => { /* redraw on next loop */ }
            InputEvent::Other => {}
        }
    }
}

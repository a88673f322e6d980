use crate::app::settings::keybinds;
use crate::app::App;
use crate::input::KeyCode;

/// Keys while no modal is open.
pub fn handle_normal(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    if keybinds::is_quit(&code) {
        return Ok(true);
    }
    if keybinds::is_next_focus(&code) {
        app.focus_next();
    } else if keybinds::is_prev_focus(&code) {
        app.focus_prev();
    } else if keybinds::is_left(&code) {
        app.move_left();
    } else if keybinds::is_right(&code) {
        app.move_right();
    } else if keybinds::is_up(&code) {
        app.move_up();
    } else if keybinds::is_down(&code) {
        app.move_down();
    } else if keybinds::is_toggle(&code) {
        app.activate();
    } else if keybinds::is_book(&code) {
        app.request_booking();
    }
    Ok(false)
}

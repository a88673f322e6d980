use crate::app::settings::keybinds;
use crate::app::App;
use crate::input::KeyCode;

/// Keys while a message modal is shown: dismiss closes it, quit still quits,
/// everything else is swallowed.
pub fn handle_message(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    if keybinds::is_dismiss(&code) {
        app.dismiss_message();
    } else if keybinds::is_quit(&code) {
        return Ok(true);
    }
    Ok(false)
}

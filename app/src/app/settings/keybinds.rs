// Named key predicates for the booking screen.
//
// Handlers ask "is this the toggle key?" instead of matching raw `KeyCode`
// patterns, so user overrides from the settings file apply everywhere.

use crate::app::settings::runtime_keybinds;
use crate::input::KeyCode;

fn is_bound(action: &str, code: &KeyCode) -> bool {
	runtime_keybinds::get().is_bound(action, code)
}

pub fn is_quit(code: &KeyCode) -> bool {
	is_bound("quit", code)
}

pub fn is_up(code: &KeyCode) -> bool {
	is_bound("up", code)
}

pub fn is_down(code: &KeyCode) -> bool {
	is_bound("down", code)
}

pub fn is_left(code: &KeyCode) -> bool {
	is_bound("left", code)
}

pub fn is_right(code: &KeyCode) -> bool {
	is_bound("right", code)
}

pub fn is_next_focus(code: &KeyCode) -> bool {
	is_bound("next_focus", code)
}

pub fn is_prev_focus(code: &KeyCode) -> bool {
	is_bound("prev_focus", code)
}

pub fn is_toggle(code: &KeyCode) -> bool {
	is_bound("toggle", code)
}

pub fn is_book(code: &KeyCode) -> bool {
	is_bound("book", code)
}

pub fn is_dismiss(code: &KeyCode) -> bool {
	is_bound("dismiss", code)
}

use once_cell::sync::Lazy;
use ratatui::style::{Modifier, Style};
use std::sync::Mutex;

use crate::ui::themes::Theme;

#[derive(Clone, Debug)]
pub struct Colors {
	pub screen_style: Style,
	pub title_style: Style,
	pub rating_style: Style,
	pub muted_style: Style,
	pub section_style: Style,
	pub section_focused_style: Style,
	pub chip_style: Style,
	pub chip_selected_style: Style,
	pub seat_available_style: Style,
	pub seat_selected_style: Style,
	pub seat_booked_style: Style,
	pub cursor_modifier: Modifier,
	pub price_style: Style,
	pub button_style: Style,
	pub dialog_style: Style,
	pub error_style: Style,
}

static CURRENT: Lazy<Mutex<Colors>> = Lazy::new(|| Mutex::new(derive(&Theme::dark())));

fn derive(theme: &Theme) -> Colors {
	let base = Style::default().fg(theme.fg).bg(theme.bg);
	Colors {
		screen_style: base,
		title_style: base.add_modifier(Modifier::BOLD),
		rating_style: base.fg(theme.highlight),
		muted_style: base.fg(theme.muted),
		section_style: base.fg(theme.muted),
		section_focused_style: base.fg(theme.accent).add_modifier(Modifier::BOLD),
		chip_style: base.fg(theme.muted),
		chip_selected_style: Style::default().fg(theme.bg).bg(theme.accent).add_modifier(Modifier::BOLD),
		seat_available_style: base.fg(theme.fg),
		seat_selected_style: base.fg(theme.accent).add_modifier(Modifier::BOLD),
		seat_booked_style: base.fg(theme.booked),
		cursor_modifier: Modifier::REVERSED,
		price_style: base.fg(theme.highlight).add_modifier(Modifier::BOLD),
		button_style: Style::default().fg(theme.bg).bg(theme.accent).add_modifier(Modifier::BOLD),
		dialog_style: base,
		error_style: base.fg(theme.accent),
	}
}

/// Select a theme by name; unknown names keep the current styles.
pub fn set_theme(name: &str) {
	if let Some(theme) = Theme::by_name(name) {
		set_from_theme(&theme);
	}
}

/// Derive concrete runtime styles from the provided theme and store them.
pub fn set_from_theme(theme: &Theme) {
	let mut g = CURRENT.lock().unwrap_or_else(|e| e.into_inner());
	*g = derive(theme);
}

pub fn current() -> Colors {
	CURRENT.lock().unwrap_or_else(|e| e.into_inner()).clone()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn selected_chip_uses_accent_background() {
		let theme = Theme::light();
		let c = derive(&theme);
		assert_eq!(c.chip_selected_style.bg, Some(theme.accent));
		assert_eq!(c.seat_booked_style.fg, Some(theme.booked));
	}
}

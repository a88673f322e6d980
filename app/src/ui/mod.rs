use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::app::{App, Focus, Mode};

pub mod colors;
pub mod themes;
pub mod util;
pub mod widgets;

pub use themes::Theme;

const HELP: &str = "Tab:section  ←/→:choose  ↑/↓:row  Space:select seat  b:book  q:quit";

/// Draw the whole booking screen for the current state.
pub fn ui(f: &mut Frame, app: &App) {
    let colors = colors::current();
    f.render_widget(Block::default().style(colors.screen_style), f.area());

    // header (4), dates (3), times (3), seats (min), bottom bar (3), help (1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    widgets::header::render(f, chunks[0], &app.movie);

    let dates: Vec<String> = app.booking.dates().iter().map(|d| d.to_string()).collect();
    widgets::chips::render(
        f,
        chunks[1],
        "Select Date",
        &dates,
        app.booking.selected_date(),
        app.focus == Focus::Date,
    );
    widgets::chips::render(
        f,
        chunks[2],
        "Select Time",
        app.booking.showtimes(),
        app.booking.selected_time(),
        app.focus == Focus::Time,
    );
    widgets::seat_map::render(f, chunks[3], app);
    widgets::footer::render(f, chunks[4], app);

    let help = Paragraph::new(HELP).style(colors.muted_style);
    f.render_widget(help, chunks[5]);

    if let Mode::Message { title, content } = &app.mode {
        widgets::dialogs::draw_message(f, f.area(), title, content);
    }
}

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, Focus, SeatRow, SeatStatus};
use crate::ui::colors::{current as current_colors, Colors};

pub fn seat_symbol(status: SeatStatus) -> &'static str {
    match status {
        SeatStatus::Available => "[ ]",
        SeatStatus::Selected => "[■]",
        SeatStatus::Booked => "[x]",
    }
}

fn seat_style(status: SeatStatus, colors: &Colors) -> ratatui::style::Style {
    match status {
        SeatStatus::Available => colors.seat_available_style,
        SeatStatus::Selected => colors.seat_selected_style,
        SeatStatus::Booked => colors.seat_booked_style,
    }
}

/// One grid row: its label followed by every seat. `cursor` marks the
/// highlighted position, if it is on this row.
pub fn row_line(row: &SeatRow, cursor: Option<usize>, colors: &Colors) -> Line<'static> {
    let mut spans = vec![Span::styled(format!("{:>2} ", row.label), colors.muted_style)];
    for (pos, status) in row.seats().iter().enumerate() {
        let mut style = seat_style(*status, colors);
        if cursor == Some(pos) {
            style = style.add_modifier(colors.cursor_modifier);
        }
        spans.push(Span::styled(seat_symbol(*status), style));
    }
    Line::from(spans)
}

fn legend(colors: &Colors) -> Line<'static> {
    let items = [
        (SeatStatus::Available, "Available"),
        (SeatStatus::Selected, "Selected"),
        (SeatStatus::Booked, "Booked"),
    ];
    let mut spans = Vec::new();
    for (status, label) in items {
        spans.push(Span::styled(seat_symbol(status), seat_style(status, colors)));
        spans.push(Span::styled(format!(" {}   ", label), colors.muted_style));
    }
    Line::from(spans)
}

// Lines drawn above the first seat row: screen marker, label, spacer.
const HEADER_LINES: usize = 3;

/// Vertical scroll that keeps line `target` inside a `viewport` of lines.
pub fn scroll_offset(target: usize, viewport: usize) -> usize {
    if viewport == 0 {
        return 0;
    }
    target.saturating_sub(viewport - 1)
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = current_colors();
    let focused = app.focus == Focus::Seats;
    let grid = app.booking.grid();

    let mut lines = vec![
        Line::from(Span::styled("▔".repeat(grid.seats_per_row() * 3), colors.muted_style)),
        Line::from(Span::styled("SCREEN", colors.muted_style)),
        Line::from(""),
    ];
    for (i, row) in grid.rows().iter().enumerate() {
        let cursor = if focused && i == app.cursor.row {
            Some(app.cursor.position)
        } else {
            None
        };
        lines.push(row_line(row, cursor, &colors));
    }
    lines.push(Line::from(""));
    lines.push(legend(&colors));

    let border = if focused {
        colors.section_focused_style
    } else {
        colors.section_style
    };
    let viewport = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(HEADER_LINES + app.cursor.row, viewport);
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .scroll((offset, 0))
        .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Select Seats ")
            .border_style(border)
            .style(colors.screen_style),
    );
    f.render_widget(p, area);
}

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, SeatId};
use crate::ui::colors::current as current_colors;
use crate::ui::util::format_price;

/// Selected seats in selection order, e.g. `A1, B3`.
pub fn format_selection(seats: &[SeatId]) -> String {
    seats
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Bottom bar with the selection and total. Draws nothing while no seat is
/// selected.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let seats = app.booking.selected_seats();
    if seats.is_empty() {
        return;
    }
    let colors = current_colors();
    let block = Block::default()
        .borders(Borders::ALL)
        .style(colors.screen_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(18)])
        .split(inner);

    let summary = Line::from(vec![
        Span::styled(format_selection(seats), colors.muted_style),
        Span::raw("  "),
        Span::styled(
            format_price(&app.currency, app.booking.total_price()),
            colors.price_style,
        ),
    ]);
    f.render_widget(Paragraph::new(summary), cols[0]);
    f.render_widget(
        Paragraph::new(Span::styled(" [ Book Seats ] ", colors.button_style)),
        cols[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_keeps_insertion_order() {
        let seats = vec![SeatId::new("C", 4), SeatId::new("A", 0)];
        assert_eq!(format_selection(&seats), "C5, A1");
        assert_eq!(format_selection(&[]), "");
    }
}

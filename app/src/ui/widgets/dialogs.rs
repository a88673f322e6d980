use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::colors::current as current_colors;
use crate::ui::util::centered_rect;

/// Centered modal with a title, wrapped content and a dismiss hint.
pub fn draw_message(f: &mut Frame, area: Rect, title: &str, content: &str) {
    let colors = current_colors();
    let rect = centered_rect(60, 40, area);
    let style = if title.to_lowercase().contains("error") {
        colors.error_style
    } else {
        colors.dialog_style
    };
    let mut lines: Vec<Line> = content.lines().map(|l| Line::from(l.to_string())).collect();
    lines.push(Line::from(""));
    lines.push(Line::styled("[ OK ]", colors.button_style));
    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title))
                .border_style(style)
                .style(colors.dialog_style),
        );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::MovieInfo;
use crate::ui::colors::current as current_colors;

/// Movie title, rating, duration and genre.
pub fn render(f: &mut Frame, area: Rect, movie: &MovieInfo) {
    let colors = current_colors();
    let lines = vec![
        Line::from(Span::styled(movie.title.clone(), colors.title_style)),
        Line::from(vec![
            Span::styled(format!("★ {}", movie.rating), colors.rating_style),
            Span::styled(format!("  {}  ", movie.duration), colors.muted_style),
            Span::styled(movie.genre.clone(), colors.muted_style),
        ]),
    ];
    let p = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).style(colors.screen_style));
    f.render_widget(p, area);
}

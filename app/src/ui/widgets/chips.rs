//! Horizontal strip of selectable labels, used for dates and showtimes.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::colors::{current as current_colors, Colors};

/// Build the strip line with exactly one highlighted chip.
pub fn chip_line(labels: &[String], selected: usize, colors: &Colors) -> Line<'static> {
    let mut spans = Vec::with_capacity(labels.len() * 2);
    for (i, label) in labels.iter().enumerate() {
        let style = if i == selected {
            colors.chip_selected_style
        } else {
            colors.chip_style
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn chip_width(label: &str) -> usize {
    // " label " plus the separator
    label.chars().count() + 3
}

/// Index of the first chip to draw so that `selected` fits in `width`
/// columns. Starts at 0 whenever the selection fits from the left edge.
pub fn first_visible(labels: &[String], selected: usize, width: usize) -> usize {
    let Some(sel) = labels.get(selected) else {
        return 0;
    };
    let prefix: usize = labels[..=selected].iter().map(|l| chip_width(l)).sum();
    if prefix <= width {
        return 0;
    }
    let mut start = selected;
    let mut used = chip_width(sel);
    while start > 0 && used + chip_width(&labels[start - 1]) <= width {
        start -= 1;
        used += chip_width(&labels[start]);
    }
    start
}

pub fn render(f: &mut Frame, area: Rect, title: &str, labels: &[String], selected: usize, focused: bool) {
    let colors = current_colors();
    let border = if focused {
        colors.section_focused_style
    } else {
        colors.section_style
    };
    let start = first_visible(labels, selected, area.width.saturating_sub(2) as usize);
    let line = chip_line(&labels[start..], selected.saturating_sub(start), &colors);
    let p = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title))
            .border_style(border)
            .style(colors.screen_style),
    );
    f.render_widget(p, area);
}

pub mod viewport;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::buffer::TextBuffer;
use viewport::Viewport;

/// Area left for text once the border and status bar are taken.
pub fn text_area(area: Rect) -> Rect {
    let [main, _] = split(area);
    Block::default().borders(Borders::ALL).inner(main)
}

fn split(area: Rect) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    [chunks[0], chunks[1]]
}

/// Paint the visible lines and the status bar.
pub fn render(frame: &mut Frame, buffer: &TextBuffer, viewport: &Viewport, title: &str) {
    let [main, status_area] = split(frame.area());

    let main_block = Block::default().borders(Borders::ALL).title(title.to_string());
    let inner_area = main_block.inner(main);
    frame.render_widget(main_block, main);

    let lines: Vec<Line> = viewport
        .visible_lines(buffer)
        .into_iter()
        .map(Line::from)
        .collect();
    frame.render_widget(Paragraph::new(lines), inner_area);

    let status_text = if buffer.is_empty() {
        " Empty file | q: quit".to_string()
    } else {
        format!(
            " {}:{} | {} bytes in {} pieces | j/k: scroll | q: quit",
            viewport.start_line + 1,
            buffer.total_lines(),
            buffer.len(),
            buffer.piece_count(),
        )
    };
    let status = Paragraph::new(status_text)
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(status, status_area);
}

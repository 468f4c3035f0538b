//! Input bar: search prompt, query text, and cursor.

use ratatui::{
    layout::Position,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{colors, styles};

const PROMPT: &str = " ⌕ ";
const PLACEHOLDER: &str = "Search apps, games, articles...";

pub fn render(f: &mut Frame, buffer: &str, cursor_pos: usize, area: ratatui::prelude::Rect) {
    let text = if buffer.is_empty() {
        Span::styled(PLACEHOLDER, styles::muted())
    } else {
        Span::styled(buffer, styles::text())
    };
    let line = Line::from(vec![Span::styled(PROMPT, styles::accent_bold()), text]);
    let block = Block::default()
        .style(Style::default().bg(colors::ELEVATED))
        .borders(Borders::BOTTOM)
        .border_style(styles::border())
        .border_type(BorderType::Plain);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(line), inner);

    let prompt_width = PROMPT.chars().count() as u16;
    let typed = buffer.get(..cursor_pos).map(|s| s.chars().count()).unwrap_or(0) as u16;
    let x = (inner.x + prompt_width + typed).min(inner.x + inner.width.saturating_sub(1));
    f.set_cursor_position(Position { x, y: inner.y });
}

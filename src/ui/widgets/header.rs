//! Header line: title, version, and the site being searched.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::{colors, styles};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SITE_LABEL: &str = "site: ";

/// Truncate to `max_chars` from the end with ellipsis. Single pass over chars.
fn truncate_end(s: &str, max_chars: usize) -> String {
    let count = s.chars().count();
    if count <= max_chars {
        return s.to_string();
    }
    let take = max_chars.saturating_sub(1);
    let skip = count.saturating_sub(take);
    format!("…{}", s.chars().skip(skip).collect::<String>())
}

pub fn render(f: &mut Frame, area: ratatui::prelude::Rect, base_url: &str) {
    let title = " Storefront Search ";
    let version = format!("v{VERSION}");
    let used = title.chars().count() + version.chars().count() + SITE_LABEL.chars().count() + 3;
    let site = truncate_end(base_url, (area.width as usize).saturating_sub(used));
    let pad = (area.width as usize)
        .saturating_sub(used + site.chars().count());

    let line = Line::from(vec![
        Span::styled(title, styles::accent_bold()),
        Span::styled(version, styles::muted()),
        Span::raw(" ".repeat(pad + 2)),
        Span::styled(SITE_LABEL, styles::text_dim()),
        Span::styled(site, Style::default().fg(colors::ACCENT_SOFT)),
        Span::raw(" "),
    ]);
    let para = Paragraph::new(line).style(Style::default().bg(colors::ELEVATED));
    f.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use super::truncate_end;

    #[test]
    fn keeps_the_tail_of_long_urls() {
        assert_eq!(truncate_end("https://apps.example.com", 40), "https://apps.example.com");
        assert_eq!(truncate_end("https://apps.example.com", 8), "…ple.com");
    }
}

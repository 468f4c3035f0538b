//! Status bar: load progress or index size, notices, shortcuts.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::theme::{colors, styles};

const SHORTCUTS: &str = " ↑↓ select  Enter open  Esc clear  ^C quit ";

pub fn render(f: &mut Frame, app: &App, area: ratatui::prelude::Rect, spinner_char: char) {
    let (left, left_style) = match &app.state.notice {
        Some(notice) if notice.is_error => (format!(" {}", notice.text), styles::error()),
        Some(notice) => (format!(" {}", notice.text), styles::text_dim()),
        None => (summary(app, spinner_char), styles::muted()),
    };
    let width = area.width as usize;
    let pad = width.saturating_sub(left.chars().count() + SHORTCUTS.chars().count());
    let line = Line::from(vec![
        Span::styled(left, left_style),
        Span::raw(" ".repeat(pad)),
        Span::styled(SHORTCUTS, styles::muted()),
    ]);
    let para = Paragraph::new(line).style(Style::default().bg(colors::ELEVATED));
    f.render_widget(para, area);
}

fn summary(app: &App, spinner_char: char) -> String {
    if app.loading() {
        return format!(" {spinner_char} Loading…");
    }
    let entries = app.session.index().map_or(0, |index| index.len());
    let mut text = format!(" {entries} entries");
    if !app.state.query_is_empty() {
        text.push_str(&format!(" · {} matches", app.session.results().total()));
    }
    if app.state.index_partial {
        text.push_str(" · index partially loaded");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_search::{LoadError, LoadHandle, LoadReport, Resource, SearchConfig};

    fn settled(report: LoadReport) -> App {
        let mut app = App::new(SearchConfig::default(), LoadHandle::settled(report));
        app.poll_results();
        app
    }

    #[test]
    fn partial_index_is_flagged_in_the_summary() {
        let app = settled(LoadReport {
            failures: vec![LoadError::Status {
                resource: Resource::HomeFeed,
                status: reqwest::StatusCode::NOT_FOUND,
            }],
            ..LoadReport::default()
        });
        assert_eq!(summary(&app, '⠋'), " 0 entries · index partially loaded");
    }

    #[test]
    fn complete_index_has_no_hint() {
        let app = settled(LoadReport::default());
        assert_eq!(summary(&app, '⠋'), " 0 entries");
    }
}

//! Results panel: labeled groups, popular searches, loading and empty states.

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use storefront_search::QueryResult;

use crate::app::App;
use crate::state::POPULAR_SEARCHES;
use crate::ui::theme::{colors, styles, GROUP_GAP};

pub fn render(f: &mut Frame, app: &App, area: ratatui::prelude::Rect, spinner_char: char) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::border())
        .style(Style::default().bg(colors::BG));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (lines, focus) = if app.state.query_is_empty() {
        (popular_lines(app.state.tag_index), None)
    } else if app.loading() {
        let line = Line::from(vec![
            Span::styled(format!(" {spinner_char} "), styles::accent_bold()),
            Span::styled("Loading search index…", styles::text_dim()),
        ]);
        (vec![line], None)
    } else {
        let visible = app.visible_results();
        if visible.is_empty() {
            (vec![no_results_line(app.state.input_buffer())], None)
        } else {
            result_lines(&visible, app.state.selected)
        }
    };

    // Keep the selected row on screen.
    let height = inner.height as usize;
    let scroll = focus
        .map(|row| (row + 1).saturating_sub(height))
        .unwrap_or(0);
    let visible: Vec<Line> = lines.into_iter().skip(scroll).take(height).collect();
    f.render_widget(Paragraph::new(visible), inner);
}

fn no_results_line(query: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" No results found for \"{query}\""),
        styles::muted(),
    ))
}

fn popular_lines(tag_index: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(" Popular searches", styles::muted()))];
    let selected = tag_index % POPULAR_SEARCHES.len();
    for (i, tag) in POPULAR_SEARCHES.iter().enumerate() {
        let (marker, style) = if i == selected {
            ("▎ ", styles::selected())
        } else {
            ("  ", styles::text_dim())
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(colors::ACCENT)),
            Span::styled(*tag, style),
        ]));
    }
    lines
}

/// Lines for every non-empty group plus the row index of the selected hit.
fn result_lines(
    results: &QueryResult,
    selected: Option<usize>,
) -> (Vec<Line<'static>>, Option<usize>) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut focus = None;
    let mut hit_index = 0;

    for group in results.groups() {
        if group.hits.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            for _ in 0..GROUP_GAP {
                lines.push(Line::from(""));
            }
        }
        lines.push(Line::from(Span::styled(
            format!(" {} ({})", group.kind.label(), group.hits.len()),
            styles::accent_bold(),
        )));
        for hit in &group.hits {
            let is_selected = selected == Some(hit_index);
            if is_selected {
                focus = Some(lines.len());
            }
            let (marker, title_style) = if is_selected {
                ("▎ ", styles::selected())
            } else {
                ("  ", styles::text())
            };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(colors::ACCENT)),
                Span::styled(hit.title().to_string(), title_style),
            ];
            if let Some(sub) = hit.subtitle().filter(|s| !s.is_empty()) {
                spans.push(Span::styled(format!("  {sub}"), styles::text_dim()));
            }
            lines.push(Line::from(spans));
            hit_index += 1;
        }
    }
    (lines, focus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_search::index::{ArticleEntry, IndexEntry};

    fn flat(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn groups_are_labeled_and_selection_is_tracked() {
        let results = QueryResult {
            apps: vec![IndexEntry {
                name: "Photo Editor".into(),
                category: "Photography".into(),
                ..IndexEntry::default()
            }],
            games: Vec::new(),
            articles: vec![ArticleEntry {
                title: "Best Photo Apps 2024".into(),
                ..ArticleEntry::default()
            }],
        };
        let (lines, focus) = result_lines(&results, Some(1));
        let text: Vec<String> = lines.iter().map(flat).collect();
        assert_eq!(
            text,
            [
                " Apps (1)",
                "  Photo Editor  Photography",
                "",
                " Articles (1)",
                "▎ Best Photo Apps 2024",
            ]
        );
        assert_eq!(focus, Some(4));
    }

    #[test]
    fn no_results_message_quotes_the_raw_query() {
        assert_eq!(flat(&no_results_line("   ")), " No results found for \"   \"");
    }

    #[test]
    fn popular_searches_mark_the_current_tag() {
        let lines = popular_lines(POPULAR_SEARCHES.len() + 1);
        assert_eq!(flat(&lines[2]), "▎ Social Apps");
        assert_eq!(lines.len(), POPULAR_SEARCHES.len() + 1);
    }
}

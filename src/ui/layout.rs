//! Single-column layout: header, input, results, status.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{HEADER_HEIGHT, INPUT_HEIGHT, MARGIN_X, MIN_RESULTS_LINES, STATUS_HEIGHT};

#[derive(Clone, Debug)]
pub struct LayoutRegions {
    pub header: Rect,
    pub input: Rect,
    pub results: Rect,
    pub status: Rect,
}

pub fn compute(area: Rect) -> LayoutRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(MIN_RESULTS_LINES),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    let results = Rect {
        x: area.x + MARGIN_X,
        y: chunks[2].y,
        width: area.width.saturating_sub(2 * MARGIN_X),
        height: chunks[2].height,
    };
    LayoutRegions {
        header: chunks[0],
        input: chunks[1],
        results,
        status: chunks[3],
    }
}

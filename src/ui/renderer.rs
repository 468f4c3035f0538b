//! Single-panel render: header, query input, grouped results, status.

use ratatui::Frame;

use crate::app::App;
use crate::ui::layout;
use crate::ui::theme::SPINNER;
use crate::ui::widgets::{render_header, render_input, render_results, render_status};

pub fn render(f: &mut Frame, app: &App, tick: usize) {
    let regions = layout::compute(f.area());
    let spinner_char = SPINNER[tick % SPINNER.len()];

    render_header(f, regions.header, app.config().base_url.as_str());
    render_input(
        f,
        app.state.input_buffer(),
        app.state.input_cursor(),
        regions.input,
    );
    render_results(f, app, regions.results, spinner_char);
    render_status(f, app, regions.status, spinner_char);
}

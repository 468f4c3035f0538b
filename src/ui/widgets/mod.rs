//! TUI widgets: header, input, results, status.

mod header;
mod input;
mod results;
mod status;

pub use header::render as render_header;
pub use input::render as render_input;
pub use results::render as render_results;
pub use status::render as render_status;

//! Global state container and action dispatch for the search box.

use std::io;
use std::sync::Arc;

use tracing::{info, warn};

use storefront_search::{LoadHandle, QueryResult, SearchConfig, SearchSession};

use crate::actions::Action;
use crate::state::{AppState, Notice, POPULAR_SEARCHES};

/// Launches a resolved result URL.
pub type Opener = fn(&str) -> io::Result<()>;

fn open_in_browser(url: &str) -> io::Result<()> {
    open::that(url)
}

pub struct App {
    pub state: AppState,
    pub session: SearchSession,
    loader: LoadHandle,
    config: SearchConfig,
    opener: Opener,
    pub should_quit: bool,
    /// For spinner animation (incremented each tick).
    pub tick: usize,
}

impl App {
    pub fn new(config: SearchConfig, loader: LoadHandle) -> Self {
        Self::with_opener(config, loader, open_in_browser)
    }

    pub fn with_opener(config: SearchConfig, loader: LoadHandle, opener: Opener) -> Self {
        let mut session = SearchSession::new();
        session.mark_loading();
        Self {
            state: AppState::default(),
            session,
            loader,
            config,
            opener,
            should_quit: false,
            tick: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn loading(&self) -> bool {
        !self.session.ready()
    }

    /// Results as shown: each group capped at the display limit.
    pub fn visible_results(&self) -> QueryResult {
        self.session.results().truncated(self.config.display_limit)
    }

    /// Picks up the index once the loader settles and expires stale notices.
    pub fn poll_results(&mut self) {
        if let Some(report) = self.loader.try_take() {
            self.state.load_failures = report.failures.len();
            self.state.index_partial = !report.is_complete();
            self.session.install_index(Arc::new(report.index));
            self.state.selected = None;
        }
        if self.state.notice.as_ref().is_some_and(Notice::is_expired) {
            self.state.notice = None;
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::Char(c) => {
                let pos = self.state.input_cursor.min(self.state.input_buffer.len());
                self.state.input_buffer.insert(pos, c);
                self.state.input_cursor = pos + c.len_utf8();
                self.refresh_query();
            }
            Action::Backspace => {
                if let Some(len) = self.char_len_before_cursor() {
                    self.state.input_cursor -= len;
                    self.state.input_buffer.remove(self.state.input_cursor);
                    self.refresh_query();
                }
            }
            Action::Delete => {
                if self.state.input_cursor < self.state.input_buffer.len() {
                    self.state.input_buffer.remove(self.state.input_cursor);
                    self.refresh_query();
                }
            }
            Action::CursorLeft => {
                if let Some(len) = self.char_len_before_cursor() {
                    self.state.input_cursor -= len;
                }
            }
            Action::CursorRight => {
                if let Some(c) = self.state.input_buffer[self.state.input_cursor..].chars().next() {
                    self.state.input_cursor += c.len_utf8();
                }
            }
            Action::CursorHome => self.state.input_cursor = 0,
            Action::CursorEnd => self.state.input_cursor = self.state.input_buffer.len(),
            Action::ClearInput => {
                self.state.input_buffer.clear();
                self.state.input_cursor = 0;
                self.refresh_query();
            }
            Action::Submit => self.submit_input(),

            Action::SelectPrev => self.move_selection(false),
            Action::SelectNext => self.move_selection(true),
        }
    }

    fn char_len_before_cursor(&self) -> Option<usize> {
        self.state.input_buffer[..self.state.input_cursor]
            .chars()
            .next_back()
            .map(char::len_utf8)
    }

    fn refresh_query(&mut self) {
        self.session.set_query(self.state.input_buffer.clone());
        self.state.selected = None;
    }

    fn move_selection(&mut self, forward: bool) {
        if self.state.query_is_empty() {
            let len = POPULAR_SEARCHES.len();
            self.state.tag_index = if forward {
                (self.state.tag_index + 1) % len
            } else {
                (self.state.tag_index + len - 1) % len
            };
            return;
        }
        let len = self.visible_results().total();
        self.state.selected = match (len, self.state.selected) {
            (0, _) => None,
            (_, None) if forward => Some(0),
            (_, None) => Some(len - 1),
            (_, Some(i)) if forward => Some((i + 1) % len),
            (_, Some(i)) => Some((i + len - 1) % len),
        };
    }

    fn submit_input(&mut self) {
        if self.state.query_is_empty() {
            self.state.input_buffer = self.state.selected_tag().to_string();
            self.state.input_cursor = self.state.input_buffer.len();
            self.refresh_query();
            return;
        }

        let visible = self.visible_results();
        let target = match self.state.selected {
            Some(i) => visible.hits().nth(i).and_then(|hit| hit.target()),
            None => visible.first_target(),
        };
        let Some(link) = target else {
            let text = if visible.is_empty() {
                "Nothing to open".to_string()
            } else {
                "This entry has no link".to_string()
            };
            self.state.notice = Some(Notice::info(text));
            return;
        };

        let url = match self.config.resolve_link(link) {
            Ok(url) => url,
            Err(e) => {
                warn!(link, error = %e, "search result link is not openable");
                self.state.notice = Some(Notice::error(format!("Cannot open {link}: {e}")));
                return;
            }
        };
        match (self.opener)(url.as_str()) {
            Ok(()) => {
                info!(%url, "opened search result");
                self.state.notice = Some(Notice::info(format!("Opened {url}")));
            }
            Err(e) => {
                warn!(%url, error = %e, "failed to open search result");
                self.state.notice = Some(Notice::error(format!("Could not open {url}: {e}")));
            }
        }
    }
}

//! App state: query input, selection, popular searches, status notices.

use std::time::{Duration, Instant};

/// Suggestions offered while the query is empty.
pub const POPULAR_SEARCHES: &[&str] = &[
    "Games",
    "Social Apps",
    "Photo Editor",
    "Music Player",
    "Video Player",
];

const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Transient status-bar message.
#[derive(Clone, Debug)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
    pub expires_at: Instant,
}

impl Notice {
    pub fn info(text: String) -> Self {
        Self { text, is_error: false, expires_at: Instant::now() + NOTICE_TTL }
    }
    pub fn error(text: String) -> Self {
        Self { text, is_error: true, expires_at: Instant::now() + NOTICE_TTL }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub input_buffer: String,
    /// Byte offset into `input_buffer`, always on a char boundary.
    pub input_cursor: usize,
    /// Position in the visible hits (apps, then games, then articles).
    pub selected: Option<usize>,
    /// Highlighted popular search while the query is empty.
    pub tag_index: usize,
    pub notice: Option<Notice>,
    /// Failures absorbed while loading the index.
    pub load_failures: usize,
    /// The index is missing at least one resource.
    pub index_partial: bool,
}

impl AppState {
    pub fn input_buffer(&self) -> &str {
        self.input_buffer.as_str()
    }
    pub fn input_cursor(&self) -> usize {
        self.input_cursor
    }

    /// Popular searches show only for an untouched input; whitespace counts as a query.
    pub fn query_is_empty(&self) -> bool {
        self.input_buffer.is_empty()
    }

    pub fn selected_tag(&self) -> &'static str {
        POPULAR_SEARCHES[self.tag_index % POPULAR_SEARCHES.len()]
    }
}

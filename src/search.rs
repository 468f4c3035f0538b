//! Query state for one search box: the raw text, the loaded index, and the
//! results derived from both.

use std::sync::Arc;

use tracing::debug;

use crate::index::SearchIndex;
use crate::loader::LoadState;
use crate::matcher::{match_query, QueryResult};

#[derive(Debug, Default)]
pub struct SearchSession {
    query: String,
    index: Option<Arc<SearchIndex>>,
    state: LoadState,
    results: QueryResult,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &QueryResult {
        &self.results
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    pub fn index(&self) -> Option<&SearchIndex> {
        self.index.as_deref()
    }

    pub fn mark_loading(&mut self) {
        if self.state == LoadState::Unloaded {
            self.state = LoadState::Loading;
        }
    }

    /// Installs the index and re-runs the current query. Returns `false` when
    /// an index was already installed; readiness never goes back.
    pub fn install_index(&mut self, index: Arc<SearchIndex>) -> bool {
        if self.ready() {
            debug!("search index already installed; ignoring");
            return false;
        }
        self.index = Some(index);
        self.state = LoadState::Ready;
        self.refresh();
        true
    }

    /// Stores the raw text and re-filters. Before the index is ready the
    /// results stay empty.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.results = match &self.index {
            Some(index) if self.state == LoadState::Ready => match_query(&self.query, index),
            _ => QueryResult::default(),
        };
        debug!(
            query = %self.query,
            matches = self.results.total(),
            "search results refreshed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{FeedItem, HomeSection};

    fn index() -> Arc<SearchIndex> {
        Arc::new(SearchIndex::from_documents(
            vec![HomeSection {
                section_title: Some("New Apps".into()),
                items: vec![FeedItem {
                    name: "Photo Editor".into(),
                    cate: "Photography".into(),
                    ..FeedItem::default()
                }],
            }],
            Vec::new(),
        ))
    }

    #[test]
    fn queries_before_ready_yield_nothing() {
        let mut session = SearchSession::new();
        assert_eq!(session.state(), LoadState::Unloaded);
        session.mark_loading();
        session.set_query("photo");
        assert_eq!(session.state(), LoadState::Loading);
        assert!(session.results().is_empty());
        assert_eq!(session.query(), "photo");
    }

    #[test]
    fn installing_index_reruns_pending_query() {
        let mut session = SearchSession::new();
        session.mark_loading();
        session.set_query("photo");
        assert!(session.install_index(index()));
        assert!(session.ready());
        assert_eq!(session.results().apps.len(), 1);

        session.set_query("   ");
        assert!(session.results().is_empty());
        session.set_query("PHOTOGRAPHY");
        assert_eq!(session.results().apps[0].name, "Photo Editor");
    }

    #[test]
    fn ready_is_terminal() {
        let mut session = SearchSession::new();
        session.mark_loading();
        assert!(session.install_index(index()));
        assert!(!session.install_index(Arc::new(SearchIndex::default())));
        session.mark_loading();
        assert_eq!(session.state(), LoadState::Ready);
        assert_eq!(session.index().map(SearchIndex::len), Some(1));
    }
}

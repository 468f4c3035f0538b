//! One-shot loader for the search index.
//!
//! Both documents are fetched concurrently and joined. Each resource degrades
//! on its own: a failed home feed leaves apps and games empty, a failed
//! article list leaves articles empty. Failures are logged and reported, never
//! retried, and the loader always settles so the search input never waits on it.

use std::time::Instant;

use reqwest::Url;
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, info, warn};

use crate::cancel::CancelToken;
use crate::config::SearchConfig;
use crate::error::{ConfigError, LoadError, Resource};
use crate::feed::{self, ArticleRecord, HomeSection};
use crate::index::SearchIndex;

/// `Unloaded -> Loading -> Ready`; `Ready` is terminal for the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loading,
    Ready,
}

/// Outcome of one load. `index` holds whatever could be built.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub index: SearchIndex,
    pub failures: Vec<LoadError>,
    /// The load stopped before both fetches settled: cancelled, or the task died.
    pub cancelled: bool,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && !self.cancelled
    }
}

pub struct IndexLoader {
    client: reqwest::Client,
    home_url: Url,
    article_url: Url,
}

impl IndexLoader {
    pub fn new(config: &SearchConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ConfigError::Client)?;
        Ok(Self {
            client,
            home_url: config.home_url()?,
            article_url: config.article_url()?,
        })
    }

    /// Issues both fetches together and settles when both do, or when
    /// `cancel` fires, whichever comes first.
    pub async fn load(&self, cancel: &CancelToken) -> LoadReport {
        let started = Instant::now();
        let fetches = async {
            tokio::join!(
                self.fetch(Resource::HomeFeed, &self.home_url, feed::parse_home),
                self.fetch(Resource::ArticleList, &self.article_url, feed::parse_articles),
            )
        };

        tokio::select! {
            _ = cancel.cancelled() => {
                info!("search index load cancelled");
                LoadReport { cancelled: true, ..LoadReport::default() }
            }
            (home, articles) = fetches => {
                let report = assemble(home, articles);
                info!(
                    apps = report.index.apps().len(),
                    games = report.index.games().len(),
                    articles = report.index.articles().len(),
                    failures = report.failures.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "search index ready"
                );
                report
            }
        }
    }

    /// Runs [`load`](Self::load) on `runtime`. Dropping the returned handle
    /// before the report arrives cancels the load.
    pub fn spawn(self, runtime: &Handle) -> LoadHandle {
        let cancel = CancelToken::new();
        let (tx, rx) = oneshot::channel();
        let token = cancel.clone();
        runtime.spawn(async move {
            let report = self.load(&token).await;
            if tx.send(report).is_err() {
                debug!("search index report dropped; requester is gone");
            }
        });
        LoadHandle {
            cancel,
            rx: Some(rx),
        }
    }

    async fn fetch<T>(
        &self,
        resource: Resource,
        url: &Url,
        parse: fn(&[u8]) -> serde_json::Result<T>,
    ) -> Result<T, LoadError> {
        debug!(%resource, %url, "fetching");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| LoadError::Request { resource, source })?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status { resource, status });
        }
        let body = response
            .bytes()
            .await
            .map_err(|source| LoadError::Request { resource, source })?;
        parse(&body).map_err(|source| LoadError::Decode { resource, source })
    }
}

fn assemble(
    home: Result<Vec<HomeSection>, LoadError>,
    articles: Result<Vec<ArticleRecord>, LoadError>,
) -> LoadReport {
    let mut failures = Vec::new();
    let home = home.unwrap_or_else(|err| {
        warn!(error = %err, "failed to load search data");
        failures.push(err);
        Vec::new()
    });
    let articles = articles.unwrap_or_else(|err| {
        warn!(error = %err, "failed to load search data");
        failures.push(err);
        Vec::new()
    });
    LoadReport {
        index: SearchIndex::from_documents(home, articles),
        failures,
        cancelled: false,
    }
}

/// Requester's side of a spawned load.
pub struct LoadHandle {
    cancel: CancelToken,
    rx: Option<oneshot::Receiver<LoadReport>>,
}

impl LoadHandle {
    /// A handle whose report is already available.
    pub fn ready(index: SearchIndex) -> Self {
        Self::settled(LoadReport {
            index,
            ..LoadReport::default()
        })
    }

    pub fn settled(report: LoadReport) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(report);
        Self {
            cancel: CancelToken::new(),
            rx: Some(rx),
        }
    }

    /// Non-blocking poll. Yields the report exactly once.
    pub fn try_take(&mut self) -> Option<LoadReport> {
        let rx = self.rx.as_mut()?;
        let report = match rx.try_recv() {
            Ok(report) => report,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => {
                warn!("search index task ended without a report");
                LoadReport {
                    cancelled: true,
                    ..LoadReport::default()
                }
            }
        };
        self.rx = None;
        Some(report)
    }

    pub fn is_finished(&self) -> bool {
        self.rx.is_none()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl Drop for LoadHandle {
    fn drop(&mut self) {
        if !self.is_finished() {
            self.cancel();
        }
    }
}

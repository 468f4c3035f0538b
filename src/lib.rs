//! Search core for the storefront catalog: loads the home feed and article
//! list once, then filters them in memory on every keystroke.

pub mod cancel;
pub mod config;
pub mod error;
pub mod feed;
pub mod index;
pub mod loader;
pub mod matcher;
pub mod search;

pub use cancel::CancelToken;
pub use config::SearchConfig;
pub use error::{ConfigError, LoadError, Resource};
pub use index::{ArticleEntry, Category, IndexEntry, SearchIndex};
pub use loader::{IndexLoader, LoadHandle, LoadReport, LoadState};
pub use matcher::{match_query, GroupKind, Hit, QueryResult, ResultGroup};
pub use search::SearchSession;

//! Case-insensitive substring filter over a [`SearchIndex`].

use serde::Serialize;

use crate::index::{ArticleEntry, IndexEntry, SearchIndex};

/// Matches per group, each a subsequence of the index list in index order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub apps: Vec<IndexEntry>,
    pub games: Vec<IndexEntry>,
    pub articles: Vec<ArticleEntry>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupKind {
    Apps,
    Games,
    Articles,
}

impl GroupKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Apps => "Apps",
            Self::Games => "Games",
            Self::Articles => "Articles",
        }
    }
}

/// A single matched entry, borrowed from a [`QueryResult`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit<'a> {
    Listing(&'a IndexEntry),
    Article(&'a ArticleEntry),
}

impl<'a> Hit<'a> {
    pub fn title(&self) -> &'a str {
        match *self {
            Self::Listing(entry) => &entry.name,
            Self::Article(article) => &article.title,
        }
    }

    /// Category label for listings; articles have none.
    pub fn subtitle(&self) -> Option<&'a str> {
        match *self {
            Self::Listing(entry) => Some(&entry.category),
            Self::Article(_) => None,
        }
    }

    pub fn target(&self) -> Option<&'a str> {
        let link = match *self {
            Self::Listing(entry) => entry.target_link.as_str(),
            Self::Article(article) => article.target_link.as_str(),
        };
        (!link.is_empty()).then_some(link)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultGroup<'a> {
    pub kind: GroupKind,
    pub hits: Vec<Hit<'a>>,
}

impl QueryResult {
    pub fn total(&self) -> usize {
        self.apps.len() + self.games.len() + self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Display view: at most `limit` entries per group.
    pub fn truncated(&self, limit: usize) -> QueryResult {
        QueryResult {
            apps: self.apps.iter().take(limit).cloned().collect(),
            games: self.games.iter().take(limit).cloned().collect(),
            articles: self.articles.iter().take(limit).cloned().collect(),
        }
    }

    /// The three groups in display order: apps, games, articles.
    pub fn groups(&self) -> Vec<ResultGroup<'_>> {
        vec![
            ResultGroup {
                kind: GroupKind::Apps,
                hits: self.apps.iter().map(Hit::Listing).collect(),
            },
            ResultGroup {
                kind: GroupKind::Games,
                hits: self.games.iter().map(Hit::Listing).collect(),
            },
            ResultGroup {
                kind: GroupKind::Articles,
                hits: self.articles.iter().map(Hit::Article).collect(),
            },
        ]
    }

    /// Every hit in display order.
    pub fn hits(&self) -> impl Iterator<Item = Hit<'_>> {
        self.apps
            .iter()
            .map(Hit::Listing)
            .chain(self.games.iter().map(Hit::Listing))
            .chain(self.articles.iter().map(Hit::Article))
    }

    /// Target of the first hit, apps before games before articles.
    pub fn first_target(&self) -> Option<&str> {
        self.hits().next().and_then(|hit| hit.target())
    }
}

/// Lower-cased, trimmed needle; `None` when nothing is left to search for.
pub fn normalize_query(raw: &str) -> Option<String> {
    let needle = raw.trim().to_lowercase();
    (!needle.is_empty()).then_some(needle)
}

/// Filters the index. A blank query yields empty groups, never the full index.
pub fn match_query(query: &str, index: &SearchIndex) -> QueryResult {
    let Some(needle) = normalize_query(query) else {
        return QueryResult::default();
    };
    QueryResult {
        apps: filter_listings(index.apps(), &needle),
        games: filter_listings(index.games(), &needle),
        articles: index
            .articles()
            .iter()
            .filter(|article| contains_folded(&article.title, &needle))
            .cloned()
            .collect(),
    }
}

fn filter_listings(entries: &[IndexEntry], needle: &str) -> Vec<IndexEntry> {
    entries
        .iter()
        .filter(|entry| {
            contains_folded(&entry.name, needle) || contains_folded(&entry.category, needle)
        })
        .cloned()
        .collect()
}

fn contains_folded(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}

//! In-memory search index built once from the two source documents.

use serde::Serialize;

use crate::feed::{ArticleRecord, FeedItem, HomeSection};

/// Substring a section title must contain for its items to count as games.
///
/// This follows the content pipeline's naming convention, not an explicit
/// field: a section renamed to "Gaming" would silently become apps.
pub const GAMES_MARKER: &str = "Games";

/// An app or game listing. Entries have no stable id; position is identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub name: String,
    pub category: String,
    pub icon_path: String,
    pub target_link: String,
    pub rating: String,
}

impl From<FeedItem> for IndexEntry {
    fn from(item: FeedItem) -> Self {
        Self {
            name: item.name,
            category: item.cate,
            icon_path: item.hidden_img_src,
            target_link: item.coverlink_href,
            rating: item.rating,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleEntry {
    pub title: String,
    pub image_path: String,
    pub target_link: String,
}

impl From<ArticleRecord> for ArticleEntry {
    fn from(record: ArticleRecord) -> Self {
        Self {
            title: record.title,
            image_path: record.image,
            target_link: record.url,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Apps,
    Games,
}

/// Case-sensitive containment of [`GAMES_MARKER`]; untitled sections are apps.
pub fn classify_section(title: Option<&str>) -> Category {
    match title {
        Some(title) if title.contains(GAMES_MARKER) => Category::Games,
        _ => Category::Apps,
    }
}

/// Immutable snapshot read by the matcher. Lists keep feed order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchIndex {
    apps: Vec<IndexEntry>,
    games: Vec<IndexEntry>,
    articles: Vec<ArticleEntry>,
}

impl SearchIndex {
    pub fn from_documents(home: Vec<HomeSection>, articles: Vec<ArticleRecord>) -> Self {
        let mut apps = Vec::new();
        let mut games = Vec::new();
        for section in home {
            let bucket = match classify_section(section.section_title.as_deref()) {
                Category::Games => &mut games,
                Category::Apps => &mut apps,
            };
            bucket.extend(section.items.into_iter().map(IndexEntry::from));
        }
        Self {
            apps,
            games,
            articles: articles.into_iter().map(ArticleEntry::from).collect(),
        }
    }

    pub fn apps(&self) -> &[IndexEntry] {
        &self.apps
    }

    pub fn games(&self) -> &[IndexEntry] {
        &self.games
    }

    pub fn articles(&self) -> &[ArticleEntry] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.apps.len() + self.games.len() + self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> FeedItem {
        FeedItem {
            name: name.into(),
            ..FeedItem::default()
        }
    }

    fn section(title: Option<&str>, names: &[&str]) -> HomeSection {
        HomeSection {
            section_title: title.map(str::to_string),
            items: names.iter().map(|n| item(n)).collect(),
        }
    }

    fn names(entries: &[IndexEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn sections_split_on_games_in_title() {
        let index = SearchIndex::from_documents(
            vec![
                section(Some("Top Games"), &["Chess Master", "Kart Rush"]),
                section(Some("New Apps"), &["Photo Editor"]),
            ],
            Vec::new(),
        );
        assert_eq!(names(index.games()), ["Chess Master", "Kart Rush"]);
        assert_eq!(names(index.apps()), ["Photo Editor"]);
    }

    #[test]
    fn classification_is_case_sensitive_and_defaults_to_apps() {
        assert_eq!(classify_section(Some("Hot Games This Week")), Category::Games);
        assert_eq!(classify_section(Some("Minigames")), Category::Apps);
        assert_eq!(classify_section(Some("GAMES")), Category::Apps);
        assert_eq!(classify_section(None), Category::Apps);
    }

    #[test]
    fn sections_keep_feed_order_across_groups() {
        let index = SearchIndex::from_documents(
            vec![
                section(Some("Editors' Choice"), &["A"]),
                section(Some("Puzzle Games"), &["G1"]),
                section(None, &["B", "C"]),
                section(Some("Casual Games"), &["G2"]),
            ],
            vec![ArticleRecord {
                title: "Guide".into(),
                ..ArticleRecord::default()
            }],
        );
        assert_eq!(names(index.apps()), ["A", "B", "C"]);
        assert_eq!(names(index.games()), ["G1", "G2"]);
        assert_eq!(index.articles()[0].title, "Guide");
        assert_eq!(index.len(), 6);
    }

    #[test]
    fn feed_fields_map_onto_entry_fields() {
        let entry = IndexEntry::from(FeedItem {
            name: "Photo Editor".into(),
            cate: "Photography".into(),
            hidden_img_src: "assets/icons/photo.png".into(),
            coverlink_href: "/details/com.photo/1".into(),
            rating: "4.7".into(),
        });
        assert_eq!(entry.category, "Photography");
        assert_eq!(entry.icon_path, "assets/icons/photo.png");
        assert_eq!(entry.target_link, "/details/com.photo/1");

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["targetLink"], "/details/com.photo/1");
    }
}

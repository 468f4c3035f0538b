//! Wire schemas for the home feed and article list documents.
//!
//! The feeds come from an external content pipeline, so every field is
//! optional on the wire: missing or `null` text becomes `""`, and a section
//! whose `items` is not an array contributes nothing. Records that are not
//! JSON objects are skipped one by one rather than failing the document.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// One titled group of listings in the home feed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct HomeSection {
    #[serde(default, deserialize_with = "optional_title")]
    pub section_title: Option<String>,
    #[serde(default, deserialize_with = "list_or_empty")]
    pub items: Vec<FeedItem>,
}

/// An app or game listing as the home feed spells it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FeedItem {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub cate: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub hidden_img_src: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub coverlink_href: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub rating: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ArticleRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: String,
}

/// The home feed must be a JSON array; its non-object sections are skipped.
pub fn parse_home(bytes: &[u8]) -> serde_json::Result<Vec<HomeSection>> {
    parse_list(bytes, "home feed section")
}

pub fn parse_articles(bytes: &[u8]) -> serde_json::Result<Vec<ArticleRecord>> {
    parse_list(bytes, "article record")
}

fn parse_list<T: DeserializeOwned>(bytes: &[u8], kind: &'static str) -> serde_json::Result<Vec<T>> {
    match serde_json::from_slice(bytes)? {
        Value::Array(values) => Ok(records(values, kind)),
        other => Err(serde_json::Error::custom(format!(
            "expected an array of records, found {}",
            json_kind(&other)
        ))),
    }
}

/// Deserializes each element on its own, dropping the ones that aren't records.
fn records<T: DeserializeOwned>(values: Vec<Value>, kind: &'static str) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(position, value)| {
            if !value.is_object() {
                warn!(kind, position, found = json_kind(&value), "skipping non-object record");
                return None;
            }
            serde_json::from_value(value)
                .map_err(|err| warn!(kind, position, error = %err, "skipping malformed record"))
                .ok()
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Strings pass through, numbers and booleans keep their JSON text, anything else is empty.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn optional_title<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn list_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => records(values, "home feed item"),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_feed_fields_default_when_missing() {
        let raw = br#"[
            {"section_title": "Top Games", "items": [{"name": "Chess Master", "rating": 4.5}]},
            {"items": null},
            {"section_title": 7, "items": {"not": "a list"}}
        ]"#;
        let sections = parse_home(raw).unwrap();
        assert_eq!(sections.len(), 3);

        let chess = &sections[0].items[0];
        assert_eq!(chess.name, "Chess Master");
        assert_eq!(chess.cate, "");
        assert_eq!(chess.rating, "4.5");

        assert_eq!(sections[1].section_title, None);
        assert!(sections[1].items.is_empty());
        assert_eq!(sections[2].section_title, None);
        assert!(sections[2].items.is_empty());
    }

    #[test]
    fn stray_items_are_skipped_without_losing_their_neighbours() {
        let raw = br#"[
            {"section_title": "New Apps", "items": [
                {"name": "Photo Editor", "cate": "Photography"}, null, "junk", 3
            ]},
            null,
            ["nested"],
            {"section_title": "Top Games", "items": [{"name": "Chess Master"}]}
        ]"#;
        let sections = parse_home(raw).unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].items.len(), 1);
        assert_eq!(sections[0].items[0].name, "Photo Editor");
        assert_eq!(sections[1].section_title.as_deref(), Some("Top Games"));
        assert_eq!(sections[1].items[0].name, "Chess Master");
    }

    #[test]
    fn stray_articles_are_skipped() {
        let raw = br#"[{"title": "Best Photo Apps 2024"}, null, true]"#;
        let articles = parse_articles(raw).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Best Photo Apps 2024");
    }

    #[test]
    fn article_list_ignores_unknown_fields() {
        let raw = br#"[
            {"title": "Best Photo Apps 2024", "image": "a.png", "url": "/article/x/1", "id": 9}
        ]"#;
        let articles = parse_articles(raw).unwrap();
        assert_eq!(
            articles,
            vec![ArticleRecord {
                title: "Best Photo Apps 2024".into(),
                image: "a.png".into(),
                url: "/article/x/1".into(),
            }]
        );
    }

    #[test]
    fn non_array_document_is_rejected() {
        let err = parse_home(br#"{"sections": []}"#).unwrap_err();
        assert!(err.to_string().contains("found an object"));
        assert!(parse_articles(b"<html>").is_err());
    }
}

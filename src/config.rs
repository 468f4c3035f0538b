//! Resource locations and display settings, read from the environment.

use std::time::Duration;

use reqwest::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_HOME_PATH: &str = "/assets/data/json/home.json";
pub const DEFAULT_ARTICLE_PATH: &str = "/assets/data/json/article.json";
/// Entries shown per group in the results panel.
pub const DEFAULT_DISPLAY_LIMIT: usize = 8;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_BASE_URL: &str = "STOREFRONT_BASE_URL";
pub const ENV_HOME_PATH: &str = "STOREFRONT_HOME_PATH";
pub const ENV_ARTICLE_PATH: &str = "STOREFRONT_ARTICLE_PATH";
pub const ENV_DISPLAY_LIMIT: &str = "STOREFRONT_DISPLAY_LIMIT";
pub const ENV_TIMEOUT_SECS: &str = "STOREFRONT_TIMEOUT_SECS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Site root; always http(s) with a path ending in `/`.
    pub base_url: Url,
    pub home_path: String,
    pub article_path: String,
    pub display_limit: usize,
    pub request_timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL"),
            home_path: DEFAULT_HOME_PATH.to_string(),
            article_path: DEFAULT_ARTICLE_PATH.to_string(),
            display_limit: DEFAULT_DISPLAY_LIMIT,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SearchConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable source. Blank values and unparsable
    /// numbers fall back to the defaults; a base URL that isn't http(s) is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let text = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let number = |name: &str, min: u64| {
            text(name)
                .and_then(|raw| raw.parse::<u64>().ok())
                .filter(|value| *value >= min)
        };

        let base_url = match text(ENV_BASE_URL) {
            Some(raw) => parse_base_url(&raw)?,
            None => defaults.base_url,
        };
        Ok(Self {
            base_url,
            home_path: text(ENV_HOME_PATH).unwrap_or(defaults.home_path),
            article_path: text(ENV_ARTICLE_PATH).unwrap_or(defaults.article_path),
            display_limit: number(ENV_DISPLAY_LIMIT, 1)
                .map(|n| n as usize)
                .unwrap_or(defaults.display_limit),
            request_timeout: number(ENV_TIMEOUT_SECS, 1)
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        })
    }

    pub fn home_url(&self) -> Result<Url, ConfigError> {
        self.resolve_link(&self.home_path)
    }

    pub fn article_url(&self) -> Result<Url, ConfigError> {
        self.resolve_link(&self.article_path)
    }

    /// Resolves a feed link the way a browser on the site would: absolute and
    /// protocol-relative links keep their host, `/path` is site-root relative,
    /// and bare paths land under the base URL's path.
    pub fn resolve_link(&self, link: &str) -> Result<Url, ConfigError> {
        let link = link.trim();
        let url = self.base_url.join(link).map_err(|err| ConfigError::InvalidUrl {
            value: link.to_string(),
            reason: err.to_string(),
        })?;
        require_http(url, link)
    }
}

/// Parses a site root. Only http(s) is accepted, and the path gets a trailing
/// `/` so relative links resolve beneath it.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let raw = raw.trim();
    let mut url = Url::parse(raw).map_err(|err| ConfigError::InvalidUrl {
        value: raw.to_string(),
        reason: err.to_string(),
    })?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    require_http(url, raw)
}

fn require_http(url: Url, raw: &str) -> Result<Url, ConfigError> {
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigError::UnsupportedScheme {
            value: raw.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    fn store_config() -> SearchConfig {
        SearchConfig {
            base_url: parse_base_url("https://apps.example.com/store").unwrap(),
            ..SearchConfig::default()
        }
    }

    fn resolved(config: &SearchConfig, link: &str) -> String {
        config.resolve_link(link).unwrap().to_string()
    }

    #[test]
    fn defaults_point_at_the_static_fixtures() {
        let config = SearchConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(
            config.home_url().unwrap().as_str(),
            "http://127.0.0.1:3000/assets/data/json/home.json"
        );
        assert_eq!(
            config.article_url().unwrap().as_str(),
            "http://127.0.0.1:3000/assets/data/json/article.json"
        );
    }

    #[test]
    fn environment_overrides_and_rejects_bad_numbers() {
        let config = SearchConfig::from_lookup(lookup(&[
            (ENV_BASE_URL, " https://apps.example.com/ "),
            (ENV_ARTICLE_PATH, "data/articles.json"),
            (ENV_DISPLAY_LIMIT, "0"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_HOME_PATH, "   "),
        ]))
        .unwrap();
        assert_eq!(config.base_url.as_str(), "https://apps.example.com/");
        assert_eq!(
            config.article_url().unwrap().as_str(),
            "https://apps.example.com/data/articles.json"
        );
        assert_eq!(config.home_path, DEFAULT_HOME_PATH);
        assert_eq!(config.display_limit, DEFAULT_DISPLAY_LIMIT);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn base_url_must_be_http() {
        let err = SearchConfig::from_lookup(lookup(&[(ENV_BASE_URL, "ftp://files.example.com")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnsupportedScheme { ref scheme, .. } if scheme == "ftp"
        ));
        assert!(matches!(
            parse_base_url("apps.example.com"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert_eq!(
            parse_base_url("HTTPS://Apps.Example.com/store").unwrap().as_str(),
            "https://apps.example.com/store/"
        );
    }

    #[test]
    fn links_resolve_against_base_url() {
        let config = store_config();
        assert_eq!(
            resolved(&config, "/details/com.photo/1"),
            "https://apps.example.com/details/com.photo/1"
        );
        assert_eq!(
            resolved(&config, "details/com.photo/1"),
            "https://apps.example.com/store/details/com.photo/1"
        );
        assert_eq!(
            resolved(&config, "https://cdn.example.com/x"),
            "https://cdn.example.com/x"
        );
    }

    #[test]
    fn protocol_relative_and_upper_case_links_keep_their_host() {
        let config = store_config();
        assert_eq!(
            resolved(&config, "//cdn.example.com/app/1"),
            "https://cdn.example.com/app/1"
        );
        assert_eq!(
            resolved(&config, "HTTPS://other.example.com/x"),
            "https://other.example.com/x"
        );
    }

    #[test]
    fn non_http_links_are_refused() {
        let config = store_config();
        assert!(matches!(
            config.resolve_link("javascript:alert(1)"),
            Err(ConfigError::UnsupportedScheme { .. })
        ));
    }
}

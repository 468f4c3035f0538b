//! Load failures for the two index resources, and configuration errors.

use std::fmt;

use thiserror::Error;

/// Which of the two source documents a failure belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    HomeFeed,
    ArticleList,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HomeFeed => f.write_str("home feed"),
            Self::ArticleList => f.write_str("article list"),
        }
    }
}

/// A resource could not be fetched or decoded. Always absorbed by the loader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{resource}: request failed: {source}")]
    Request {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },

    #[error("{resource}: HTTP {status}")]
    Status {
        resource: Resource,
        status: reqwest::StatusCode,
    },

    #[error("{resource}: invalid JSON: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn resource(&self) -> Resource {
        match self {
            Self::Request { resource, .. }
            | Self::Status { resource, .. }
            | Self::Decode { resource, .. } => *resource,
        }
    }
}

/// Settings that cannot produce a usable HTTP(S) location.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("unsupported scheme {scheme:?} in {value:?}; only http and https are supported")]
    UnsupportedScheme { value: String, scheme: String },

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}

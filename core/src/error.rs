use std::path::PathBuf;

use thiserror::Error;

/// Why a `yyyy-MM-dd HH:mm:ss` timestamp could not be turned into an instant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("timestamp {0:?} does not match yyyy-MM-dd HH:mm:ss")]
    Pattern(String),
    #[error("timestamp {0:?} names an invalid calendar date")]
    InvalidDate(String),
    #[error("timestamp {0:?} names an invalid time of day")]
    InvalidTime(String),
    #[error("timestamp {0:?} does not exist in the local time zone")]
    NonexistentLocalTime(String),
}

/// A `YYYY-MM` or `YYYY-MM-DD` argument that does not name a real month or day.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{input:?} is not a valid {expected}")]
pub struct CalendarParseError {
    pub input: String,
    pub expected: &'static str,
}

/// Failures while reading the static source documents.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{document}: invalid JSON at `{json_path}`: {source}")]
    Decode {
        document: &'static str,
        json_path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub(crate) fn decode(
        document: &'static str,
        err: serde_path_to_error::Error<serde_json::Error>,
    ) -> Self {
        LoadError::Decode {
            document,
            json_path: err.path().to_string(),
            source: err.into_inner(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Failure classes a single run can end in.
///
/// Transport failures come from the fetcher, `NotFound` from the extractor,
/// `Parse` and `Schema` from the aggregator. `Io` covers local documents.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("HTTP {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("no tour data found in document")]
    NotFound,

    #[error("payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unexpected payload shape at `{path}`: {detail}")]
    Schema { path: String, detail: String },

    #[error("encoding report: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    NotFound,
    Parse,
    Schema,
    Encode,
    Io,
}

impl ScrapeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScrapeError::Timeout { .. }
            | ScrapeError::Status { .. }
            | ScrapeError::Request { .. } => ErrorKind::Transport,
            ScrapeError::NotFound => ErrorKind::NotFound,
            ScrapeError::Parse(_) => ErrorKind::Parse,
            ScrapeError::Schema { .. } => ErrorKind::Schema,
            ScrapeError::Encode(_) => ErrorKind::Encode,
            ScrapeError::Io { .. } => ErrorKind::Io,
        }
    }

    pub(crate) fn schema(path: impl Into<String>, detail: impl Into<String>) -> Self {
        ScrapeError::Schema {
            path: path.into(),
            detail: detail.into(),
        }
    }

    /// Map a reqwest failure onto the transport variants.
    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ScrapeError::Timeout {
                url: url.to_string(),
            }
        } else if let Some(status) = err.status() {
            ScrapeError::Status {
                url: url.to_string(),
                status,
            }
        } else {
            ScrapeError::Request {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_schema_are_distinct_kinds() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let parse = ScrapeError::from(parse);
        let schema = ScrapeError::schema("props", "missing key `props`");

        assert_eq!(parse.kind(), ErrorKind::Parse);
        assert_eq!(schema.kind(), ErrorKind::Schema);
        assert_ne!(parse.to_string(), schema.to_string());
        assert_eq!(ScrapeError::NotFound.kind(), ErrorKind::NotFound);
    }
}

// src/fetch/mod.rs

use reqwest::Client;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, instrument};
use url::Url;

use crate::config::FetchConfig;
use crate::error::ScrapeError;

pub mod urls;

/// Where the schedule document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Year(i32),
    Current,
    File(PathBuf),
}

pub fn build_client(cfg: &FetchConfig) -> Result<Client, ScrapeError> {
    Client::builder()
        .timeout(cfg.timeout)
        .user_agent(concat!("champscraper/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ScrapeError::from_reqwest(cfg.base_url.as_str(), e))
}

/// GET `url` once and return the body; no retries.
#[instrument(level = "info", skip(client), fields(url = %url))]
pub async fn fetch_document(client: &Client, url: &Url) -> Result<String, ScrapeError> {
    debug!("Fetching schedule page");
    let body = client
        .get(url.clone())
        .send()
        .await
        .and_then(|resp| resp.error_for_status())
        .map_err(|e| ScrapeError::from_reqwest(url.as_str(), e))?
        .text()
        .await
        .map_err(|e| ScrapeError::from_reqwest(url.as_str(), e))?;
    debug!(bytes = body.len(), "Fetched schedule page");
    Ok(body)
}

/// Resolve `source` to the raw HTML document.
pub async fn load_document(
    client: &Client,
    cfg: &FetchConfig,
    source: &Source,
) -> Result<String, ScrapeError> {
    match source {
        Source::File(path) => {
            debug!(path = %path.display(), "Reading local document");
            fs::read_to_string(path)
                .await
                .map_err(|source| ScrapeError::Io {
                    path: path.clone(),
                    source,
                })
        }
        Source::Year(year) => {
            fetch_document(client, &urls::schedule_url(&cfg.base_url, Some(*year))).await
        }
        Source::Current => fetch_document(client, &urls::schedule_url(&cfg.base_url, None)).await,
    }
}

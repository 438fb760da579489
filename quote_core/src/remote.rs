//! Remote quote endpoint.
//!
//! The endpoint is a single URL: `GET` returns the snapshot as a JSON array,
//! `POST` accepts one newly created quote. [`RemoteSource`] is the seam the
//! reconciler talks to; [`HttpRemote`] is the blocking `reqwest` implementation.
//!
//! Decoding is lenient about the record shape because the default mock endpoint
//! serves blog posts: `text` falls back to `body`, `category` falls back to
//! `title` and then to `"Uncategorized"`.

use crate::config::SyncConfig;
use crate::error::QuoteError;
use crate::model::record::QuoteRecord;
use crate::net::LIMIT_PARAM;
use crate::result::Result;
use log::{debug, info};
use reqwest::blocking::Client;
use serde::Deserialize;

/// Category given to remote records that carry neither `category` nor `title`.
pub const FALLBACK_CATEGORY: &str = "Uncategorized";

/// Source of remote snapshots and sink for new local quotes.
pub trait RemoteSource: Send + Sync {
    /// Fetch the current remote snapshot.
    ///
    /// Transport failures, non-success statuses and undecodable bodies come back
    /// as `Err`; implementations never panic.
    fn fetch(&self) -> Result<Vec<QuoteRecord>>;

    /// Submit a newly created local quote. The response body is not used.
    fn submit(&self, record: &QuoteRecord) -> Result<()>;
}

/// One element of the remote snapshot as served on the wire.
#[derive(Debug, Deserialize)]
struct RemoteEntry {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

impl RemoteEntry {
    fn into_record(self) -> QuoteRecord {
        let text = first_filled([self.text, self.body]).unwrap_or_default();
        let category = first_filled([self.category, self.title])
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string());
        QuoteRecord {
            id: self.id,
            text,
            category,
        }
    }
}

fn first_filled<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

/// Decode a snapshot body into records.
pub fn decode_snapshot(body: &str) -> Result<Vec<QuoteRecord>> {
    let entries: Vec<RemoteEntry> = serde_json::from_str(body)?;
    Ok(entries.into_iter().map(RemoteEntry::into_record).collect())
}

/// Blocking HTTP client for the quote endpoint.
pub struct HttpRemote {
    client: Client,
    config: SyncConfig,
}

impl HttpRemote {
    /// Build a client honouring `config.timeout`.
    pub fn new(config: SyncConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }
}

impl RemoteSource for HttpRemote {
    fn fetch(&self) -> Result<Vec<QuoteRecord>> {
        let mut request = self.client.get(&self.config.server_url);
        if let Some(limit) = self.config.limit {
            request = request.query(&[(LIMIT_PARAM, limit)]);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::HttpStatus(status.as_u16()));
        }

        let body = response.text()?;
        let records = decode_snapshot(&body)?;
        debug!("Fetched {} quotes from {}", records.len(), self.config.server_url);
        Ok(records)
    }

    fn submit(&self, record: &QuoteRecord) -> Result<()> {
        let response = self
            .client
            .post(&self.config.server_url)
            .json(record)
            .send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::HttpStatus(status.as_u16()));
        }
        info!("Quote submitted to {} ({})", self.config.server_url, status);
        Ok(())
    }
}

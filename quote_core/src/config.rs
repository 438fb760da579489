//! Sync configuration.
//!
//! `SyncConfig` collects the knobs shared by the HTTP client and the scheduler.
//! Defaults come from [`crate::net`]; the command-line client overrides them from
//! flags and environment variables.

use crate::net::{DEFAULT_SERVER_URL, REQUEST_TIMEOUT_SECS, SYNC_INTERVAL_SECS};
use std::time::Duration;

/// Endpoint and timing settings for remote reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Endpoint serving the snapshot (`GET`) and accepting new quotes (`POST`).
    pub server_url: String,
    /// Optional cap on the number of records requested per fetch.
    pub limit: Option<usize>,
    /// Period of the scheduled sync cycle.
    pub interval: Duration,
    /// Upper bound for one HTTP request.
    pub timeout: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            server_url: DEFAULT_SERVER_URL.to_string(),
            limit: None,
            interval: Duration::from_secs(SYNC_INTERVAL_SECS),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl SyncConfig {
    /// Default settings pointed at `server_url`.
    pub fn for_endpoint(server_url: &str) -> Self {
        SyncConfig {
            server_url: server_url.trim().to_string(),
            ..Self::default()
        }
    }
}

//! Shared networking constants used by the reconciler and the client.

/// Mock endpoint the quote keeper synchronizes with by default.
pub const DEFAULT_SERVER_URL: &str = "https://jsonplaceholder.typicode.com/posts";
/// Period between two scheduled sync cycles, in seconds.
pub const SYNC_INTERVAL_SECS: u64 = 30;
/// Upper bound for a single HTTP request, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
/// Query parameter understood by the mock endpoint to cap the result count.
pub const LIMIT_PARAM: &str = "_limit";

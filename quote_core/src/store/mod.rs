//! Persistence for the quote collection.
//!
//! The host provides a plain string key-value medium ([`KeyValueStore`]); the
//! [`LocalStore`] layers the quote collection and the two UI scalars (last
//! selected category, last viewed index) on top of it.
//!
//! - `memory` — in-process map, shared between clones; used by tests and dry runs.
//! - `file` — one file per key inside a data directory; used by the client.
//! - `local` — `LocalStore`, the owner of the in-memory collection.

pub mod file;
pub mod local;
pub mod memory;

pub use file::FileStore;
pub use local::LocalStore;
pub use memory::MemoryStore;

use crate::result::Result;

/// Key holding the serialized quote collection.
pub const QUOTES_KEY: &str = "quotesData";
/// Key holding the last selected category filter.
pub const SELECTED_CATEGORY_KEY: &str = "selectedCategory";
/// Key holding the index of the last shown quote within the filtered set.
pub const LAST_VIEWED_KEY: &str = "lastViewedQuote";

/// Minimal string key-value medium the quote store persists into.
///
/// Implementations overwrite on `set` and treat `remove` of a missing key as a no-op.
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any prior value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key` if present.
    fn remove(&mut self, key: &str) -> Result<()>;
}

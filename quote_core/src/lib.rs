//!
//! Core of the quote keeper: the local quote collection and its reconciliation
//! with a remote endpoint.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `model` — `QuoteRecord` and the events broadcast to subscribers.
//! - `store` — key-value persistence and the `LocalStore` owning the collection.
//! - `reconcile` — the pure last-writer-wins merge keyed by record id.
//! - `remote` — `RemoteSource` seam and the blocking HTTP client.
//! - `exchange` — JSON export/import of the collection.
//! - `bus` — `EventBus` fanning events out to presentation layers.
//! - `book` — `QuoteBook`, the service the client drives.
//! - `sync` — sync cycles and the fixed-period scheduler.
//! - `config` / `net` — endpoint and timing settings.
#![warn(missing_docs)]
pub mod book;
pub mod bus;
pub mod config;
pub mod error;
pub mod exchange;
pub mod model;
pub mod net;
pub mod reconcile;
pub mod remote;
pub mod result;
pub mod store;
pub mod sync;

pub use book::QuoteBook;
pub use bus::EventBus;
pub use config::SyncConfig;
pub use error::QuoteError;
pub use model::event::{NoticeLevel, Notification, QuoteEvent};
pub use model::record::QuoteRecord;
pub use reconcile::{Reconciliation, reconcile};
pub use remote::{HttpRemote, RemoteSource};
pub use result::Result;
pub use sync::{CycleOutcome, Reconciler, SyncHandle, SyncScheduler};

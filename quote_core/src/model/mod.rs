//! Domain models shared by the store, the reconciler and the client.
//!
//! - `record` — `QuoteRecord`, its invariants and the built-in default set.
//! - `event` — `QuoteEvent`/`Notification` values broadcast to subscribers.
pub mod event;
pub mod record;

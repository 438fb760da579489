//! Local quote store.
//!
//! `LocalStore` owns the in-memory, insertion-ordered quote collection and keeps
//! the key-value medium in step with it. Every write serializes the full
//! collection (no incremental diff). Persistence failures are returned to the
//! caller unrecovered; only a corrupt persisted payload is recovered here.

use super::{KeyValueStore, LAST_VIEWED_KEY, QUOTES_KEY, SELECTED_CATEGORY_KEY};
use crate::model::record::QuoteRecord;
use crate::result::Result;
use log::{debug, warn};

/// Owner of the quote collection and of its persisted form.
pub struct LocalStore {
    backend: Box<dyn KeyValueStore>,
    records: Vec<QuoteRecord>,
}

impl LocalStore {
    /// Open the store on `backend` and load the persisted collection.
    pub fn open(backend: impl KeyValueStore + 'static) -> Result<Self> {
        let mut store = LocalStore {
            backend: Box::new(backend),
            records: Vec::new(),
        };
        store.records = store.load_all()?;
        debug!("Local store opened with {} quotes", store.records.len());
        Ok(store)
    }

    /// Read the persisted collection.
    ///
    /// - Returns the built-in defaults when nothing is persisted.
    /// - A payload that does not decode is discarded from the medium and an empty
    ///   collection is returned.
    pub fn load_all(&mut self) -> Result<Vec<QuoteRecord>> {
        let Some(raw) = self.backend.get(QUOTES_KEY)? else {
            return Ok(QuoteRecord::defaults());
        };
        match serde_json::from_str::<Vec<QuoteRecord>>(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!("Discarding corrupt persisted quotes: {}", e);
                self.backend.remove(QUOTES_KEY)?;
                Ok(Vec::new())
            }
        }
    }

    /// Persist `records` as the full collection and make them the in-memory state.
    pub fn save_all(&mut self, records: Vec<QuoteRecord>) -> Result<()> {
        let payload = serde_json::to_string(&records)?;
        self.backend.set(QUOTES_KEY, &payload)?;
        self.records = records;
        Ok(())
    }

    /// Append one record and persist the collection.
    pub fn append(&mut self, record: QuoteRecord) -> Result<()> {
        self.extend(vec![record])
    }

    /// Append `records` in order and persist the collection once.
    ///
    /// The records go after the currently persisted collection, which may hold
    /// writes made by another store on the same medium since this one loaded.
    pub fn extend(&mut self, records: Vec<QuoteRecord>) -> Result<()> {
        let mut next = self.load_all()?;
        next.extend(records);
        self.save_all(next)
    }

    /// Replace the in-memory collection with the persisted one.
    pub fn refresh(&mut self) -> Result<&[QuoteRecord]> {
        self.records = self.load_all()?;
        Ok(&self.records)
    }

    /// Current in-memory collection.
    pub fn records(&self) -> &[QuoteRecord] {
        &self.records
    }

    /// Last selected category; empty means "all categories".
    pub fn selected_category(&self) -> Result<String> {
        Ok(self.backend.get(SELECTED_CATEGORY_KEY)?.unwrap_or_default())
    }

    /// Remember the category filter.
    pub fn set_selected_category(&mut self, category: &str) -> Result<()> {
        self.backend.set(SELECTED_CATEGORY_KEY, category)
    }

    /// Index of the last shown quote within the filtered set, if any.
    pub fn last_viewed_index(&self) -> Result<Option<usize>> {
        Ok(self
            .backend
            .get(LAST_VIEWED_KEY)?
            .and_then(|raw| raw.trim().parse().ok()))
    }

    /// Remember the index of the quote just shown.
    pub fn set_last_viewed_index(&mut self, index: usize) -> Result<()> {
        self.backend.set(LAST_VIEWED_KEY, &index.to_string())
    }

    /// Forget the last viewed index (nothing could be shown).
    pub fn clear_last_viewed_index(&mut self) -> Result<()> {
        self.backend.remove(LAST_VIEWED_KEY)
    }
}

//! Quote book: the application service behind the client.
//!
//! `QuoteBook` owns the [`LocalStore`] and publishes every mutation on the
//! [`EventBus`], so presentation code only ever reacts to `QuoteEvent`s. All
//! entry points that mutate take `&mut self`; callers sharing a book across
//! threads wrap it in a `Mutex`, which serializes persist calls.

use crate::bus::EventBus;
use crate::exchange;
use crate::model::event::{Notification, QuoteEvent};
use crate::model::record::{QuoteRecord, next_id};
use crate::reconcile::{Reconciliation, reconcile};
use crate::result::Result;
use crate::store::{KeyValueStore, LocalStore};
use log::{info, warn};
use rand::Rng;

/// Owner of the local quote collection.
pub struct QuoteBook {
    store: LocalStore,
    bus: EventBus,
}

impl QuoteBook {
    /// Wrap an already opened store.
    pub fn new(store: LocalStore, bus: EventBus) -> Self {
        Self { store, bus }
    }

    /// Open a store on `backend` and wrap it.
    pub fn open(backend: impl KeyValueStore + 'static, bus: EventBus) -> Result<Self> {
        Ok(Self::new(LocalStore::open(backend)?, bus))
    }

    /// Current collection in insertion order.
    pub fn quotes(&self) -> &[QuoteRecord] {
        self.store.records()
    }

    /// Bus the book publishes on.
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Create a quote from user input.
    ///
    /// Both fields are trimmed and must be non-blank. The new record gets the next
    /// identifier (max persisted id + 1) so it can later be matched remotely.
    ///
    /// Ids are only unique locally. A collection without any id (the built-in
    /// defaults) hands out 1, 2, ... which the remote endpoint may already use; the
    /// next sync then overwrites the added quote with the remote one.
    pub fn add_quote(&mut self, text: &str, category: &str) -> Result<QuoteRecord> {
        let record = QuoteRecord::new(text, category)?;
        let current = self.store.refresh()?;
        if current.iter().all(|existing| existing.id.is_none()) {
            warn!("No quote carries an id yet; id 1 may collide with a remote quote");
        }
        let record = record.with_id(next_id(current));
        self.store.append(record.clone())?;
        info!("Added quote {:?} in category {}", record.id, record.category);
        self.publish_changed();
        Ok(record)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for record in self.quotes() {
            if !categories.contains(&record.category) {
                categories.push(record.category.clone());
            }
        }
        categories
    }

    /// Last selected category; empty means all.
    pub fn selected_category(&self) -> Result<String> {
        self.store.selected_category()
    }

    /// Persist the category filter. An empty string selects every category.
    pub fn select_category(&mut self, category: &str) -> Result<()> {
        self.store.set_selected_category(category.trim())
    }

    /// Quotes matching `category`, or all of them for an empty category.
    pub fn filtered(&self, category: &str) -> Vec<&QuoteRecord> {
        self.quotes()
            .iter()
            .filter(|record| category.is_empty() || record.category == category)
            .collect()
    }

    /// Pick a random quote from the selected category.
    ///
    /// The chosen position within the filtered set is remembered as the last
    /// viewed index; when nothing matches, the index is cleared and `None` returned.
    pub fn random_quote<R: Rng>(&mut self, rng: &mut R) -> Result<Option<QuoteRecord>> {
        let category = self.selected_category()?;
        let picked = {
            let candidates = self.filtered(&category);
            if candidates.is_empty() {
                None
            } else {
                let index = rng.random_range(0..candidates.len());
                Some((index, candidates[index].clone()))
            }
        };

        match picked {
            Some((index, record)) => {
                self.store.set_last_viewed_index(index)?;
                Ok(Some(record))
            }
            None => {
                self.store.clear_last_viewed_index()?;
                Ok(None)
            }
        }
    }

    /// Index of the last shown quote within its filtered set.
    pub fn last_viewed_index(&self) -> Result<Option<usize>> {
        self.store.last_viewed_index()
    }

    /// Append every quote of an imported document.
    ///
    /// Nothing is applied when validation fails; the failure is both returned and
    /// published as an error notice. No duplicate detection is performed.
    pub fn import_json(&mut self, document: &str) -> Result<usize> {
        let records = match exchange::parse_import(document) {
            Ok(records) => records,
            Err(e) => {
                warn!("Import rejected: {}", e);
                self.bus
                    .notify(Notification::error(format!("Error importing quotes: {}", e)));
                return Err(e);
            }
        };

        let count = records.len();
        self.store.extend(records)?;
        info!("Imported {} quotes", count);
        self.publish_changed();
        self.bus
            .notify(Notification::info("Quotes imported successfully!"));
        Ok(count)
    }

    /// Serialize the whole collection for export.
    pub fn export_json(&self) -> Result<String> {
        exchange::export_json(self.quotes())
    }

    /// Merge a remote snapshot and persist the result if anything changed.
    ///
    /// The merge runs against the persisted collection rather than the copy
    /// loaded at open, so quotes written meanwhile through the same medium survive.
    pub fn apply_remote(&mut self, remote: &[QuoteRecord]) -> Result<Reconciliation> {
        let merge = reconcile(self.store.refresh()?, remote);
        if merge.changed {
            self.store.save_all(merge.records.clone())?;
            info!(
                "Reconciled with remote: {} added, {} updated",
                merge.added, merge.updated
            );
            self.publish_changed();
        }
        Ok(merge)
    }

    fn publish_changed(&self) {
        self.bus.publish(QuoteEvent::CollectionChanged {
            len: self.quotes().len(),
        });
    }
}

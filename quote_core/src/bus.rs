//! Event broadcasting to presentation layers.
//!
//! The `EventBus` fans every `QuoteEvent` out to all subscribed receivers using
//! `crossbeam_channel`. A subscriber registers with [`EventBus::subscribe`] and
//! drains its own unbounded channel at its own pace.
//!
//! Design notes:
//! - Broadcast is best-effort: if sending to a subscriber fails (receiver dropped),
//!   that subscriber is removed.
//! - The bus is cheap to clone; clones share the same subscriber list.

use crate::model::event::{Notification, QuoteEvent};
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, warn};
use std::sync::{Arc, Mutex};

/// Broadcast hub for `QuoteEvent`s.
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Arc<Mutex<Vec<Sender<QuoteEvent>>>>,
}

impl EventBus {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber and return the receiving side of its channel.
    pub fn subscribe(&self) -> Receiver<QuoteEvent> {
        let (tx, rx) = unbounded::<QuoteEvent>();
        match self.subscribers.lock() {
            Ok(mut subscribers) => {
                subscribers.push(tx);
                debug!("Event bus: new subscriber. Total subscribers: {}", subscribers.len());
            }
            Err(e) => warn!("Event bus lock poisoned, subscriber not registered: {}", e),
        }
        rx
    }

    /// Send `event` to every live subscriber, dropping the ones that hung up.
    pub fn publish(&self, event: QuoteEvent) {
        match self.subscribers.lock() {
            Ok(mut subscribers) => {
                subscribers.retain(|tx| tx.send(event.clone()).is_ok());
            }
            Err(e) => warn!("Event bus lock poisoned, event dropped: {}", e),
        }
    }

    /// Shorthand for publishing a `QuoteEvent::Notice`.
    pub fn notify(&self, notification: Notification) {
        self.publish(QuoteEvent::Notice(notification));
    }

    /// Number of currently registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().map(|s| s.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subscriber_receives_each_event() {
        let bus = EventBus::new();
        let first = bus.subscribe();
        let second = bus.subscribe();

        bus.publish(QuoteEvent::CollectionChanged { len: 3 });

        assert_eq!(first.try_recv().unwrap(), QuoteEvent::CollectionChanged { len: 3 });
        assert_eq!(second.try_recv().unwrap(), QuoteEvent::CollectionChanged { len: 3 });
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let bus = EventBus::new();
        let kept = bus.subscribe();
        drop(bus.subscribe());

        bus.publish(QuoteEvent::Shutdown);

        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(kept.try_recv().unwrap(), QuoteEvent::Shutdown);
    }
}

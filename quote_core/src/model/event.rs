//! Events broadcast to presentation layers.
//!
//! Data mutation never touches the presentation directly: the `QuoteBook` and the
//! sync scheduler publish `QuoteEvent`s on the [`crate::bus::EventBus`] and
//! whoever renders the quotes subscribes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum_macros::Display;

/// Severity of a user-visible notification.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Transient, user-visible message (the notification banner of the widget).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// How loudly the message should be shown.
    pub level: NoticeLevel,
    /// Human-readable text.
    pub message: String,
    /// Creation time.
    pub at: DateTime<Utc>,
}

impl Notification {
    /// Informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Info, message)
    }

    /// Recovered problem worth mentioning.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Warning, message)
    }

    /// Failed operation.
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Error, message)
    }

    fn with_level(level: NoticeLevel, message: impl Into<String>) -> Self {
        Notification {
            level,
            message: message.into(),
            at: Utc::now(),
        }
    }
}

/// Message sent to every subscriber of the event bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteEvent {
    /// The local collection was replaced or extended.
    CollectionChanged {
        /// Number of records after the change.
        len: usize,
    },
    /// Something the user should see.
    Notice(Notification),
    /// Global shutdown notification for all consumers.
    Shutdown,
}

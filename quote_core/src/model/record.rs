//! Quote record data model.
//!
//! A `QuoteRecord` is a text/category pair, optionally tagged with a numeric
//! identifier once it has been seen by (or submitted to) the remote endpoint.
//! Records without an identifier are local-only: the reconciler never matches
//! them against remote data.

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::result::Result;

/// Single quotation with its category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Identifier shared with the remote endpoint; `None` for local-only records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Quotation body.
    pub text: String,
    /// Free-form category label.
    pub category: String,
}

impl QuoteRecord {
    /// Build a local-only record from user input, trimming both fields.
    ///
    /// - Returns: `QuoteError::InvalidQuote` when either field is blank after trimming.
    pub fn new(text: &str, category: &str) -> Result<Self> {
        let record = QuoteRecord {
            id: None,
            text: text.trim().to_string(),
            category: category.trim().to_string(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Same record tagged with `id`.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Check the non-empty invariants on `text` and `category`.
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(QuoteError::InvalidQuote("quote text is empty".to_string()));
        }
        if self.category.trim().is_empty() {
            return Err(QuoteError::InvalidQuote("quote category is empty".to_string()));
        }
        Ok(())
    }

    /// `true` when `other` carries the same text and category.
    pub fn same_content(&self, other: &QuoteRecord) -> bool {
        self.text == other.text && self.category == other.category
    }

    /// Quotes shown when nothing has been persisted yet.
    pub fn defaults() -> Vec<QuoteRecord> {
        [
            ("The only way to do great work is to love what you do.", "Motivation"),
            ("Life is what happens when you're busy making other plans.", "Life"),
            ("Get busy living or get busy dying.", "Life"),
            (
                "Success usually comes to those who are too busy to be looking for it.",
                "Success",
            ),
        ]
        .into_iter()
        .map(|(text, category)| QuoteRecord {
            id: None,
            text: text.to_string(),
            category: category.to_string(),
        })
        .collect()
    }
}

/// Identifier for the next locally created record: max existing id + 1, or 1.
pub fn next_id(records: &[QuoteRecord]) -> i64 {
    records
        .iter()
        .filter_map(|r| r.id)
        .max()
        .map(|max| max + 1)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_and_rejects_blank_fields() {
        let record = QuoteRecord::new("  hello ", " misc ").unwrap();
        assert_eq!(record.text, "hello");
        assert_eq!(record.category, "misc");
        assert!(record.id.is_none());

        assert!(matches!(QuoteRecord::new("   ", "misc"), Err(QuoteError::InvalidQuote(_))));
        assert!(matches!(QuoteRecord::new("text", ""), Err(QuoteError::InvalidQuote(_))));
    }

    #[test]
    fn next_id_follows_the_largest_identifier() {
        assert_eq!(next_id(&[]), 1);
        assert_eq!(next_id(&QuoteRecord::defaults()), 1);

        let records = vec![
            QuoteRecord::new("a", "x").unwrap().with_id(7),
            QuoteRecord::new("b", "x").unwrap(),
            QuoteRecord::new("c", "x").unwrap().with_id(3),
        ];
        assert_eq!(next_id(&records), 8);
    }

    #[test]
    fn missing_id_is_omitted_from_json() {
        let json = serde_json::to_string(&QuoteRecord::new("a", "b").unwrap()).unwrap();
        assert_eq!(json, r#"{"text":"a","category":"b"}"#);
    }
}

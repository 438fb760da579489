//! JSON file exchange.
//!
//! Export writes the full collection as a pretty-printed JSON array. Import
//! accepts a JSON array whose elements are objects with string `text` and
//! `category` fields. An integer `id` is kept; any other `id` value is dropped
//! and the record is imported without one. Import is all or nothing: the first
//! invalid element rejects the whole document.

use crate::error::QuoteError;
use crate::model::record::QuoteRecord;
use crate::result::Result;
use log::warn;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// File name suggested for exports.
pub const EXPORT_FILE_NAME: &str = "quotes.json";

/// Serialize `records` as the exported document.
pub fn export_json(records: &[QuoteRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Validate an imported document and return its records in document order.
///
/// - Returns: `QuoteError::Import` when the document is not JSON, not an array,
///   or holds an element without string `text`/`category` (or with blank ones).
pub fn parse_import(document: &str) -> Result<Vec<QuoteRecord>> {
    let value: Value = serde_json::from_str(document)
        .map_err(|e| QuoteError::Import(format!("invalid JSON: {}", e)))?;

    let Value::Array(items) = value else {
        return Err(QuoteError::Import(
            "invalid format: JSON must be an array of quotes".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, mut item)| {
            if let Value::Object(fields) = &mut item {
                if fields.get("id").is_some_and(|id| !id.is_i64()) {
                    warn!("Ignoring non-integer id of quote at index {}", index);
                    fields.remove("id");
                }
            }
            let record: QuoteRecord = serde_json::from_value(item).map_err(|e| {
                QuoteError::Import(format!("invalid quote object at index {}: {}", index, e))
            })?;
            record.validate().map_err(|e| {
                QuoteError::Import(format!("invalid quote object at index {}: {}", index, e))
            })?;
            Ok(record)
        })
        .collect()
}

/// Write the exported document to `path`.
pub fn export_to_file(path: &Path, records: &[QuoteRecord]) -> Result<()> {
    fs::write(path, export_json(records)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_integer_id_is_dropped() {
        let records =
            parse_import(r#"[{"id":"x","text":"a","category":"b"},{"id":2.5,"text":"c","category":"d"}]"#)
                .unwrap();

        assert_eq!(
            records,
            vec![
                QuoteRecord::new("a", "b").unwrap(),
                QuoteRecord::new("c", "d").unwrap(),
            ]
        );
    }

    #[test]
    fn integer_id_is_kept() {
        let records = parse_import(r#"[{"id":7,"text":"a","category":"b"}]"#).unwrap();
        assert_eq!(records[0].id, Some(7));
    }

    #[test]
    fn missing_text_rejects_document() {
        assert!(matches!(
            parse_import(r#"[{"text":"a","category":"b"},{"category":"b"}]"#),
            Err(QuoteError::Import(_))
        ));
    }
}

//! Local/remote merge.
//!
//! [`reconcile`] folds a remote snapshot into the local collection under a
//! last-writer-wins policy keyed by record id: the remote snapshot always wins a
//! conflict on `(text, category)`, unknown ids are appended, and nothing is ever
//! deleted. The function is pure; persisting the result is the caller's job.
//!
//! Properties:
//! - Deterministic: the output depends only on the order of `local` and `remote`.
//! - Idempotent: merging the same remote snapshot twice changes nothing the second time.
//! - Records without an id on the local side are never indexed and never touched.

use crate::model::record::QuoteRecord;
use log::debug;
use std::collections::HashMap;

/// Outcome of one merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Local collection after the merge.
    pub records: Vec<QuoteRecord>,
    /// `true` when at least one record was added or overwritten.
    pub changed: bool,
    /// Remote records appended because their id was unknown locally.
    pub added: usize,
    /// Local records whose text/category were overwritten by the remote values.
    pub updated: usize,
}

/// Merge `remote` into a copy of `local`.
pub fn reconcile(local: &[QuoteRecord], remote: &[QuoteRecord]) -> Reconciliation {
    let mut records = local.to_vec();
    let mut index: HashMap<i64, usize> = HashMap::new();
    for (pos, record) in records.iter().enumerate() {
        if let Some(id) = record.id {
            index.entry(id).or_insert(pos);
        }
    }

    let mut added = 0;
    let mut updated = 0;
    for (id, incoming) in collapse_remote(remote) {
        match index.get(&id) {
            None => {
                index.insert(id, records.len());
                records.push(incoming.clone());
                added += 1;
            }
            Some(&pos) => {
                let current = &mut records[pos];
                if !current.same_content(incoming) {
                    debug!("Remote overwrites quote {}", id);
                    current.text = incoming.text.clone();
                    current.category = incoming.category.clone();
                    updated += 1;
                }
            }
        }
    }

    Reconciliation {
        records,
        changed: added + updated > 0,
        added,
        updated,
    }
}

/// Usable remote records keyed by id, in first-seen order.
///
/// Records without an id or with blank fields are skipped; a repeated id keeps
/// its first position but takes the values of its last occurrence.
fn collapse_remote(remote: &[QuoteRecord]) -> Vec<(i64, &QuoteRecord)> {
    let mut ordered: Vec<(i64, &QuoteRecord)> = Vec::with_capacity(remote.len());
    let mut slots: HashMap<i64, usize> = HashMap::new();

    for record in remote {
        let Some(id) = record.id else {
            debug!("Skipping remote quote without id");
            continue;
        };
        if let Err(e) = record.validate() {
            debug!("Skipping remote quote {}: {}", id, e);
            continue;
        }
        match slots.get(&id) {
            Some(&slot) => ordered[slot] = (id, record),
            None => {
                slots.insert(id, ordered.len());
                ordered.push((id, record));
            }
        }
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(id: i64, text: &str) -> QuoteRecord {
        QuoteRecord::new(text, "c").unwrap().with_id(id)
    }

    #[test]
    fn repeated_remote_ids_keep_first_position_and_last_values() {
        let remote = vec![quote(1, "old"), quote(2, "two"), quote(1, "new")];
        let collapsed = collapse_remote(&remote);

        assert_eq!(collapsed.len(), 2);
        assert_eq!(collapsed[0].0, 1);
        assert_eq!(collapsed[0].1.text, "new");
        assert_eq!(collapsed[1].0, 2);
    }

    #[test]
    fn unusable_remote_records_are_skipped() {
        let blank = QuoteRecord {
            id: Some(4),
            text: "  ".to_string(),
            category: "c".to_string(),
        };
        let remote = vec![QuoteRecord::new("no id", "c").unwrap(), blank];

        assert!(collapse_remote(&remote).is_empty());
    }
}

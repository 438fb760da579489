use quote_core::{QuoteRecord, reconcile};

fn quote(id: i64, text: &str, category: &str) -> QuoteRecord {
    QuoteRecord::new(text, category).unwrap().with_id(id)
}

fn local_only(text: &str, category: &str) -> QuoteRecord {
    QuoteRecord::new(text, category).unwrap()
}

#[test]
fn empty_inputs_produce_no_change() {
    let merge = reconcile(&[], &[]);
    assert!(merge.records.is_empty());
    assert!(!merge.changed);
    assert_eq!((merge.added, merge.updated), (0, 0));
}

#[test]
fn unknown_remote_ids_are_appended_unchanged() {
    let local = vec![quote(1, "one", "a")];
    let remote = vec![quote(2, "two", "b"), quote(3, "three", "c")];

    let merge = reconcile(&local, &remote);

    assert!(merge.changed);
    assert_eq!(merge.added, 2);
    assert_eq!(merge.records, vec![quote(1, "one", "a"), quote(2, "two", "b"), quote(3, "three", "c")]);
}

#[test]
fn conflicting_ids_take_remote_values() {
    let local = vec![quote(1, "mine", "local"), quote(2, "same", "x")];
    let remote = vec![quote(1, "theirs", "remote"), quote(2, "same", "x")];

    let merge = reconcile(&local, &remote);

    assert!(merge.changed);
    assert_eq!(merge.updated, 1);
    assert_eq!(merge.added, 0);
    assert_eq!(merge.records[0], quote(1, "theirs", "remote"));
    assert_eq!(merge.records[1], quote(2, "same", "x"));
}

#[test]
fn category_only_difference_counts_as_conflict() {
    let local = vec![quote(5, "text", "old")];
    let remote = vec![quote(5, "text", "new")];

    let merge = reconcile(&local, &remote);

    assert!(merge.changed);
    assert_eq!(merge.records[0].category, "new");
}

#[test]
fn local_only_records_survive_unchanged() {
    let local = vec![
        local_only("draft", "mine"),
        quote(9, "kept", "mine"),
        local_only("another", "mine"),
    ];
    let remote = vec![quote(1, "new", "remote")];

    let merge = reconcile(&local, &remote);

    assert_eq!(merge.records.len(), 4);
    assert_eq!(&merge.records[..3], &local[..]);
    assert_eq!(merge.records[3], quote(1, "new", "remote"));
}

#[test]
fn identical_snapshot_is_a_no_op() {
    let local = vec![quote(1, "a", "x"), local_only("b", "y")];
    let remote = vec![quote(1, "a", "x")];

    let merge = reconcile(&local, &remote);

    assert!(!merge.changed);
    assert_eq!(merge.records, local);
}

#[test]
fn merge_is_idempotent() {
    let local = vec![quote(1, "stale", "x"), local_only("mine", "y"), quote(4, "four", "z")];
    let remote = vec![
        quote(1, "fresh", "x"),
        quote(2, "two", "y"),
        quote(2, "two again", "y"),
        quote(7, "seven", "z"),
    ];

    let once = reconcile(&local, &remote);
    let twice = reconcile(&once.records, &remote);

    assert!(once.changed);
    assert!(!twice.changed);
    assert_eq!(twice.records, once.records);
}

#[test]
fn merge_is_deterministic() {
    let local = vec![quote(3, "c", "x"), quote(1, "a", "x")];
    let remote = vec![quote(10, "j", "y"), quote(1, "A", "x"), quote(5, "e", "y")];

    let first = reconcile(&local, &remote);
    let second = reconcile(&local, &remote);

    assert_eq!(first, second);
    let ids: Vec<Option<i64>> = first.records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![Some(3), Some(1), Some(10), Some(5)]);
}

#[test]
fn remote_records_without_id_are_ignored() {
    let local = vec![quote(1, "a", "x")];
    let remote = vec![local_only("floating", "x")];

    let merge = reconcile(&local, &remote);

    assert!(!merge.changed);
    assert_eq!(merge.records, local);
}

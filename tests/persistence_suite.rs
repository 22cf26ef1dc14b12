use std::fs;
use std::path::Path;

use tempfile::tempdir;
use uuid::Uuid;
use wealthify_core::{
    records::{TransactionDraft, TransactionKind, UserId},
    store::{JsonStore, RecordStore},
    utils::store_dir_in,
};

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}

#[test]
fn atomic_save_failure_preserves_original_file() {
    let temp = tempdir().unwrap();
    let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();
    let user = UserId::new("u1");

    store
        .add_transaction(
            &user,
            TransactionDraft::new("Groceries", 42.0, TransactionKind::Expense, None),
        )
        .expect("initial save");

    let collection = store_dir_in(temp.path()).join("transactions.json");
    let original = fs::read_to_string(&collection).expect("read original file");

    // Create a directory that collides with the temp file name to force the
    // write to fail.
    let tmp_path = tmp_path_for(&collection);
    fs::create_dir_all(&tmp_path).unwrap();

    let result = store.add_transaction(
        &user,
        TransactionDraft::new("Rent", 900.0, TransactionKind::Expense, None),
    );
    assert!(
        result.is_err(),
        "expected the write to fail when the temp path is a directory"
    );

    let current = fs::read_to_string(&collection).expect("read after failure");
    assert_eq!(current, original, "failed save must not clobber the file");
}

#[test]
fn malformed_records_load_with_defaults() {
    let temp = tempdir().unwrap();
    let dir = store_dir_in(temp.path());
    fs::create_dir_all(&dir).unwrap();
    let id = Uuid::new_v4();
    // No amount, category, or created_at on the stored record.
    fs::write(
        dir.join("transactions.json"),
        format!(r#"[{{"id":"{id}","user_id":"u1","title":"Old","type":"income"}}]"#),
    )
    .unwrap();

    let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();
    let snapshot = store.snapshot(&UserId::new("u1")).unwrap();
    assert_eq!(snapshot.transactions.len(), 1);
    assert_eq!(snapshot.transactions[0].amount, 0.0);
    assert!(snapshot.transactions[0].created_at.is_none());
    assert_eq!(snapshot.transactions[0].category_label(), "General");
}

#[test]
fn snapshot_orders_by_creation_time_regardless_of_file_order() {
    let temp = tempdir().unwrap();
    let dir = store_dir_in(temp.path());
    fs::create_dir_all(&dir).unwrap();
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    fs::write(
        dir.join("transactions.json"),
        format!(
            r#"[
  {{"id":"{a}","user_id":"u1","title":"Later","amount":1.0,"type":"income","created_at":"2026-02-02T00:00:00Z"}},
  {{"id":"{b}","user_id":"u1","title":"Earlier","amount":1.0,"type":"income","created_at":"2026-01-01T00:00:00Z"}}
]"#
        ),
    )
    .unwrap();

    let store = JsonStore::new(Some(temp.path().to_path_buf())).unwrap();
    let snapshot = store.snapshot(&UserId::new("u1")).unwrap();
    assert_eq!(snapshot.transactions[0].title, "Earlier");
    assert_eq!(snapshot.transactions[1].title, "Later");
}

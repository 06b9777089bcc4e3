use tempfile::TempDir;

use schoolreg::{
    persist::{PersistError, SubjectDb},
    record::SubjectRecord,
};

fn subject(name: &str, room: i32) -> SubjectRecord {
    SubjectRecord {
        name: name.to_string(),
        teacher: "Popescu".to_string(),
        room_number: room,
        class_name: "10A".to_string(),
    }
}

#[test]
fn insert_assigns_increasing_ids() {
    let db = SubjectDb::open_in_memory().expect("open");
    let id1 = db.insert(&subject("Math", 101)).expect("insert");
    let id2 = db.insert(&subject("Physics", 102)).expect("insert");
    assert!(id2 > id1);

    let rows = db.list().expect("list");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], (id1, subject("Math", 101)));
    assert_eq!(rows[1], (id2, subject("Physics", 102)));
}

#[test]
fn update_replaces_every_column() {
    let db = SubjectDb::open_in_memory().expect("open");
    let id = db.insert(&subject("Math", 101)).expect("insert");

    db.update(id, &subject("Algebra", 203)).expect("update");
    let rows = db.list().expect("list");
    assert_eq!(rows, vec![(id, subject("Algebra", 203))]);
}

#[test]
fn update_and_delete_report_missing_rows() {
    let db = SubjectDb::open_in_memory().expect("open");
    match db.update(42, &subject("Math", 101)) {
        Err(PersistError::MissingRow(42)) => {}
        other => panic!("expected missing row, got {other:?}"),
    }
    match db.delete(42) {
        Err(PersistError::MissingRow(42)) => {}
        other => panic!("expected missing row, got {other:?}"),
    }
}

#[test]
fn delete_removes_only_the_target_row() {
    let db = SubjectDb::open_in_memory().expect("open");
    let id1 = db.insert(&subject("Math", 101)).expect("insert");
    let id2 = db.insert(&subject("Physics", 102)).expect("insert");

    db.delete(id1).expect("delete");
    let rows = db.list().expect("list");
    assert_eq!(rows, vec![(id2, subject("Physics", 102))]);
}

#[test]
fn rows_survive_reopening_the_file() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("adm.db");

    let id = {
        let db = SubjectDb::open(&path).expect("open");
        db.insert(&subject("Math", 101)).expect("insert")
    };

    let db = SubjectDb::open(&path).expect("reopen");
    let rows = db.list().expect("list");
    assert_eq!(rows, vec![(id, subject("Math", 101))]);
}

#[test]
fn deleted_ids_are_not_reused() {
    let db = SubjectDb::open_in_memory().expect("open");
    let id1 = db.insert(&subject("Math", 101)).expect("insert");
    db.delete(id1).expect("delete");

    let id2 = db.insert(&subject("Physics", 102)).expect("insert");
    assert!(id2 > id1);
}

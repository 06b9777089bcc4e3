use schoolreg::{
    record::TeacherRecord,
    store::{RecordStore, StoreError},
};

fn teacher(name: &str) -> TeacherRecord {
    TeacherRecord {
        name: name.to_string(),
        address: "Main St 5".to_string(),
        phone: "1234567890".to_string(),
        email: format!("{name}@x.com"),
    }
}

#[test]
fn add_preserves_insertion_order() {
    let mut store = RecordStore::new();
    store.add(teacher("alpha"));
    store.add(teacher("beta"));
    store.add(teacher("alpha")); // duplicates allowed

    let names: Vec<String> = store.list().into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["alpha", "beta", "alpha"]);
}

#[test]
fn list_is_a_snapshot() {
    let mut store = RecordStore::new();
    store.add(teacher("alpha"));

    let snapshot = store.list();
    store.add(teacher("beta"));
    store.remove(0).unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].name, "alpha");
}

#[test]
fn update_replaces_in_place() {
    let mut store = RecordStore::new();
    store.add(teacher("alpha"));
    store.add(teacher("beta"));

    store.update(0, teacher("gamma")).unwrap();
    let names: Vec<String> = store.list().into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["gamma", "beta"]);
}

#[test]
fn update_and_remove_reject_index_at_len() {
    let mut store = RecordStore::new();
    store.add(teacher("alpha"));

    assert_eq!(
        store.update(1, teacher("beta")),
        Err(StoreError::IndexOutOfRange { index: 1, len: 1 })
    );
    assert_eq!(
        store.remove(1).unwrap_err(),
        StoreError::IndexOutOfRange { index: 1, len: 1 }
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn operations_on_empty_store_fail() {
    let mut store: RecordStore<TeacherRecord> = RecordStore::new();
    assert!(store.update(0, teacher("alpha")).is_err());
    assert!(store.remove(0).is_err());
}

#[test]
fn remove_shifts_and_keeps_relative_order() {
    let mut store = RecordStore::new();
    for name in ["a", "b", "c", "d"] {
        store.add(teacher(name));
    }

    let removed = store.remove(1).unwrap();
    assert_eq!(removed.name, "b");

    let names: Vec<String> = store.list().into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["a", "c", "d"]);
    assert_eq!(store.get(1).unwrap().name, "c");
}

#[test]
fn replace_all_discards_prior_contents() {
    let mut store = RecordStore::new();
    store.add(teacher("old"));

    store.replace_all(vec![teacher("new1"), teacher("new2")]);
    let names: Vec<String> = store.list().into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["new1", "new2"]);
}

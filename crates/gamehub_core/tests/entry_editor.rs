use gamehub_core::{
    CatalogStore, Category, EditMode, EntryEditor, EntryFields, MemoryKvStore, SubmitOutcome,
};

fn payload(name: &str) -> EntryFields {
    EntryFields::new(name, "https://example.com/play", Category::Puzzle)
}

#[test]
fn create_mode_appends_new_entry() {
    let mut store = CatalogStore::open(MemoryKvStore::new(), "catalog");
    let mut editor = EntryEditor::new();

    let outcome = editor.submit(&mut store, payload("2048")).unwrap();

    let SubmitOutcome::Created(id) = &outcome else {
        panic!("expected create, got {outcome:?}");
    };
    let created = store.get(id).expect("created entry is stored");
    assert_eq!(created.name, "2048");
    assert_eq!(created.description, "");
    assert_eq!(store.load().len(), 1);
}

#[test]
fn edit_mode_updates_and_preserves_identity_then_returns_to_create() {
    let mut store = CatalogStore::open(MemoryKvStore::new(), "catalog");
    let mut editor = EntryEditor::new();
    editor.submit(&mut store, payload("first")).unwrap();
    let SubmitOutcome::Created(id) = editor.submit(&mut store, payload("second")).unwrap() else {
        panic!("expected create");
    };
    let original = store.get(&id).unwrap().clone();

    editor.begin_edit(id.clone());
    let outcome = editor
        .submit(
            &mut store,
            payload("second, edited").with_description("now with text"),
        )
        .unwrap();

    assert_eq!(outcome, SubmitOutcome::Updated(id.clone()));
    assert_eq!(editor.mode(), &EditMode::Create);
    assert_eq!(store.len(), 2);
    let edited = &store.entries()[1];
    assert_eq!(edited.id, original.id);
    assert_eq!(edited.added_date, original.added_date);
    assert_eq!(edited.name, "second, edited");

    let next = editor.submit(&mut store, payload("third")).unwrap();
    assert!(matches!(next, SubmitOutcome::Created(_)));
    assert_eq!(store.len(), 3);
}

#[test]
fn edit_of_missing_entry_is_reported_and_resets_mode() {
    let mut store = CatalogStore::open(MemoryKvStore::new(), "catalog");
    let mut editor = EntryEditor::new();
    editor.begin_edit("gone");

    let outcome = editor.submit(&mut store, payload("ghost")).unwrap();

    assert_eq!(outcome, SubmitOutcome::NotFound("gone".to_string()));
    assert!(store.is_empty());
    assert!(!editor.is_editing());
}

#[test]
fn persistence_failure_is_returned_and_mode_still_resets() {
    let mut storage = MemoryKvStore::new();
    storage.set_fail_writes(true);
    let mut store = CatalogStore::open(storage, "catalog");
    let mut editor = EntryEditor::new();

    let err = editor.submit(&mut store, payload("lost")).unwrap_err();

    assert!(err.to_string().contains("writes disabled"));
    assert!(store.is_empty());
    assert_eq!(editor.mode(), &EditMode::Create);
}

use chrono::{TimeZone, Utc};
use gamehub_core::{Category, Entry, EntryFields, DESCRIPTION_PLACEHOLDER};

#[test]
fn entry_new_generates_fresh_ids() {
    let fields = EntryFields::new("Robot Fight", "https://example.com/robot", Category::Action);
    let first = Entry::new(fields.clone());
    let second = Entry::new(fields);

    assert_ne!(first.id, second.id);
    assert!(uuid::Uuid::parse_str(&first.id).is_ok());
}

#[test]
fn entry_serialization_uses_stored_field_names() {
    let added = Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap();
    let entry = Entry::with_id(
        "game-2",
        EntryFields::new("俄罗斯方块", "https://zwaley.github.io/russia/", Category::Puzzle)
            .with_description("经典"),
        added,
    );

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["id"], "game-2");
    assert_eq!(json["category"], "puzzle");
    assert_eq!(json["description"], "经典");
    assert_eq!(json["image"], "");
    let stamp = json["addedDate"].as_str().unwrap();
    assert!(stamp.starts_with("2025-03-01T08:30:00"));
    assert_eq!(stamp.parse::<chrono::DateTime<Utc>>().unwrap(), added);
    assert!(json.get("added_date").is_none());
}

#[test]
fn stored_payload_with_unknown_category_and_missing_optionals_loads() {
    let raw = r#"{
        "id": "1712345678901",
        "name": "Snake",
        "url": "https://example.com/snake",
        "category": "retro",
        "addedDate": "2024-04-05T12:00:00.000Z"
    }"#;

    let entry: Entry = serde_json::from_str(raw).unwrap();
    assert_eq!(entry.category, Category::Other("retro".to_string()));
    assert_eq!(entry.description, "");
    assert_eq!(entry.display_description(), DESCRIPTION_PLACEHOLDER);
    assert_eq!(entry.image_ref(), None);

    let back = serde_json::to_value(&entry).unwrap();
    assert_eq!(back["category"], "retro");
}

#[test]
fn apply_fields_keeps_identity() {
    let mut entry = Entry::new(EntryFields::new("old", "https://a/", Category::Casual));
    let id = entry.id.clone();
    let added = entry.added_date;

    entry.apply_fields(
        EntryFields::new("new", "https://b/", Category::Strategy).with_image("cover.png"),
    );

    assert_eq!(entry.id, id);
    assert_eq!(entry.added_date, added);
    assert_eq!(entry.name, "new");
    assert_eq!(entry.image_ref(), Some("cover.png"));
}

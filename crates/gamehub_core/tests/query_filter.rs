use chrono::Utc;
use gamehub_core::{
    default_entries, filter, CatalogQuery, Category, CategoryFilter, Entry, EntryFields,
};

fn catalog() -> Vec<Entry> {
    let mut entries = default_entries(Utc::now());
    entries.push(Entry::new(EntryFields::new(
        "robot fight",
        "https://example.com/robot",
        Category::Action,
    )));
    entries.push(Entry::new(
        EntryFields::new("Arena", "https://example.com/arena", Category::Other("arcade".into()))
            .with_description("Build a giant Robot and win"),
    ));
    entries
}

fn ids<'a>(entries: impl Iterator<Item = &'a Entry>) -> Vec<&'a str> {
    entries.map(|entry| entry.id.as_str()).collect()
}

#[test]
fn all_without_search_returns_catalog_in_order() {
    let entries = catalog();
    let view = ids(filter(&entries, &CategoryFilter::All, ""));
    assert_eq!(view, ids(entries.iter()));
}

#[test]
fn category_filter_keeps_only_exact_tag() {
    let entries = catalog();
    for category in Category::KNOWN {
        let selected = CategoryFilter::Only(category.clone());
        assert!(filter(&entries, &selected, "").all(|entry| entry.category == category));
    }

    let strategy = ids(filter(&entries, &CategoryFilter::Only(Category::Strategy), ""));
    assert_eq!(strategy, vec!["game-3", "game-4"]);

    let arcade = "arcade".parse::<CategoryFilter>().unwrap();
    assert_eq!(filter(&entries, &arcade, "").count(), 1);
}

#[test]
fn search_is_case_insensitive_over_name_and_description() {
    let entries = catalog();
    let hits = filter(&entries, &CategoryFilter::All, "ROBOT")
        .map(|entry| entry.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(hits, vec!["robot fight", "Arena"]);
}

#[test]
fn search_matches_chinese_substrings_in_description() {
    let entries = catalog();
    let hits = ids(filter(&entries, &CategoryFilter::All, "占卜"));
    assert_eq!(hits, vec!["game-1", "game-10"]);
}

#[test]
fn category_and_search_compose_with_and() {
    let entries = catalog();
    let casual = CategoryFilter::Only(Category::Casual);
    let hits = ids(filter(&entries, &casual, "测试"));
    assert_eq!(hits, vec!["game-7", "game-9"]);

    let action = CategoryFilter::Only(Category::Action);
    assert_eq!(filter(&entries, &action, "测试").count(), 0);
}

#[test]
fn view_is_restartable_and_never_mutates_catalog() {
    let entries = catalog();
    let before = entries.clone();

    let view = filter(&entries, &CategoryFilter::Only(Category::Casual), "");
    let first_pass = ids(view.clone());
    let second_pass = ids(view);

    assert_eq!(first_pass, second_pass);
    assert_eq!(entries, before);
}

#[test]
fn query_reports_empty_state_reason() {
    let entries = catalog();

    let no_match = CatalogQuery::new(CategoryFilter::All, "no such game");
    let visible = no_match.apply(&entries).count();
    assert_eq!(visible, 0);
    assert_eq!(
        no_match.empty_state(visible),
        Some(gamehub_core::EmptyState::NoMatches)
    );

    let empty: Vec<Entry> = Vec::new();
    let idle = CatalogQuery::default();
    assert_eq!(
        idle.empty_state(idle.apply(&empty).count()),
        Some(gamehub_core::EmptyState::NoEntries)
    );
}

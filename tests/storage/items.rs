use std::fs;
use tempfile::tempdir;
use watch2gether::storage::{ItemError, ItemStore};

#[test]
fn test_open_missing_file_starts_empty() {
    let dir = tempdir().unwrap();
    let store = ItemStore::open(dir.path().join("items.txt"));

    assert!(store.is_empty());
    assert_eq!(store.display_text(), "");
}

#[test]
fn test_load_missing_file_reports_not_found() {
    let dir = tempdir().unwrap();
    let mut store = ItemStore::new(dir.path().join("items.txt"));

    let err = store.load().unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.path(), dir.path().join("items.txt"));
}

#[test]
fn test_load_existing_file_keeps_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("items.txt");
    fs::write(&path, "X\nY\nZ").unwrap();

    let store = ItemStore::open(&path);
    assert_eq!(store.snapshot(), ["X", "Y", "Z"]);
    assert_eq!(store.display_text(), "X\nY\nZ");
}

#[test]
fn test_load_keeps_blank_lines_and_handles_crlf() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("items.txt");
    fs::write(&path, "A\r\n\r\nB\r\n").unwrap();

    let store = ItemStore::open(&path);
    assert_eq!(store.snapshot(), ["A", "", "B"]);
}

#[test]
fn test_add_appends_and_persists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("items.txt");
    let mut store = ItemStore::new(&path);

    assert_eq!(store.add("  Movie A  "), Ok("Movie A".to_string()));
    assert_eq!(store.add("Movie B"), Ok("Movie B".to_string()));

    assert_eq!(store.len(), 2);
    assert_eq!(store.snapshot().last().map(String::as_str), Some("Movie B"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "Movie A\nMovie B\n");
}

#[test]
fn test_add_rejects_empty_and_whitespace() {
    let dir = tempdir().unwrap();
    let mut store = ItemStore::new(dir.path().join("items.txt"));

    assert_eq!(store.add(""), Err(ItemError::Empty));
    assert_eq!(store.add("   \t "), Err(ItemError::Empty));
    assert!(store.is_empty());
    assert!(!store.path().exists(), "a rejected add must not write the file");
}

#[test]
fn test_add_rejects_exact_duplicate_only() {
    let dir = tempdir().unwrap();
    let mut store = ItemStore::new(dir.path().join("items.txt"));

    store.add("Movie A").unwrap();
    assert_eq!(store.add("Movie A"), Err(ItemError::Duplicate("Movie A".to_string())));
    assert_eq!(store.add(" Movie A "), Err(ItemError::Duplicate("Movie A".to_string())));
    assert_eq!(store.len(), 1);

    // Uniqueness is case-sensitive
    assert!(store.add("movie a").is_ok());
    assert_eq!(store.len(), 2);
}

#[test]
fn test_remove_exact_match() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("items.txt");
    let mut store = ItemStore::new(&path);
    store.add("Movie A").unwrap();
    store.add("Movie B").unwrap();

    assert_eq!(store.remove(" Movie A "), Ok("Movie A".to_string()));
    assert_eq!(store.snapshot(), ["Movie B"]);
    assert!(!store.contains("Movie A"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "Movie B\n");
}

#[test]
fn test_remove_missing_leaves_list_unchanged() {
    let dir = tempdir().unwrap();
    let mut store = ItemStore::new(dir.path().join("items.txt"));
    store.add("Movie A").unwrap();

    assert_eq!(store.remove("movie a"), Err(ItemError::NotFound("movie a".to_string())));
    assert_eq!(store.remove(""), Err(ItemError::NotFound(String::new())));
    assert_eq!(store.snapshot(), ["Movie A"]);
}

#[test]
fn test_remove_takes_first_of_loaded_duplicates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("items.txt");
    fs::write(&path, "A\nB\nA\n").unwrap();

    let mut store = ItemStore::open(&path);
    store.remove("A").unwrap();
    assert_eq!(store.snapshot(), ["B", "A"]);
}

#[test]
fn test_round_trip_through_fresh_instance() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("items.txt");
    let mut store = ItemStore::new(&path);
    for item in ["Spirited Away", "Akira", "Your Lie in April"] {
        store.add(item).unwrap();
    }

    let reloaded = ItemStore::open(&path);
    assert_eq!(reloaded.snapshot(), store.snapshot());
}

#[test]
fn test_save_failure_keeps_item_in_memory() {
    let dir = tempdir().unwrap();
    // A directory cannot be opened for writing
    let mut store = ItemStore::new(dir.path());

    assert_eq!(store.add("Movie A"), Ok("Movie A".to_string()));
    assert_eq!(store.snapshot(), ["Movie A"]);
    assert!(store.save().is_err());
}

#[test]
fn test_invalid_utf8_keeps_every_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("items.txt");
    // Windows-1252 "é" is not valid UTF-8
    fs::write(&path, b"Akira\nAm\xe9lie\nPaprika\nPerfect Blue\n").unwrap();

    let mut store = ItemStore::open(&path);
    assert_eq!(store.snapshot(), ["Akira", "Am\u{FFFD}lie", "Paprika", "Perfect Blue"]);

    // A later save must not drop the lines after the bad byte
    store.add("Tokyo Godfathers").unwrap();
    let saved = fs::read_to_string(&path).unwrap();
    assert_eq!(saved, "Akira\nAm\u{FFFD}lie\nPaprika\nPerfect Blue\nTokyo Godfathers\n");
}

#[test]
fn test_lone_carriage_return_ends_a_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("items.txt");
    fs::write(&path, "A\rB\r\nC\nD").unwrap();

    let store = ItemStore::open(&path);
    assert_eq!(store.snapshot(), ["A", "B", "C", "D"]);
}

use super::{press, press_with, render_lines, test_app, type_text};
use crossterm::event::{KeyCode, KeyModifiers};
use std::path::Path;
use watch2gether::constants::{DEFAULT_BANNER, LABEL_CURRENTLY_WATCHING};
use watch2gether::ui::components::StatusBar;

fn screen_contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

#[test]
fn test_main_window_shows_all_widgets() {
    let (_dir, mut app) = test_app(&["X", "Y", "Z"], Some("Y"));
    let lines = render_lines(&mut app);

    assert!(lines[0].contains(" Watch2gether "), "title on the top border");
    assert!(screen_contains(&lines, "New item"));
    assert!(screen_contains(&lines, "Add Item"));
    assert!(screen_contains(&lines, "Select Random Item"));
    assert!(screen_contains(&lines, "Remove Selected Item"));
    assert!(screen_contains(&lines, "Items (3)"));
    assert!(screen_contains(&lines, LABEL_CURRENTLY_WATCHING));
    assert!(screen_contains(&lines, DEFAULT_BANNER));
}

#[test]
fn test_item_view_lists_items_in_order() {
    let (_dir, mut app) = test_app(&["Perfect Blue", "Paprika"], None);
    let lines = render_lines(&mut app);

    let first = lines.iter().position(|line| line.contains("Perfect Blue")).unwrap();
    let second = lines.iter().position(|line| line.contains("Paprika")).unwrap();
    assert_eq!(second, first + 1);
}

#[test]
fn test_notice_is_drawn_over_the_window() {
    let (_dir, mut app) = test_app(&[], None);
    type_text(&mut app, "Movie A");
    press(&mut app, KeyCode::Enter);

    let lines = render_lines(&mut app);
    assert!(screen_contains(&lines, "Item added: Movie A"));
    assert!(screen_contains(&lines, "Items (1)"));
}

#[test]
fn test_help_dialog_is_drawn() {
    let (_dir, mut app) = test_app(&[], None);
    press(&mut app, KeyCode::F(1));

    let lines = render_lines(&mut app);
    assert!(screen_contains(&lines, "Help"));
    assert!(screen_contains(&lines, "WATCH2GETHER"));
}

#[test]
fn test_status_text() {
    let text = StatusBar::text(1, Path::new("items.txt"));
    assert!(text.starts_with("1 item in items.txt"));

    let text = StatusBar::text(3, Path::new("items.txt"));
    assert!(text.starts_with("3 items in items.txt"));
    assert!(text.contains("F3: random"));
}

#[test]
fn test_scrolling_past_u16_range() {
    let names: Vec<String> = (0..70_000).map(|i| format!("Item {}", i)).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let (_dir, mut app) = test_app(&refs, None);

    render_lines(&mut app);
    press_with(&mut app, KeyCode::End, KeyModifiers::CONTROL);
    let lines = render_lines(&mut app);

    assert!(screen_contains(&lines, "Items (70000)"));
    assert!(screen_contains(&lines, "Item 69999"));
    assert!(!screen_contains(&lines, "Item 0 "));
}

use super::{click, press, press_with, render_lines, test_app, type_text};
use crossterm::event::{KeyCode, KeyModifiers};
use std::fs;
use watch2gether::constants::{NOTICE_ADD_REJECTED, NOTICE_NOTHING_TO_SELECT, NOTICE_REMOVE_REJECTED};
use watch2gether::ui::core::{DialogType, Focus};
use watch2gether::ui::LayoutManager;

fn info(message: &str) -> Option<DialogType> {
    Some(DialogType::Info(message.to_string()))
}

fn rejected(message: &str) -> Option<DialogType> {
    Some(DialogType::Rejected(message.to_string()))
}

#[test]
fn test_enter_in_input_adds_item() {
    let (_dir, mut app) = test_app(&[], None);

    type_text(&mut app, "Movie A");
    assert_eq!(app.input_text(), "Movie A");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.dialog().cloned(), info("Item added: Movie A"));
    assert_eq!(app.input_text(), "");
    assert_eq!(app.items_text(), "Movie A");
    assert_eq!(
        fs::read_to_string(app.watchlist().items().path()).unwrap(),
        "Movie A\n"
    );
}

#[test]
fn test_notice_blocks_other_keys_until_dismissed() {
    let (_dir, mut app) = test_app(&[], None);
    type_text(&mut app, "Movie A");
    press(&mut app, KeyCode::Enter);
    assert!(app.dialog().is_some());

    // Typing and Tab go to the dialog, not the window
    type_text(&mut app, "xyz");
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.input_text(), "");
    assert_eq!(app.focus(), Focus::Input);
    assert!(app.dialog().is_some());

    press(&mut app, KeyCode::Enter);
    assert!(app.dialog().is_none());
    assert_eq!(app.watchlist().items().len(), 1);
}

#[test]
fn test_rejected_add_keeps_input() {
    let (_dir, mut app) = test_app(&["Movie A"], None);

    type_text(&mut app, "Movie A");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.dialog().cloned(), rejected(NOTICE_ADD_REJECTED));
    assert_eq!(app.input_text(), "Movie A");
    assert_eq!(app.watchlist().items().len(), 1);

    press(&mut app, KeyCode::Esc);
    assert!(!app.should_quit(), "Esc closes the dialog first");

    // Blank input is rejected the same way
    let (_dir, mut empty) = test_app(&[], None);
    type_text(&mut empty, "   ");
    press(&mut empty, KeyCode::F(2));
    assert_eq!(empty.dialog().cloned(), rejected(NOTICE_ADD_REJECTED));
    assert!(empty.watchlist().items().is_empty());
}

#[test]
fn test_select_on_empty_list() {
    let (_dir, mut app) = test_app(&[], Some("Earlier pick"));

    press(&mut app, KeyCode::F(3));
    assert_eq!(app.dialog().cloned(), rejected(NOTICE_NOTHING_TO_SELECT));
    assert_eq!(app.watching_text(), "Earlier pick");
}

#[test]
fn test_select_fills_watching_field() {
    let (_dir, mut app) = test_app(&["Only"], None);
    assert_eq!(app.watching_text(), "");

    press(&mut app, KeyCode::F(3));
    assert_eq!(app.dialog().cloned(), info("Selected Item: Only"));
    assert_eq!(app.watching_text(), "Only");
    assert_eq!(
        fs::read_to_string(app.watchlist().watching().path()).unwrap(),
        "Only"
    );
}

#[test]
fn test_tab_cycles_focus() {
    let (_dir, mut app) = test_app(&[], None);
    let expected = [
        Focus::AddButton,
        Focus::SelectButton,
        Focus::RemoveButton,
        Focus::Watching,
        Focus::Input,
    ];
    for focus in expected {
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), focus);
    }

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus(), Focus::Watching);
}

#[test]
fn test_remove_button_uses_watching_field() {
    let (_dir, mut app) = test_app(&["A", "B"], Some("A"));

    // Input -> Add -> Select -> Remove
    for _ in 0..3 {
        press(&mut app, KeyCode::Tab);
    }
    assert_eq!(app.focus(), Focus::RemoveButton);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.dialog().cloned(), info("Removed item: A"));
    assert_eq!(app.items_text(), "B");
    // The field and the saved value stay as they were
    assert_eq!(app.watching_text(), "A");
    assert_eq!(app.watchlist().watching().get(), Some("A"));
}

#[test]
fn test_enter_in_watching_field_removes_edited_text() {
    let (_dir, mut app) = test_app(&["Paprika", "Tokyo Godfather"], None);

    for _ in 0..4 {
        press(&mut app, KeyCode::Tab);
    }
    assert_eq!(app.focus(), Focus::Watching);

    type_text(&mut app, "Tokyo Godfather");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.dialog().cloned(), info("Removed item: Tokyo Godfather"));
    assert_eq!(app.watchlist().items().snapshot(), ["Paprika"]);
    // Editing the field does not touch the saved value
    assert_eq!(app.watchlist().watching().get(), None);
}

#[test]
fn test_remove_unknown_item() {
    let (_dir, mut app) = test_app(&["A"], Some("Z"));

    press(&mut app, KeyCode::F(4));
    assert_eq!(app.dialog().cloned(), rejected(NOTICE_REMOVE_REJECTED));
    assert_eq!(app.watchlist().items().len(), 1);
}

#[test]
fn test_help_dialog_opens_and_closes() {
    let (_dir, mut app) = test_app(&[], None);

    press(&mut app, KeyCode::F(1));
    assert_eq!(app.dialog().cloned(), Some(DialogType::Help));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Esc);
    assert!(app.dialog().is_none());
    assert!(!app.should_quit());
}

#[test]
fn test_quit_keys() {
    let (_dir, mut app) = test_app(&[], None);
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());

    let (_dir, mut app) = test_app(&[], None);
    press_with(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL);
    assert!(app.should_quit());

    // Plain q is just text
    let (_dir, mut app) = test_app(&[], None);
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit());
    assert_eq!(app.input_text(), "q");
}

#[test]
fn test_mouse_click_presses_button_and_focuses_field() {
    let (_dir, mut app) = test_app(&["Akira"], None);
    type_text(&mut app, "Ghost in the Shell");

    // Widget areas are known once a frame has been drawn
    render_lines(&mut app);
    let layout = LayoutManager::main_layout(ratatui::layout::Rect::new(0, 0, super::WIDTH, super::HEIGHT));
    let [add, _, _] = LayoutManager::button_layout(layout.buttons);

    click(&mut app, add.x + 2, add.y + 1);
    assert_eq!(app.dialog().cloned(), info("Item added: Ghost in the Shell"));
    assert_eq!(app.watchlist().items().len(), 2);

    // Clicks are ignored while a dialog is open
    click(&mut app, add.x + 2, add.y + 1);
    assert_eq!(app.watchlist().items().len(), 2);
    press(&mut app, KeyCode::Enter);

    let [_, field, _] = LayoutManager::watching_layout(layout.watching);
    click(&mut app, field.x + 2, field.y + 1);
    assert_eq!(app.focus(), Focus::Watching);
}

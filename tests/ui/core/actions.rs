use watch2gether::ui::core::{Action, Focus};

#[test]
fn test_default_focus_is_input() {
    assert_eq!(Focus::default(), Focus::Input);
}

#[test]
fn test_focus_ring_round_trip() {
    let mut focus = Focus::Input;
    for _ in 0..5 {
        focus = focus.next();
    }
    assert_eq!(focus, Focus::Input, "five steps go all the way round");

    assert_eq!(Focus::Input.previous(), Focus::Watching);
    assert_eq!(Focus::Watching.next(), Focus::Input);
}

#[test]
fn test_only_buttons_have_actions() {
    assert_eq!(Focus::AddButton.button_action(), Some(Action::AddItem));
    assert_eq!(Focus::SelectButton.button_action(), Some(Action::SelectRandom));
    assert_eq!(Focus::RemoveButton.button_action(), Some(Action::RemoveItem));
    assert_eq!(Focus::Input.button_action(), None);
    assert_eq!(Focus::Watching.button_action(), None);
}

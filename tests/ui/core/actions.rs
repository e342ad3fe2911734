use tallylist::ui::core::actions::Focus;

#[test]
fn test_focus_ring_with_clear_button() {
    let mut focus = Focus::Input;
    let mut visited = Vec::new();
    for _ in 0..4 {
        focus = focus.next(true);
        visited.push(focus);
    }
    assert_eq!(
        visited,
        vec![Focus::AddButton, Focus::List, Focus::ClearButton, Focus::Input]
    );
}

#[test]
fn test_focus_ring_skips_hidden_clear_button() {
    assert_eq!(Focus::List.next(false), Focus::Input);
    assert_eq!(Focus::Input.previous(false), Focus::List);
}

#[test]
fn test_focus_previous_is_inverse_of_next() {
    for focus in [Focus::Input, Focus::AddButton, Focus::List, Focus::ClearButton] {
        assert_eq!(focus.next(true).previous(true), focus);
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tallylist::ui::core::{EventType, Focus};
use tallylist::ui::AppComponent;

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn add_item(app: &mut AppComponent, text: &str) {
    type_text(app, text);
    press(app, KeyCode::Enter);
}

#[test]
fn test_typing_and_enter_adds_item() {
    let mut app = AppComponent::default();
    type_text(&mut app, "buy milk");
    assert_eq!(app.todos().draft(), "buy milk");

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.todos().total_count(), 1);
    assert_eq!(app.todos().items()[0].text, "buy milk");
    assert_eq!(app.todos().draft(), "");
}

#[test]
fn test_q_is_typed_while_input_focused() {
    let mut app = AppComponent::default();
    type_text(&mut app, "quit");

    assert!(!app.should_quit());
    assert_eq!(app.todos().draft(), "quit");
}

#[test]
fn test_add_button_adds_item() {
    let mut app = AppComponent::default();
    type_text(&mut app, "walk dog");
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::AddButton);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.todos().total_count(), 1);
}

#[test]
fn test_blank_draft_enter_is_noop() {
    let mut app = AppComponent::default();
    type_text(&mut app, "   ");
    let before = app.snapshot();

    press(&mut app, KeyCode::Enter);
    assert!(app.snapshot().same_as(&before));
    assert_eq!(app.todos().draft(), "   ");
}

#[test]
fn test_toggle_and_delete_from_list() {
    let mut app = AppComponent::default();
    add_item(&mut app, "a");
    add_item(&mut app, "b");

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::List);

    // Select "b" and toggle it
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char(' '));
    assert!(!app.todos().items()[0].completed);
    assert!(app.todos().items()[1].completed);

    // Delete "b"; selection falls back to "a"
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.todos().total_count(), 1);
    assert_eq!(app.todos().items()[0].text, "a");

    press(&mut app, KeyCode::Enter);
    assert!(app.todos().items()[0].completed);
}

#[test]
fn test_clear_button_flow() {
    let mut app = AppComponent::default();
    add_item(&mut app, "a");
    add_item(&mut app, "b");

    // Input -> Add -> List -> Clear
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus(), Focus::ClearButton);

    // Disabled while nothing is completed
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.todos().total_count(), 2);

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus(), Focus::List);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::ClearButton);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.todos().total_count(), 1);
    assert_eq!(app.todos().items()[0].text, "b");
}

#[test]
fn test_disabled_clear_button_keeps_same_state() {
    let mut app = AppComponent::default();
    add_item(&mut app, "a");
    add_item(&mut app, "b");

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus(), Focus::ClearButton);

    let before = app.snapshot();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char(' '));
    assert!(app.snapshot().same_as(&before));
}

#[test]
fn test_focus_leaves_clear_button_when_list_empties() {
    let mut app = AppComponent::default();
    add_item(&mut app, "a");

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::ClearButton);

    press(&mut app, KeyCode::Enter);
    assert!(app.todos().is_empty());
    assert_eq!(app.focus(), Focus::Input);
}

#[test]
fn test_quit_keys() {
    let mut app = AppComponent::default();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = AppComponent::default();
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());

    let mut app = AppComponent::default();
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_t_cycles_icon_theme() {
    use tallylist::icons::IconTheme;

    let mut app = AppComponent::default();
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL)));

    assert_eq!(app.icons().theme(), IconTheme::Unicode);
    assert_eq!(app.todos().draft(), "");
}

#[test]
fn test_log_panel_takes_keys_while_open() {
    let mut app = AppComponent::default();
    let ctrl_l = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);

    app.handle_event(EventType::Key(ctrl_l));
    assert!(app.is_log_panel_visible());

    // Typing goes nowhere and Esc closes the panel instead of quitting
    type_text(&mut app, "xq");
    assert_eq!(app.todos().draft(), "");
    press(&mut app, KeyCode::Esc);
    assert!(!app.is_log_panel_visible());
    assert!(!app.should_quit());

    app.handle_event(EventType::Key(ctrl_l));
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
}

#[test]
fn test_clear_logs_key_empties_buffer() {
    use tallylist::config::Config;
    use tallylist::logger::Logger;

    let logger = Logger::new();
    let mut app = AppComponent::new(&Config::default(), logger.clone());
    logger.log("something happened".to_string());

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL)));
    press(&mut app, KeyCode::Char('c'));
    assert!(logger.get_logs().is_empty());
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tallylist::config::Config;
use tallylist::logger::Logger;
use tallylist::ui::core::{Action, Component, EventType};
use tallylist::ui::AppComponent;

/// Render the app and return the buffer as text with all spaces removed.
///
/// Wide characters leave blank filler cells behind them, so comparing without
/// spaces keeps the Korean strings matchable.
fn render_compact(app: &mut AppComponent) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let buf = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text.replace(' ', "")
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn add_item(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
    press(app, KeyCode::Enter);
}

#[test]
fn test_empty_state_rendering() {
    let mut app = AppComponent::default();
    let text = render_compact(&mut app);

    assert!(text.contains("할일목록"));
    assert!(text.contains("완료:0/0"));
    assert!(text.contains("새로운할일을입력하세요..."));
    assert!(text.contains("할일이없습니다.새로운할일을추가해보세요!"));
    assert!(!text.contains("완료된항목삭제"));
}

#[test]
fn test_list_rendering_with_items() {
    let mut app = AppComponent::default();
    add_item(&mut app, "milk");
    add_item(&mut app, "dog");

    let text = render_compact(&mut app);
    assert!(text.contains("완료:0/2"));
    assert!(text.contains("[]milk"));
    assert!(text.contains("[]dog"));
    assert!(text.contains("완료된항목삭제(0)"));
    assert!(!text.contains("할일이없습니다"));
}

#[test]
fn test_completed_item_is_struck_through() {
    use ratatui::style::Modifier;

    let mut app = AppComponent::default();
    add_item(&mut app, "milk");

    // Input -> AddButton -> List, then toggle the selected row
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));

    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let buf = terminal.backend().buffer();
    let mut found = false;
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            let cell = &buf[(x, y)];
            if cell.symbol() == "m" && cell.modifier.contains(Modifier::CROSSED_OUT) {
                found = true;
            }
        }
    }
    assert!(found, "completed text should be rendered crossed out");

    let text = render_compact(&mut app);
    assert!(text.contains("[X]milk"));
    assert!(text.contains("완료:1/1"));
    assert!(text.contains("완료된항목삭제(1)"));
}

#[test]
fn test_direct_action_refreshes_rendered_rows() {
    let mut app = AppComponent::default();
    add_item(&mut app, "milk");
    let id = app.todos().items()[0].id;

    app.handle_app_action(Action::RemoveItem(id));

    let text = render_compact(&mut app);
    assert!(!text.contains("milk"));
    assert!(text.contains("할일이없습니다.새로운할일을추가해보세요!"));
    assert!(text.contains("완료:0/0"));
    assert!(!text.contains("완료된항목삭제"));
}

#[test]
fn test_long_draft_shows_its_end() {
    let mut app = AppComponent::default();
    let draft = format!("start{}finish", "x".repeat(120));
    for c in draft.chars() {
        press(&mut app, KeyCode::Char(c));
    }

    let text = render_compact(&mut app);
    assert!(text.contains("finish"));
    assert!(!text.contains("start"));
}

#[test]
fn test_log_panel_shows_recent_lines() {
    let logger = Logger::new();
    let mut app = AppComponent::new(&Config::default(), logger.clone());
    logger.log("panel check line".to_string());

    assert!(!render_compact(&mut app).contains("panelcheckline"));

    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL)));
    assert!(render_compact(&mut app).contains("panelcheckline"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = AppComponent::default();
    add_item(&mut app, "a");

    let backend = TestBackend::new(10, 4);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
}

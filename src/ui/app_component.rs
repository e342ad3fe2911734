use crate::config::Config;
use crate::constants::{counter_text, KEY_HINTS, TITLE};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::todo::{TodoList, TodoSnapshot};
use crate::ui::components::{ClearCompletedComponent, InputComponent, LogPanelComponent, TodoListComponent};
use crate::ui::core::{Action, Component, EventType, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct AppComponent {
    // Component composition
    input: InputComponent,
    todo_list: TodoListComponent,
    clear_button: ClearCompletedComponent,
    log_panel: LogPanelComponent,

    // Application state
    todos: TodoList,
    focus: Focus,
    icons: IconService,
    max_width: u16,

    // Services
    logger: Logger,

    should_quit: bool,
}

impl Default for AppComponent {
    fn default() -> Self {
        Self::new(&Config::default(), Logger::new())
    }
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger) -> Self {
        let mut app = Self {
            input: InputComponent::new(),
            todo_list: TodoListComponent::new(),
            clear_button: ClearCompletedComponent::new(),
            log_panel: LogPanelComponent::new(),
            todos: TodoList::new(),
            focus: Focus::default(),
            icons: IconService::new(config.ui.icon_theme),
            max_width: config.ui.max_width,
            logger,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    pub fn snapshot(&self) -> TodoSnapshot {
        self.todos.snapshot()
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    pub fn is_log_panel_visible(&self) -> bool {
        self.log_panel.visible
    }

    /// Push the current state down into every child component
    fn sync_component_data(&mut self) {
        let snapshot = self.todos.snapshot();

        self.input.update_data(snapshot.draft(), self.icons.clone());
        self.todo_list.update_data(snapshot.items(), self.icons.clone());
        self.clear_button
            .update_data(snapshot.completed_count(), snapshot.total_count());

        // The clear button disappears with the last item
        if self.focus == Focus::ClearButton && !self.clear_button.is_visible() {
            self.focus = Focus::Input;
        }

        self.input.set_focus(self.focus);
        self.todo_list.set_focus(self.focus);
        self.clear_button.set_focus(self.focus);

        if self.log_panel.visible {
            self.log_panel.update_data(self.logger.get_logs());
        }
    }

    /// Handle keyboard shortcuts that no component claimed
    fn handle_global_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::CycleIconTheme,
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::ToggleLogs,
            KeyCode::Esc => Action::Quit,
            KeyCode::Char('q') if self.focus != Focus::Input => Action::Quit,
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrevious,
            _ => Action::None,
        }
    }

    /// Route one key press to the focused component, then to the global keys
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        // The log panel has priority when visible; only quit gets past it
        if self.log_panel.visible {
            let action = self.log_panel.handle_key_events(key);
            let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            return if matches!(action, Action::None) && ctrl_c {
                Action::Quit
            } else {
                action
            };
        }

        let action = match self.focus {
            Focus::Input | Focus::AddButton => self.input.handle_key_events(key),
            Focus::List => self.todo_list.handle_key_events(key),
            Focus::ClearButton => self.clear_button.handle_key_events(key),
        };

        if matches!(action, Action::None) {
            self.handle_global_key(key)
        } else {
            action
        }
    }

    /// Apply one terminal event to completion
    pub fn handle_event(&mut self, event: EventType) {
        let action = match event {
            EventType::Key(key) => self.handle_key(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action);
    }

    /// Apply an app-level action, then refresh every child from the new state
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        let action = self.apply_action(action);
        self.sync_component_data();
        action
    }

    fn apply_action(&mut self, action: Action) -> Action {
        match action {
            Action::SetDraft(text) => {
                self.todos.set_draft(text);
                Action::None
            }
            Action::AddFromDraft => {
                if self.todos.add_from_draft() {
                    info!("Todo: added item, {} total", self.todos.total_count());
                }
                Action::None
            }
            Action::ToggleItem(id) => {
                if self.todos.toggle(id) {
                    info!("Todo: toggled item {}", id);
                }
                Action::None
            }
            Action::RemoveItem(id) => {
                if self.todos.remove(id) {
                    info!("Todo: removed item {}", id);
                }
                Action::None
            }
            Action::ClearCompleted => {
                if self.todos.clear_completed() {
                    info!("Todo: cleared completed items, {} left", self.todos.total_count());
                }
                Action::None
            }
            Action::FocusNext => {
                self.focus = self.focus.next(self.clear_button.is_visible());
                debug!("Focus: moved to {:?}", self.focus);
                Action::None
            }
            Action::FocusPrevious => {
                self.focus = self.focus.previous(self.clear_button.is_visible());
                debug!("Focus: moved to {:?}", self.focus);
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                info!("Icons: switched to {:?}", self.icons.theme());
                Action::None
            }
            Action::ToggleLogs => {
                self.log_panel.visible = !self.log_panel.visible;
                debug!("Logs: panel {}", if self.log_panel.visible { "shown" } else { "hidden" });
                Action::None
            }
            Action::ClearLogs => {
                self.logger.clear();
                Action::None
            }
            Action::Quit => {
                info!("Quitting");
                self.should_quit = true;
                Action::None
            }
            // Pass through other actions
            _ => action,
        }
    }

    fn centered_column(&self, rect: Rect) -> Rect {
        let width = self.max_width.min(rect.width);
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(width), Constraint::Fill(1)]).split(rect)[1]
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Selection moves are consumed by the list
        self.todo_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let column = self.centered_column(rect);
        let clear_height = if self.clear_button.is_visible() { 3 } else { 0 };

        let chunks = Layout::vertical([
            Constraint::Length(1),            // title
            Constraint::Length(1),            // counter
            Constraint::Length(1),            // spacer
            Constraint::Length(3),            // input + add
            Constraint::Min(3),               // list
            Constraint::Length(clear_height), // clear completed
            Constraint::Length(1),            // key hints
        ])
        .split(column);

        let snapshot = self.todos.snapshot();

        let title = Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let counter = Paragraph::new(counter_text(snapshot.completed_count(), snapshot.total_count()))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(counter, chunks[1]);

        self.input.render(f, chunks[3]);
        self.todo_list.render(f, chunks[4]);
        self.clear_button.render(f, chunks[5]);

        let hints = Paragraph::new(KEY_HINTS)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(hints, chunks[6]);

        // Log panel on top if visible
        self.log_panel.render(f, rect);
    }
}

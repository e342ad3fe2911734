//! Overlay showing the in-memory log lines, newest first

use crate::constants::LOG_PANEL_TITLE;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct LogPanelComponent {
    pub visible: bool,
    pub logs: Vec<String>,
}

impl LogPanelComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, logs: Vec<String>) {
        self.logs = logs;
    }

    fn panel_area(rect: Rect) -> Rect {
        let vertical = Layout::vertical([
            Constraint::Percentage(5),
            Constraint::Percentage(90),
            Constraint::Percentage(5),
        ])
        .split(rect);

        Layout::horizontal([
            Constraint::Percentage(5),
            Constraint::Percentage(90),
            Constraint::Percentage(5),
        ])
        .split(vertical[1])[1]
    }
}

impl Component for LogPanelComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.visible {
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => Action::ToggleLogs,
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::ToggleLogs,
            KeyCode::Char('c') if key.modifiers.is_empty() => Action::ClearLogs,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.visible {
            return;
        }

        let area = Self::panel_area(rect);
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(LOG_PANEL_TITLE)
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(Color::Cyan));

        if self.logs.is_empty() {
            let empty = Paragraph::new("No logs yet")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .logs
            .iter()
            .map(|line| ListItem::new(line.as_str()))
            .collect();
        let list = List::new(items).block(block).style(Style::default().fg(Color::White));
        f.render_widget(list, area);
    }
}

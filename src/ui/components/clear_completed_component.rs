use crate::constants::clear_completed_label;
use crate::ui::core::{Action, Component, Focus};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// "Clear completed" control.
///
/// Hidden while the list is empty, disabled while nothing is completed.
#[derive(Default)]
pub struct ClearCompletedComponent {
    pub completed_count: usize,
    pub total_count: usize,
    pub focused: bool,
}

impl ClearCompletedComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, completed_count: usize, total_count: usize) {
        self.completed_count = completed_count;
        self.total_count = total_count;
    }

    pub fn is_visible(&self) -> bool {
        self.total_count > 0
    }

    pub fn is_enabled(&self) -> bool {
        self.completed_count > 0
    }

    pub fn label(&self) -> String {
        clear_completed_label(self.completed_count)
    }
}

impl Component for ClearCompletedComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.focused || !self.is_visible() {
            return Action::None;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') if self.is_enabled() => Action::ClearCompleted,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.is_visible() {
            return;
        }

        let label = self.label();
        let width = (Line::from(label.as_str()).width() as u16 + 4).min(rect.width);
        let area =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(width), Constraint::Fill(1)]).split(rect)[1];

        let style = if !self.is_enabled() {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else if self.focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            style
        };

        let button = Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
        f.render_widget(button, area);
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focused = focus == Focus::ClearButton;
    }
}

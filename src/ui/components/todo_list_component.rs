use super::todo_item_component::TodoItemRow;
use crate::constants::EMPTY_LIST_MESSAGE;
use crate::icons::IconService;
use crate::todo::Item;
use crate::ui::core::{Action, Component, Focus};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListState, Paragraph, Wrap},
    Frame,
};

pub struct TodoListComponent {
    pub items: Vec<Item>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub focused: bool,
    pub icons: IconService,
}

impl Default for TodoListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoListComponent {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            focused: false,
            icons: IconService::default(),
        }
    }

    pub fn update_data(&mut self, items: &[Item], icons: IconService) {
        self.items = items.to_vec();
        self.icons = icons;
        self.update_list_state();
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected_index)
    }

    fn update_list_state(&mut self) {
        if self.items.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.items.len() {
                self.selected_index = self.items.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for TodoListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.focused {
            return Action::None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousItem,
            KeyCode::Down | KeyCode::Char('j') => Action::NextItem,
            KeyCode::Enter | KeyCode::Char(' ') => match self.selected_item() {
                Some(item) => Action::ToggleItem(item.id),
                None => Action::None,
            },
            KeyCode::Delete | KeyCode::Char('d') => match self.selected_item() {
                Some(item) => Action::RemoveItem(item.id),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextItem => {
                if !self.items.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.items.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousItem => {
                if !self.items.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.items.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default().borders(Borders::ALL).border_style(border_style);

        if self.items.is_empty() {
            let empty = Paragraph::new(EMPTY_LIST_MESSAGE)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(empty, rect);
            return;
        }

        let rows: Vec<_> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let selected = self.focused && index == self.selected_index;
                TodoItemRow::new(item, &self.icons).render(selected)
            })
            .collect();

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let list = List::new(rows).block(block).highlight_style(highlight);
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focused = focus == Focus::List;
    }
}

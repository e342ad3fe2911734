use crate::icons::IconService;
use crate::todo::Item;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// One row of the list: checkbox, text, delete control
#[derive(Debug, Clone)]
pub struct TodoItemRow<'a> {
    pub item: &'a Item,
    pub icons: &'a IconService,
}

impl<'a> TodoItemRow<'a> {
    pub fn new(item: &'a Item, icons: &'a IconService) -> Self {
        Self { item, icons }
    }

    fn text_style(&self, selected: bool) -> Style {
        let style = if self.item.completed {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White)
        };

        if selected {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn render(&self, selected: bool) -> ListItem<'static> {
        let checkbox_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if self.item.completed {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };

        let line = Line::from(vec![
            Span::styled(format!("{} ", self.icons.checkbox(self.item.completed)), checkbox_style),
            Span::styled(self.item.text.clone(), self.text_style(selected)),
            Span::raw(" "),
            Span::styled(self.icons.delete(), Style::default().fg(Color::Red)),
        ]);

        let row = ListItem::new(line);
        if self.item.completed {
            row.style(Style::default().bg(Color::Rgb(30, 30, 30)))
        } else {
            row
        }
    }
}

use crate::constants::INPUT_PLACEHOLDER;
use crate::icons::IconService;
use crate::ui::core::{Action, Component, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Entry field bound to the draft, plus the "Add" control next to it.
///
/// The component never edits the draft itself; every keystroke produces a
/// [`Action::SetDraft`] carrying the whole new text.
pub struct InputComponent {
    pub draft: String,
    pub focus: Focus,
    pub icons: IconService,
}

impl Default for InputComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl InputComponent {
    pub fn new() -> Self {
        Self {
            draft: String::new(),
            focus: Focus::Input,
            icons: IconService::default(),
        }
    }

    pub fn update_data(&mut self, draft: &str, icons: IconService) {
        if self.draft != draft {
            self.draft = draft.to_string();
        }
        self.icons = icons;
    }

    /// Width taken by the add control, borders included
    pub fn add_button_width(&self) -> u16 {
        Line::from(self.icons.add()).width() as u16 + 4
    }

    fn handle_field_key(&self, key: KeyEvent) -> Action {
        let modifiers = key.modifiers;
        match key.code {
            KeyCode::Enter => Action::AddFromDraft,
            KeyCode::Backspace => {
                let mut text = self.draft.clone();
                if text.pop().is_some() {
                    Action::SetDraft(text)
                } else {
                    Action::None
                }
            }
            KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
                if self.draft.is_empty() {
                    Action::None
                } else {
                    Action::SetDraft(String::new())
                }
            }
            KeyCode::Char(c) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                let mut text = self.draft.clone();
                text.push(c);
                Action::SetDraft(text)
            }
            _ => Action::None,
        }
    }

    /// Longest suffix of `text` that fits in `max_width` terminal columns
    pub fn visible_tail(text: &str, max_width: usize) -> &str {
        let mut width = 0;
        let mut start = text.len();
        for (index, ch) in text.char_indices().rev() {
            let ch_width = Span::raw(ch.to_string()).width();
            if width + ch_width > max_width {
                break;
            }
            width += ch_width;
            start = index;
        }
        &text[start..]
    }

    fn focused_style(focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

impl Component for InputComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.focus {
            Focus::Input => self.handle_field_key(key),
            Focus::AddButton => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Action::AddFromDraft,
                _ => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::horizontal([Constraint::Min(10), Constraint::Length(self.add_button_width())]).split(rect);

        let field_focused = self.focus == Focus::Input;
        let mut spans = Vec::new();
        if self.draft.is_empty() {
            if field_focused {
                spans.push(Span::styled(self.icons.cursor(), Style::default().fg(Color::Yellow)));
            }
            spans.push(Span::styled(INPUT_PLACEHOLDER, Style::default().fg(Color::DarkGray)));
        } else {
            // Keep the end of a long draft (and the cursor) in view
            let cursor_width = if field_focused { Line::from(self.icons.cursor()).width() } else { 0 };
            let room = (chunks[0].width.saturating_sub(2) as usize).saturating_sub(cursor_width);
            let shown = Self::visible_tail(&self.draft, room);
            spans.push(Span::styled(shown.to_string(), Style::default().fg(Color::White)));
            if field_focused {
                spans.push(Span::styled(self.icons.cursor(), Style::default().fg(Color::Yellow)));
            }
        }

        let field = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Self::focused_style(field_focused)),
        );
        f.render_widget(field, chunks[0]);

        let button_focused = self.focus == Focus::AddButton;
        let button = Paragraph::new(Line::from(Span::styled(
            self.icons.add(),
            Self::focused_style(button_focused),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Self::focused_style(button_focused)),
        );
        f.render_widget(button, chunks[1]);
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }
}

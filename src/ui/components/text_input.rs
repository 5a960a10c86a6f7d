//! Single-line editable text field

use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Editable one-line field with a character cursor.
///
/// Enter is not handled here: what it does depends on which field is focused,
/// so the application component maps it.
pub struct TextInput {
    title: String,
    value: String,
    /// Cursor position in characters, 0..=len
    cursor: usize,
    focused: bool,
    area: Rect,
}

impl TextInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: String::new(),
            cursor: 0,
            focused: false,
            area: Rect::default(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the text and move the cursor to the end
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when the last render placed the field under (column, row)
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert(&mut self, c: char) {
        let index = self.byte_index(self.cursor);
        self.value.insert(index, c);
        self.cursor += 1;
    }

    fn delete_before_cursor(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let index = self.byte_index(self.cursor);
            self.value.remove(index);
        }
    }

    fn delete_at_cursor(&mut self) {
        if self.cursor < self.char_count() {
            let index = self.byte_index(self.cursor);
            self.value.remove(index);
        }
    }

    /// Columns to scroll so the cursor cell stays inside `visible_width`
    fn horizontal_scroll(&self, visible_width: usize) -> u16 {
        let (before, rest) = self.value.split_at(self.byte_index(self.cursor));
        let cursor_width = rest
            .chars()
            .next()
            .and_then(UnicodeWidthChar::width)
            .unwrap_or(1)
            .max(1);
        let cursor_end = before.width() + cursor_width;
        u16::try_from(cursor_end.saturating_sub(visible_width)).unwrap_or(u16::MAX)
    }

    fn content_line(&self) -> Line<'static> {
        let text_style = Style::default().fg(Color::White);
        if !self.focused {
            return Line::from(Span::styled(self.value.clone(), text_style));
        }

        let split = self.byte_index(self.cursor);
        let (before, rest) = self.value.split_at(split);
        let mut rest_chars = rest.chars();
        let under_cursor = rest_chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after: String = rest_chars.collect();

        Line::from(vec![
            Span::styled(before.to_string(), text_style),
            Span::styled(under_cursor, text_style.add_modifier(Modifier::REVERSED)),
            Span::styled(after, text_style),
        ])
    }
}

impl Component for TextInput {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.insert(c);
            }
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.char_count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.char_count(),
            _ => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;

        let border_color = if self.focused { Color::Yellow } else { Color::Gray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(Color::White))
            .style(Style::default().fg(border_color));

        // Keep the cursor visible on long values
        let visible_width = rect.width.saturating_sub(2) as usize;
        let horizontal_scroll = self.horizontal_scroll(visible_width);

        let paragraph = Paragraph::new(self.content_line())
            .block(block)
            .scroll((0, horizontal_scroll));
        f.render_widget(paragraph, rect);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}

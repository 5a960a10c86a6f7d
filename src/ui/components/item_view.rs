//! Read-only view of the whole watch list

use crate::constants::PANEL_ITEMS;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Shows the items one per line in list order.
///
/// The content is replaced wholesale on every refresh; only the scroll
/// position survives, clamped to the new length.
pub struct ItemView {
    lines: Vec<String>,
    text: String,
    line_count: usize,
    scroll_offset: usize,
    viewport_height: usize,
    scrollbar: ScrollbarHelper,
    area: Rect,
}

impl Default for ItemView {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemView {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            text: String::new(),
            line_count: 0,
            scroll_offset: 0,
            viewport_height: 0,
            scrollbar: ScrollbarHelper::new(),
            area: Rect::default(),
        }
    }

    /// Replace the displayed content with `items`, one per line
    pub fn set_items(&mut self, items: &[String]) {
        self.lines = items.to_vec();
        self.text = items.join("\n");
        self.line_count = items.len();
        self.clamp_scroll();
    }

    /// Text currently shown, items joined by newlines
    pub fn text(&self) -> &str {
        &self.text
    }

    fn max_scroll(&self) -> usize {
        self.line_count.saturating_sub(self.viewport_height.max(1))
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
        self.clamp_scroll();
    }

    fn page(&self) -> isize {
        self.viewport_height.max(1) as isize
    }
}

impl Component for ItemView {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        // Read-only; scrolling keys are global and arrive through update()
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !self.area.contains(Position::new(mouse.column, mouse.row)) {
            return Action::None;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => Action::ScrollUp,
            MouseEventKind::ScrollDown => Action::ScrollDown,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ScrollUp => self.scroll_by(-1),
            Action::ScrollDown => self.scroll_by(1),
            Action::PageUp => self.scroll_by(-self.page()),
            Action::PageDown => self.scroll_by(self.page()),
            Action::ScrollToTop => self.scroll_offset = 0,
            Action::ScrollToBottom => self.scroll_offset = self.max_scroll(),
            _ => return action,
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;
        self.viewport_height = rect.height.saturating_sub(2) as usize;
        self.clamp_scroll();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ({}) ", PANEL_ITEMS, self.line_count))
            .title_style(Style::default().fg(Color::White))
            .style(Style::default().fg(Color::Gray));

        // Only the visible window is drawn
        let visible: Vec<Line> = self
            .lines
            .iter()
            .skip(self.scroll_offset)
            .take(self.viewport_height)
            .map(|line| Line::raw(line.as_str()))
            .collect();
        let paragraph = Paragraph::new(visible)
            .block(block)
            .style(Style::default().fg(Color::White));
        f.render_widget(paragraph, rect);

        let scrollbar_area = ScrollbarHelper::scrollbar_area(rect, self.line_count);
        self.scrollbar
            .update_state(self.line_count, self.scroll_offset, self.viewport_height);
        self.scrollbar.render(f, scrollbar_area);
    }
}
